// Restriction Pattern Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "RestrictionPattern";

/// One dial pattern of a restriction table. Patterns are evaluated in
/// `SequenceNumber` order and the first match decides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RestrictionPattern {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub restriction_table_object_id: String,
    pub number_pattern: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub blocked: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub sequence_number: i32,
}

impl fmt::Display for RestrictionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.blocked { "blocked" } else { "allowed" };
        write!(f, "{}: {} {}", self.sequence_number, self.number_pattern, verdict)
    }
}

pub struct RestrictionPatternClient {
    base: BaseResourceClient,
}

fn collection_path(table_id: &str) -> String {
    format!("restrictiontables/{}/restrictionpatterns", table_id)
}

impl RestrictionPatternClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "restriction_pattern"),
        }
    }

    pub async fn list(&self, table_id: impl Into<String>, clauses: &Clauses) -> CupiResult<Page<RestrictionPattern>> {
        let table_id = self.validate_identifier(table_id, "table_id")?;
        self.fetch_page(&collection_path(&table_id), ELEMENT, clauses).await
    }

    pub async fn get(&self, table_id: impl Into<String>, object_id: impl Into<String>) -> CupiResult<RestrictionPattern> {
        let table_id = self.validate_identifier(table_id, "table_id")?;
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", collection_path(&table_id), object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }
}

impl ResourceClient for RestrictionPatternClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for RestrictionPatternClient {}

impl ResourceOperations for RestrictionPatternClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
