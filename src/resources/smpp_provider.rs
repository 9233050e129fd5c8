// SMPP Provider Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "smppproviders";
const ELEMENT: &str = "SmppProvider";

/// SMS gateway used for text notifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SmppProvider {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub text_name: String,
    pub host_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub port: u16,
    pub system_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_enabled: bool,
    pub source_address: String,
}

impl fmt::Display for SmppProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} (enabled={})",
            self.text_name, self.host_name, self.port, self.is_enabled
        )
    }
}

pub struct SmppProviderClient {
    base: BaseResourceClient,
}

impl SmppProviderClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "smpp_provider"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<SmppProvider>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<SmppProvider> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }
}

impl ResourceClient for SmppProviderClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for SmppProviderClient {}

impl ResourceOperations for SmppProviderClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
