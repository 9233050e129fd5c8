// Global User Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "globalusers";
const ELEMENT: &str = "GlobalUser";

/// Directory entry for a user homed on any location of the network.
/// Read only; users are changed through their home server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GlobalUser {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub alias: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub dtmf_access_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_template: bool,
    pub location_object_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub list_in_directory: bool,
}

impl fmt::Display for GlobalUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] x{}", self.alias, self.display_name, self.dtmf_access_id)
    }
}

pub struct GlobalUserClient {
    base: BaseResourceClient,
}

impl GlobalUserClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "global_user"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<GlobalUser>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<GlobalUser> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }

    pub async fn get_by_alias(&self, alias: impl Into<String>) -> CupiResult<GlobalUser> {
        let alias = self.validate_string(alias, "alias")?;
        self.fetch_first(COLLECTION_PATH, ELEMENT, "alias", &alias).await
    }

    /// Look a user up by object id when one is given, otherwise by alias
    pub async fn fetch(&self, object_id: Option<&str>, alias: Option<&str>) -> CupiResult<GlobalUser> {
        let object_id = object_id.filter(|id| !id.trim().is_empty());
        let alias = alias.filter(|alias| !alias.trim().is_empty());
        match (object_id, alias) {
            (Some(id), _) => self.get(id).await,
            (None, Some(alias)) => self.get_by_alias(alias).await,
            (None, None) => self.resource_error("An object id or an alias is required"),
        }
    }
}

impl ResourceClient for GlobalUserClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for GlobalUserClient {}

impl ResourceOperations for GlobalUserClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
