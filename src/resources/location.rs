// Location Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "locations/connectionlocations";
const ELEMENT: &str = "ConnectionLocation";

/// A Connection server or cluster joined to the digital network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Location {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub display_name: String,
    pub host_address: String,
    pub smtp_domain: String,
    pub dtmf_access_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_primary: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub destination_type: i32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.display_name, self.host_address, self.object_id)
    }
}

pub struct LocationClient {
    base: BaseResourceClient,
}

impl LocationClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "location"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<Location>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<Location> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }

    pub async fn get_by_name(&self, display_name: impl Into<String>) -> CupiResult<Location> {
        let display_name = self.validate_string(display_name, "display_name")?;
        self.fetch_first(COLLECTION_PATH, ELEMENT, "displayname", &display_name).await
    }
}

impl ResourceClient for LocationClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for LocationClient {}

impl ResourceOperations for LocationClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
