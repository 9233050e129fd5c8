// VMS Server Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::cluster::ServerState;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "vmsservers";
const ELEMENT: &str = "VmsServer";

/// A voicemail server registered in the directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VmsServer {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub server_name: String,
    pub host_name: String,
    pub ip_address: String,
    pub ip_address_v6: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub cluster_member_id: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub server_state: i32,
}

impl VmsServer {
    pub fn state(&self) -> ServerState {
        ServerState::from_code(self.server_state)
    }
}

impl fmt::Display for VmsServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.server_name, self.ip_address, self.object_id)
    }
}

pub struct VmsServerClient {
    base: BaseResourceClient,
}

impl VmsServerClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "vms_server"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<VmsServer>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<VmsServer> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }
}

impl ResourceClient for VmsServerClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for VmsServerClient {}

impl ResourceOperations for VmsServerClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
