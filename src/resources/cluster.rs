// Cluster Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "cluster";
const ELEMENT: &str = "Server";

/// Role and health of one cluster member, as the numeric code the server reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerState {
    PrimaryInit,
    PrimaryActive,
    PrimaryActiveSecondary,
    PrimaryIdle,
    PrimaryFailover,
    PrimaryTakeover,
    PrimarySplitBrainResolution,
    SecondaryInit,
    SecondaryActive,
    SecondaryIdle,
    SecondaryTakeover,
    SecondaryFailover,
    SecondarySplitBrainResolution,
    Deactivated,
    PrimarySingle,
    Unknown(i32),
}

impl ServerState {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ServerState::PrimaryInit,
            1 => ServerState::PrimaryActive,
            2 => ServerState::PrimaryActiveSecondary,
            3 => ServerState::PrimaryIdle,
            4 => ServerState::PrimaryFailover,
            5 => ServerState::PrimaryTakeover,
            6 => ServerState::PrimarySplitBrainResolution,
            7 => ServerState::SecondaryInit,
            8 => ServerState::SecondaryActive,
            9 => ServerState::SecondaryIdle,
            10 => ServerState::SecondaryTakeover,
            11 => ServerState::SecondaryFailover,
            12 => ServerState::SecondarySplitBrainResolution,
            13 => ServerState::Deactivated,
            14 => ServerState::PrimarySingle,
            other => ServerState::Unknown(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ServerState::PrimaryInit => 0,
            ServerState::PrimaryActive => 1,
            ServerState::PrimaryActiveSecondary => 2,
            ServerState::PrimaryIdle => 3,
            ServerState::PrimaryFailover => 4,
            ServerState::PrimaryTakeover => 5,
            ServerState::PrimarySplitBrainResolution => 6,
            ServerState::SecondaryInit => 7,
            ServerState::SecondaryActive => 8,
            ServerState::SecondaryIdle => 9,
            ServerState::SecondaryTakeover => 10,
            ServerState::SecondaryFailover => 11,
            ServerState::SecondarySplitBrainResolution => 12,
            ServerState::Deactivated => 13,
            ServerState::PrimarySingle => 14,
            ServerState::Unknown(code) => *code,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            ServerState::PrimaryInit
                | ServerState::PrimaryActive
                | ServerState::PrimaryActiveSecondary
                | ServerState::PrimaryIdle
                | ServerState::PrimaryFailover
                | ServerState::PrimaryTakeover
                | ServerState::PrimarySplitBrainResolution
                | ServerState::PrimarySingle
        )
    }

    /// Whether the member is answering calls
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ServerState::PrimaryActive
                | ServerState::PrimaryActiveSecondary
                | ServerState::SecondaryActive
                | ServerState::PrimarySingle
        )
    }
}

impl Default for ServerState {
    fn default() -> Self {
        ServerState::Unknown(-1)
    }
}

/// One member of the Connection cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Server {
    pub key: String,
    pub display_name: String,
    pub host_name: String,
    pub ip_address: String,
    pub ip_address_v6: String,
    pub mac_address: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub server_state: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub database_replication: i32,
    #[serde(
        deserialize_with = "crate::utils::de::flexible_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub ping_delay: Option<u32>,
}

impl Server {
    pub fn state(&self) -> ServerState {
        ServerState::from_code(self.server_state)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) state {:?}", self.host_name, self.ip_address, self.state())
    }
}

pub struct ClusterClient {
    base: BaseResourceClient,
}

impl ClusterClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "cluster"),
        }
    }

    /// Every member of the cluster; a standalone server reports just itself
    pub async fn servers(&self) -> CupiResult<Vec<Server>> {
        let page: Page<Server> = self.fetch_page(COLLECTION_PATH, ELEMENT, &Clauses::none()).await?;
        Ok(page.into_items())
    }

    /// The member currently holding a primary role
    pub async fn primary_server(&self) -> CupiResult<Server> {
        self.servers()
            .await?
            .into_iter()
            .find(|server| server.state().is_primary())
            .ok_or_else(|| CupiError::not_found(self.resource_name(), "primary server"))
    }
}

impl ResourceClient for ClusterClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for ClusterClient {}

impl ResourceOperations for ClusterClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
