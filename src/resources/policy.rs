// Policy Client

use crate::builder::{Clauses, QueryOp};
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "policies";
const ELEMENT: &str = "Policy";

/// Grant of an administrative role to a user, optionally scoped to one
/// handler or distribution list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Policy {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub role_object_id: String,
    pub role_name: String,
    pub user_object_id: String,
    pub target_handler_object_id: String,
    pub target_distribution_list_object_id: String,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for user {}", self.role_name, self.user_object_id)
    }
}

pub struct PolicyClient {
    base: BaseResourceClient,
}

impl PolicyClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "policy"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<Policy>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    /// Roles held by one user
    pub async fn for_user(&self, user_id: impl Into<String>) -> CupiResult<Page<Policy>> {
        let user_id = self.validate_identifier(user_id, "user_id")?;
        let clauses = Clauses::new().query("userobjectid", QueryOp::Is, user_id)?;
        self.list(&clauses).await
    }

    /// Users holding one role
    pub async fn for_role(&self, role_id: impl Into<String>) -> CupiResult<Page<Policy>> {
        let role_id = self.validate_identifier(role_id, "role_id")?;
        let clauses = Clauses::new().query("roleobjectid", QueryOp::Is, role_id)?;
        self.list(&clauses).await
    }
}

impl ResourceClient for PolicyClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PolicyClient {}

impl ResourceOperations for PolicyClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
