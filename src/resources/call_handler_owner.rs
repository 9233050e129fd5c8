// Call Handler Owner Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "CallHandlerOwner";

/// A user or distribution list allowed to administer a call handler
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CallHandlerOwner {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub target_handler_object_id: String,
    pub user_object_id: String,
    pub distribution_list_object_id: String,
}

/// What kind of object owns the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    DistributionList,
    Unknown,
}

impl CallHandlerOwner {
    pub fn owner_kind(&self) -> OwnerKind {
        if !self.user_object_id.is_empty() {
            OwnerKind::User
        } else if !self.distribution_list_object_id.is_empty() {
            OwnerKind::DistributionList
        } else {
            OwnerKind::Unknown
        }
    }
}

impl fmt::Display for CallHandlerOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner_kind() {
            OwnerKind::User => write!(f, "user owner {}", self.user_object_id),
            OwnerKind::DistributionList => write!(f, "list owner {}", self.distribution_list_object_id),
            OwnerKind::Unknown => write!(f, "owner {}", self.object_id),
        }
    }
}

pub struct CallHandlerOwnerClient {
    base: BaseResourceClient,
}

impl CallHandlerOwnerClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "call_handler_owner"),
        }
    }

    /// Owners of one call handler
    pub async fn list(&self, handler_id: impl Into<String>, clauses: &Clauses) -> CupiResult<Page<CallHandlerOwner>> {
        let handler_id = self.validate_identifier(handler_id, "handler_id")?;
        let path = format!("handlers/callhandlers/{}/callhandlerowners", handler_id);
        self.fetch_page(&path, ELEMENT, clauses).await
    }
}

impl ResourceClient for CallHandlerOwnerClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for CallHandlerOwnerClient {}

impl ResourceOperations for CallHandlerOwnerClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
