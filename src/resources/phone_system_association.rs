// Phone System Association Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "PhoneSystemAssociation";

/// A user whose phone is served by a given phone system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PhoneSystemAssociation {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub alias: String,
    pub display_name: String,
    pub dtmf_access_id: String,
}

impl fmt::Display for PhoneSystemAssociation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] x{}", self.alias, self.display_name, self.dtmf_access_id)
    }
}

pub struct PhoneSystemAssociationClient {
    base: BaseResourceClient,
}

impl PhoneSystemAssociationClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "phone_system_association"),
        }
    }

    pub async fn list(
        &self,
        phone_system_id: impl Into<String>,
        clauses: &Clauses,
    ) -> CupiResult<Page<PhoneSystemAssociation>> {
        let phone_system_id = self.validate_identifier(phone_system_id, "phone_system_id")?;
        let path = format!("phonesystems/{}/phonesystemassociations", phone_system_id);
        self.fetch_page(&path, ELEMENT, clauses).await
    }
}

impl ResourceClient for PhoneSystemAssociationClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PhoneSystemAssociationClient {}

impl ResourceOperations for PhoneSystemAssociationClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
