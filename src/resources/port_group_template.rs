// Port Group Template Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::port_group::IntegrationMethod;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "portgrouptemplates";
const ELEMENT: &str = "PortGroupTemplate";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortGroupTemplate {
    pub object_id: String,
    pub display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub telephony_integration_method_enum: i32,
    pub copy_from_object_id: String,
}

impl PortGroupTemplate {
    pub fn integration_method(&self) -> IntegrationMethod {
        IntegrationMethod::from_code(self.telephony_integration_method_enum)
    }
}

impl fmt::Display for PortGroupTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.display_name, self.integration_method())
    }
}

pub struct PortGroupTemplateClient {
    base: BaseResourceClient,
}

impl PortGroupTemplateClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "port_group_template"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<PortGroupTemplate>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }
}

impl ResourceClient for PortGroupTemplateClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PortGroupTemplateClient {}

impl ResourceOperations for PortGroupTemplateClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
