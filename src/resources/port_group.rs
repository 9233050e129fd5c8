// Port Group Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "portgroups";
const ELEMENT: &str = "PortGroup";

/// How a port group talks to the phone system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegrationMethod {
    Sccp,
    Sip,
    PimgTimg,
    Unknown(i32),
}

impl IntegrationMethod {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => IntegrationMethod::Sccp,
            2 => IntegrationMethod::Sip,
            3 => IntegrationMethod::PimgTimg,
            other => IntegrationMethod::Unknown(other),
        }
    }
}

/// Reset states reported in `ResetStatusEnum`
const RESET_NOT_NEEDED: i32 = 0;
const RESET_REQUIRED: i32 = 1;

/// A set of voice ports sharing one phone system integration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortGroup {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub display_name: String,
    pub media_switch_object_id: String,
    pub media_switch_display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub telephony_integration_method_enum: i32,
    #[serde(rename = "EnableMWI", deserialize_with = "crate::utils::de::flexible_bool")]
    pub enable_mwi: bool,
    pub mwi_on_code: String,
    pub mwi_off_code: String,
    pub skinny_device_prefix: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub sip_register_with_proxy_server: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub ccm_do_auto_failback: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub reset_status_enum: i32,
}

impl PortGroup {
    pub fn integration_method(&self) -> IntegrationMethod {
        IntegrationMethod::from_code(self.telephony_integration_method_enum)
    }

    /// Settings were changed and the ports must be reset to pick them up
    pub fn needs_reset(&self) -> bool {
        self.reset_status_enum == RESET_REQUIRED
    }

    pub fn is_reset_clear(&self) -> bool {
        self.reset_status_enum == RESET_NOT_NEEDED
    }
}

impl fmt::Display for PortGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} ({:?}) [{}]",
            self.display_name,
            self.media_switch_display_name,
            self.integration_method(),
            self.object_id
        )
    }
}

pub struct PortGroupClient {
    base: BaseResourceClient,
}

impl PortGroupClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "port_group"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<PortGroup>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<PortGroup> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }

    pub async fn get_by_name(&self, display_name: impl Into<String>) -> CupiResult<PortGroup> {
        let display_name = self.validate_string(display_name, "display_name")?;
        self.fetch_first(COLLECTION_PATH, ELEMENT, "displayname", &display_name).await
    }
}

impl ResourceClient for PortGroupClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PortGroupClient {}

impl ResourceOperations for PortGroupClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
