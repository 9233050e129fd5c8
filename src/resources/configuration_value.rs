// Configuration Value Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use crate::utils::de::parse_bool;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "configurationvalues";
const ELEMENT: &str = "ConfigurationValue";

/// A system setting such as `System.Conversations.MaxGreetingLength`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigurationValue {
    /// Value type code (boolean, integer, string ...)
    #[serde(rename = "Type", deserialize_with = "crate::utils::de::flexible_number")]
    pub value_type: i32,
    pub last_modified_by_component: String,
    pub full_name: String,
    pub value: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub user_setting: bool,
    pub min_value: String,
    pub max_value: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub requires_restart: bool,
}

impl ConfigurationValue {
    pub fn as_bool(&self) -> Option<bool> {
        if self.value.trim().is_empty() {
            None
        } else {
            parse_bool(&self.value)
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.trim().parse().ok()
    }
}

impl fmt::Display for ConfigurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.full_name, self.value)
    }
}

pub struct ConfigurationValueClient {
    base: BaseResourceClient,
}

impl ConfigurationValueClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "configuration_value"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<ConfigurationValue>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    /// Fetch one setting by its dotted full name
    pub async fn get(&self, full_name: impl Into<String>) -> CupiResult<ConfigurationValue> {
        let full_name = self.validate_identifier(full_name, "full_name")?;
        let path = format!("{}/{}", COLLECTION_PATH, full_name);
        self.fetch_single(&path, ELEMENT, &full_name).await
    }
}

impl ResourceClient for ConfigurationValueClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for ConfigurationValueClient {}

impl ResourceOperations for ConfigurationValueClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
