// Notification Template Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "notificationtemplates";
const ELEMENT: &str = "NotificationTemplate";

/// HTML layout used for message notification e-mails
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationTemplate {
    #[serde(rename = "NotificationTemplateID")]
    pub notification_template_id: String,
    pub notification_template_name: String,
    pub html_template_file: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_predefined: bool,
    pub modification_time: String,
}

impl fmt::Display for NotificationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.notification_template_name, self.notification_template_id)
    }
}

pub struct NotificationTemplateClient {
    base: BaseResourceClient,
}

impl NotificationTemplateClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "notification_template"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<NotificationTemplate>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, template_id: impl Into<String>) -> CupiResult<NotificationTemplate> {
        let template_id = self.validate_identifier(template_id, "template_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, template_id);
        self.fetch_single(&path, ELEMENT, &template_id).await
    }
}

impl ResourceClient for NotificationTemplateClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for NotificationTemplateClient {}

impl ResourceOperations for NotificationTemplateClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
