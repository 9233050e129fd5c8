// Mailbox Information Client

use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const ELEMENT: &str = "MailboxInfo";
const FOLDER_ELEMENT: &str = "Folder";

/// Size, quota and store state of a user's mailbox. Sizes are in bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MailboxInfo {
    pub display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub current_size_in_bytes: u64,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_primary: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_secondary: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_receive_quota_exceeded: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub receive_quota: i64,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_store_mounted: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_store_over_flowed: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_mailbox_mounted: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_warning_quota_exceeded: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub warning_quota: i64,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub send_quota: i64,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_send_quota_exceeded: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_deleted_folder_enabled: bool,
    pub mailbox_store_object_id: String,
}

impl MailboxInfo {
    /// True when any of the three quotas has been crossed
    pub fn is_over_quota(&self) -> bool {
        self.is_warning_quota_exceeded || self.is_send_quota_exceeded || self.is_receive_quota_exceeded
    }
}

impl fmt::Display for MailboxInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} bytes, mounted={}, over quota={}",
            self.display_name,
            self.current_size_in_bytes,
            self.is_mailbox_mounted,
            self.is_over_quota()
        )
    }
}

/// Folders whose message count can be queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailboxFolder {
    Inbox,
    Deleted,
    Sent,
}

impl MailboxFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailboxFolder::Inbox => "inbox",
            MailboxFolder::Deleted => "deleted",
            MailboxFolder::Sent => "sent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderMessageCounts {
    pub inbox: u32,
    pub deleted: u32,
    pub sent: u32,
}

impl FolderMessageCounts {
    pub fn total(&self) -> u32 {
        self.inbox + self.deleted + self.sent
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct FolderRecord {
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    message_count: u32,
}

pub struct MailboxInfoClient {
    base: BaseResourceClient,
}

impl MailboxInfoClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "mailbox_info"),
        }
    }

    pub async fn get(&self, user_id: impl Into<String>) -> CupiResult<MailboxInfo> {
        let user_id = self.validate_identifier(user_id, "user_id")?;
        let path = format!("mailbox?userobjectid={}", user_id);
        self.fetch_single(&path, ELEMENT, &user_id).await
    }

    pub async fn folder_message_count(&self, user_id: impl Into<String>, folder: MailboxFolder) -> CupiResult<u32> {
        let user_id = self.validate_identifier(user_id, "user_id")?;
        let path = format!("mailbox/folders/{}?userobjectid={}", folder.as_str(), user_id);
        let record: FolderRecord = self.fetch_single(&path, FOLDER_ELEMENT, &user_id).await?;
        debug!("{} folder of {} holds {} messages", folder.as_str(), user_id, record.message_count);
        Ok(record.message_count)
    }

    /// Inbox, deleted and sent counts, fetched one after another
    pub async fn folder_message_counts(&self, user_id: impl Into<String>) -> CupiResult<FolderMessageCounts> {
        let user_id = self.validate_identifier(user_id, "user_id")?;
        Ok(FolderMessageCounts {
            inbox: self.folder_message_count(user_id.as_str(), MailboxFolder::Inbox).await?,
            deleted: self.folder_message_count(user_id.as_str(), MailboxFolder::Deleted).await?,
            sent: self.folder_message_count(user_id.as_str(), MailboxFolder::Sent).await?,
        })
    }
}

impl ResourceClient for MailboxInfoClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for MailboxInfoClient {}

impl ResourceOperations for MailboxInfoClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
