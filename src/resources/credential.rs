// Credential Client

use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "Credential";

/// Which secret a credential record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialType {
    Password = 3,
    Pin = 4,
}

impl CredentialType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            3 => Some(CredentialType::Password),
            4 => Some(CredentialType::Pin),
            _ => None,
        }
    }

    fn path_segment(&self) -> &'static str {
        match self {
            CredentialType::Password => "password",
            CredentialType::Pin => "pin",
        }
    }
}

/// Lockout and expiry state of a user's PIN or web password.
/// The secret itself is never returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Credential {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub user_object_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub credential_type: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub is_primary: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub cant_change: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub doesnt_expire: bool,
    pub time_changed: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub locked: bool,
    pub alias: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub hack_count: i32,
    pub time_hacked: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub cred_must_change: bool,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub encryption_type: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub hacked: bool,
    pub credential_policy_object_id: String,
    pub time_lockout: String,
}

impl Credential {
    pub fn kind(&self) -> Option<CredentialType> {
        CredentialType::from_code(self.credential_type)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind() {
            Some(CredentialType::Pin) => "PIN",
            Some(CredentialType::Password) => "password",
            None => "credential",
        };
        write!(
            f,
            "{} {}: locked={}, must change={}, hack count={}",
            self.alias, kind, self.locked, self.cred_must_change, self.hack_count
        )
    }
}

pub struct CredentialClient {
    base: BaseResourceClient,
}

impl CredentialClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "credential"),
        }
    }

    /// Phone PIN of a user
    pub async fn pin(&self, user_id: impl Into<String>) -> CupiResult<Credential> {
        self.fetch_credential(user_id, CredentialType::Pin).await
    }

    /// Web application password of a user
    pub async fn password(&self, user_id: impl Into<String>) -> CupiResult<Credential> {
        self.fetch_credential(user_id, CredentialType::Password).await
    }

    pub async fn fetch_credential(
        &self,
        user_id: impl Into<String>,
        credential_type: CredentialType,
    ) -> CupiResult<Credential> {
        let user_id = self.validate_identifier(user_id, "user_id")?;
        let path = format!("users/{}/credential/{}", user_id, credential_type.path_segment());
        self.fetch_single(&path, ELEMENT, &user_id).await
    }
}

impl ResourceClient for CredentialClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for CredentialClient {}

impl ResourceOperations for CredentialClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
