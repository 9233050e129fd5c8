//! Provisioning Resource Clients
//!
//! Each module wraps one resource type of the provisioning interface: a
//! record type mirroring the server's field names, and a client that lists,
//! fetches and, for a few resources, creates, updates and deletes it.
//!
//! ## Architecture
//!
//! The resource client system uses a trait-based approach:
//!
//! - `ResourceClient` trait: names the resource for errors and logs
//! - `ValidationOperations` trait: parameter checks that fail with `ResourceError`
//! - `ResourceOperations` trait: the GET/POST/PUT/DELETE plumbing shared by all resources
//! - `BaseResourceClient`: implements all three and serves as a composition base
//!
//! Resource clients contain a `BaseResourceClient` and delegate the trait
//! implementations to it.
//!
//! ## Example: A client for another resource
//!
//! ```rust
//! use cupi_rs::{Clauses, ConnectionServer, CupiResult, Page};
//! use cupi_rs::resources::{ResourceClient, ResourceOperations, ValidationOperations, base::BaseResourceClient};
//! use serde::Deserialize;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Role {
//!     object_id: String,
//!     role_name: String,
//! }
//!
//! struct RoleClient {
//!     base: BaseResourceClient,
//! }
//!
//! impl RoleClient {
//!     pub fn new(server: Arc<ConnectionServer>) -> Self {
//!         Self { base: BaseResourceClient::new(server, "role") }
//!     }
//!
//!     pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<Role>> {
//!         self.fetch_page("roles", "Role", clauses).await
//!     }
//! }
//!
//! impl ResourceClient for RoleClient {
//!     fn resource_name(&self) -> &str {
//!         self.base.resource_name()
//!     }
//! }
//!
//! impl ValidationOperations for RoleClient {}
//!
//! impl ResourceOperations for RoleClient {
//!     fn server(&self) -> &ConnectionServer {
//!         self.base.server()
//!     }
//! }
//! ```

pub mod base;
pub mod call_handler_owner;
pub mod cluster;
pub mod configuration_value;
pub mod credential;
pub mod distribution_list_member;
pub mod global_user;
pub mod interview_question;
pub mod location;
pub mod mailbox_info;
pub mod notification_template;
pub mod partition;
pub mod phone_system_association;
pub mod policy;
pub mod port_group;
pub mod port_group_codec;
pub mod port_group_template;
pub mod restriction_pattern;
pub mod rtp_codec_def;
pub mod schedule_set_member;
pub mod smpp_provider;
pub mod timezone;
pub mod vms_server;

pub use call_handler_owner::{CallHandlerOwner, CallHandlerOwnerClient, OwnerKind};
pub use cluster::{ClusterClient, Server, ServerState};
pub use configuration_value::{ConfigurationValue, ConfigurationValueClient};
pub use credential::{Credential, CredentialClient, CredentialType};
pub use distribution_list_member::{DistributionListMember, DistributionListMemberClient, MemberKind};
pub use global_user::{GlobalUser, GlobalUserClient};
pub use interview_question::{InterviewQuestion, InterviewQuestionClient};
pub use location::{Location, LocationClient};
pub use mailbox_info::{FolderMessageCounts, MailboxFolder, MailboxInfo, MailboxInfoClient};
pub use notification_template::{NotificationTemplate, NotificationTemplateClient};
pub use partition::{Partition, PartitionClient};
pub use phone_system_association::{PhoneSystemAssociation, PhoneSystemAssociationClient};
pub use policy::{Policy, PolicyClient};
pub use port_group::{IntegrationMethod, PortGroup, PortGroupClient};
pub use port_group_codec::{PortGroupCodec, PortGroupCodecClient};
pub use port_group_template::{PortGroupTemplate, PortGroupTemplateClient};
pub use restriction_pattern::{RestrictionPattern, RestrictionPatternClient};
pub use rtp_codec_def::{RtpCodecDef, RtpCodecDefClient};
pub use schedule_set_member::{ScheduleSetMember, ScheduleSetMemberClient};
pub use smpp_provider::{SmppProvider, SmppProviderClient};
pub use timezone::{TimeZone, TimeZoneClient};
pub use vms_server::{VmsServer, VmsServerClient};

use crate::builder::{Clauses, QueryOp};
use crate::client::ConnectionServer;
use crate::resource_error;
use crate::types::*;
use crate::utils::payload::{collection_from_body, deserialize_record, object_from_body};
use crate::utils::xml_body::{xml_body, PropertyList};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Common trait for all resource clients
pub trait ResourceClient: Send + Sync {
    /// Resource name used in errors and logs
    fn resource_name(&self) -> &str;
}

/// Common trait for validation operations
pub trait ValidationOperations: ResourceClient {
    /// Creates a resource-specific error
    fn resource_error<T>(&self, message: impl Into<String>) -> CupiResult<T> {
        Err(resource_error!(self.resource_name(), message.into()))
    }

    /// Validate a string parameter, returning it trimmed
    fn validate_string<S: Into<String>>(&self, value: S, param_name: &str) -> CupiResult<String> {
        let string = value.into();
        if string.trim().is_empty() {
            return self.resource_error(format!("{} cannot be empty", param_name));
        }
        Ok(string.trim().to_string())
    }

    /// Validate an identifier that is placed into a URL path segment
    fn validate_identifier<S: Into<String>>(&self, value: S, param_name: &str) -> CupiResult<String> {
        let id = self.validate_string(value, param_name)?;
        if id.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&')) {
            return self.resource_error(format!("{} is not a valid identifier: {}", param_name, id));
        }
        Ok(id)
    }

    /// Validate a numeric parameter is within range
    fn validate_range<T: PartialOrd + Copy + std::fmt::Debug>(
        &self,
        value: T,
        min: T,
        max: T,
        param_name: &str,
    ) -> CupiResult<T> {
        if value < min || value > max {
            return self.resource_error(format!(
                "{} must be between {:?} and {:?}",
                param_name, min, max
            ));
        }
        Ok(value)
    }
}

/// Common implementation for resource operations
pub trait ResourceOperations: ResourceClient {
    /// Get a reference to the server
    fn server(&self) -> &ConnectionServer;

    /// GET a path and fail unless the exchange succeeded
    fn get_checked<'a>(&'a self, url: String) -> CupiFuture<'a, WebCallResult> {
        Box::pin(async move {
            let request = WebCallRequest::new(Method::GET, url);
            self.server().send_request(request).await?.into_result()
        })
    }

    /// Fetch one page of a collection and map each element to `T`
    fn fetch_page<'a, T: DeserializeOwned + Send + 'a>(
        &'a self,
        path: &'a str,
        element_name: &'a str,
        clauses: &'a Clauses,
    ) -> CupiFuture<'a, Page<T>> {
        Box::pin(async move {
            let url = clauses.apply(&self.server().url_for(path));
            let result = self.get_checked(url).await?;
            let page = collection_from_body(&result.response_text, element_name)?;
            debug!("{}: {} of {} returned", self.resource_name(), page.len(), page.total);
            page.try_map(|value| deserialize_record(value, element_name))
        })
    }

    /// Fetch one object; a body with no fields is a failure
    fn fetch_single<'a, T: DeserializeOwned + Send + 'a>(
        &'a self,
        path: &'a str,
        element_name: &'a str,
        identifier: &'a str,
    ) -> CupiFuture<'a, T> {
        Box::pin(async move {
            let result = self.get_checked(self.server().url_for(path)).await?;
            match object_from_body(&result.response_text)? {
                Some(value) => deserialize_record(value, element_name),
                None => Err(CupiError::not_found(self.resource_name(), identifier)),
            }
        })
    }

    /// First object of a collection whose `field` equals `value`
    fn fetch_first<'a, T: DeserializeOwned + Send + 'a>(
        &'a self,
        path: &'a str,
        element_name: &'a str,
        field: &'a str,
        value: &'a str,
    ) -> CupiFuture<'a, T> {
        Box::pin(async move {
            let clauses = Clauses::new().query(field, QueryOp::Is, value)?;
            let page: Page<T> = self.fetch_page(path, element_name, &clauses).await?;
            page.into_items()
                .into_iter()
                .next()
                .ok_or_else(|| CupiError::not_found(self.resource_name(), format!("{} {}", field, value)))
        })
    }

    /// POST a new object and return the identifier the server assigned
    fn create<'a>(&'a self, path: &'a str, root: &'a str, properties: &'a PropertyList) -> CupiFuture<'a, String> {
        Box::pin(async move {
            let body = xml_body(root, properties)?;
            let request = WebCallRequest::new(Method::POST, self.server().url_for(path)).with_body(body);
            let result = self.server().send_request(request).await?.into_result()?;
            match result.returned_object_id {
                Some(id) => {
                    info!("{} created: {}", self.resource_name(), id);
                    Ok(id)
                }
                None => Err(resource_error!(
                    self.resource_name(),
                    "Server reported success but returned no identifier",
                    result.response_text
                )),
            }
        })
    }

    /// PUT changed fields of an existing object
    fn update<'a>(&'a self, path: &'a str, root: &'a str, properties: &'a PropertyList) -> CupiFuture<'a, WebCallResult> {
        Box::pin(async move {
            if properties.is_empty() {
                return Err(resource_error!(self.resource_name(), "No fields to update"));
            }
            let body = xml_body(root, properties)?;
            let request = WebCallRequest::new(Method::PUT, self.server().url_for(path)).with_body(body);
            let result = self.server().send_request(request).await?.into_result()?;
            info!("{} updated: {}", self.resource_name(), path);
            Ok(result)
        })
    }

    /// DELETE an object
    fn delete<'a>(&'a self, path: &'a str) -> CupiFuture<'a, WebCallResult> {
        Box::pin(async move {
            let request = WebCallRequest::new(Method::DELETE, self.server().url_for(path));
            let result = self.server().send_request(request).await?.into_result()?;
            info!("{} deleted: {}", self.resource_name(), path);
            Ok(result)
        })
    }
}
