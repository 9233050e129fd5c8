//! # cupi-rs: a typed Rust client for the Cisco Unity Connection Provisioning Interface
//!
//! CUPI is the REST administration API of a Unity Connection voicemail
//! server. This crate wraps its resources (partitions, port groups, users,
//! locations, ...) in typed records and async clients.
//!
//! ## Key Features
//!
//! - One client per resource with list / get / lookup operations
//! - Create, update and delete for partitions and port group codecs
//! - Query, sort and paging clauses through a validated builder
//! - XML and JSON responses mapped onto the same record types
//! - Middleware support for request/result processing
//! - Optional reactive extension that streams whole collections page by page
//! - Credentials redacted from logs and zeroed on drop
//! - TLS security configuration
//!
//! ## Basic Usage
//!
//! ```no_run
//! use cupi_rs::{from_env, Clauses, QueryOp};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // CUPI_SERVER, CUPI_USERNAME and CUPI_PASSWORD
//!     let server = from_env()?;
//!
//!     let clauses = Clauses::new()
//!         .query("name", QueryOp::StartsWith, "Sales")?
//!         .page(1, 50)?;
//!     let partitions = server.partitions().list(&clauses).await?;
//!
//!     println!("{} of {} partitions", partitions.len(), partitions.total);
//!     for partition in &partitions {
//!         println!("{}", partition);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod client;
mod builder;
mod middleware;
pub mod resources;
pub mod utils;

#[cfg(feature = "reactive")]
pub mod reactive;

// Re-export core components
pub use client::{ConnectionServer, MockApiHandler, RequestHandlerFuture, TlsConfig, set_tls_config};
pub use types::{
    ContentFormat, CupiError, CupiFuture, CupiResult, Page, SecureCredentials, WebCallRequest, WebCallResult,
    sanitize_error_message,
};
pub use builder::{add_clauses_to_uri, Clauses, QueryOp, SortOrder, MAX_ROWS_PER_PAGE};
pub use middleware::{RequestMiddleware, ResponseMiddleware};
pub use utils::dump_properties;

#[cfg(feature = "reactive")]
pub use reactive::{CollectionStream, CollectionStreamStatus};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::{
        from_env, new_client, set_tls_config, Clauses, ConnectionServer, ContentFormat, CupiError, CupiResult, Page,
        QueryOp, SortOrder, TlsConfig,
    };
    pub use crate::resources::{
        CallHandlerOwner, ConfigurationValue, Credential, CredentialType, DistributionListMember, GlobalUser,
        InterviewQuestion, Location, MailboxFolder, MailboxInfo, NotificationTemplate, Partition,
        PhoneSystemAssociation, Policy, PortGroup, PortGroupCodec, PortGroupTemplate, RestrictionPattern, RtpCodecDef,
        ScheduleSetMember, Server, ServerState, SmppProvider, TimeZone, VmsServer,
    };
}

// Public resource access
pub use resources::{
    // Base traits
    ResourceClient,
    ResourceOperations,
    ValidationOperations,

    // Resource client types
    CallHandlerOwnerClient,
    ClusterClient,
    ConfigurationValueClient,
    CredentialClient,
    DistributionListMemberClient,
    GlobalUserClient,
    InterviewQuestionClient,
    LocationClient,
    MailboxInfoClient,
    NotificationTemplateClient,
    PartitionClient,
    PhoneSystemAssociationClient,
    PolicyClient,
    PortGroupClient,
    PortGroupCodecClient,
    PortGroupTemplateClient,
    RestrictionPatternClient,
    RtpCodecDefClient,
    ScheduleSetMemberClient,
    SmppProviderClient,
    TimeZoneClient,
    VmsServerClient,
};

// Entry point functions
pub fn new_client(
    server_name: impl Into<String>,
    username: impl Into<String>,
    password: impl Into<String>,
) -> CupiResult<ConnectionServer> {
    ConnectionServer::new(server_name, username, password)
}

/// Build a server from `CUPI_SERVER`, `CUPI_USERNAME` and `CUPI_PASSWORD`,
/// honouring `CUPI_BASE_URL` when it is set
pub fn from_env() -> Result<ConnectionServer, CupiError> {
    let var = |name: &str| std::env::var(name).ok().filter(|value| !value.trim().is_empty());

    match (var("CUPI_SERVER"), var("CUPI_USERNAME"), var("CUPI_PASSWORD")) {
        (Some(server_name), Some(username), Some(password)) => {
            let server = ConnectionServer::new(server_name, username, password)?;
            Ok(match var("CUPI_BASE_URL") {
                Some(base_url) => server.with_base_url(base_url),
                None => server,
            })
        }
        _ => Err(CupiError::MissingCredentials { location: None }),
    }
}
