//! Base implementation for resource clients.

use crate::client::ConnectionServer;
use crate::resources::{ResourceClient, ResourceOperations, ValidationOperations};
use std::sync::Arc;

/// Base client for resource implementations
pub struct BaseResourceClient {
    server: Arc<ConnectionServer>,
    resource_name: String,
}

impl BaseResourceClient {
    pub fn new(server: Arc<ConnectionServer>, resource_name: impl Into<String>) -> Self {
        Self {
            server,
            resource_name: resource_name.into(),
        }
    }
}

impl ResourceClient for BaseResourceClient {
    fn resource_name(&self) -> &str {
        &self.resource_name
    }
}

impl ValidationOperations for BaseResourceClient {}

impl ResourceOperations for BaseResourceClient {
    fn server(&self) -> &ConnectionServer {
        &self.server
    }
}
