// Partition Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use crate::utils::xml_body::PropertyList;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "partitions";
const ELEMENT: &str = "Partition";

/// A named group of extensions that search spaces reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Partition {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub name: String,
    pub description: String,
    pub location_object_id: String,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.object_id)
    }
}

pub struct PartitionClient {
    base: BaseResourceClient,
}

impl PartitionClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "partition"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<Partition>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<Partition> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }

    pub async fn get_by_name(&self, name: impl Into<String>) -> CupiResult<Partition> {
        let name = self.validate_string(name, "name")?;
        self.fetch_first(COLLECTION_PATH, ELEMENT, "name", &name).await
    }

    /// Look a partition up by object id when one is given, otherwise by name
    pub async fn fetch(&self, object_id: Option<&str>, name: Option<&str>) -> CupiResult<Partition> {
        let object_id = object_id.filter(|id| !id.trim().is_empty());
        let name = name.filter(|name| !name.trim().is_empty());
        match (object_id, name) {
            (Some(id), _) => self.get(id).await,
            (None, Some(name)) => self.get_by_name(name).await,
            (None, None) => self.resource_error("An object id or a name is required"),
        }
    }

    /// Create a partition and return its object id
    pub async fn add(&self, name: impl Into<String>, description: Option<&str>) -> CupiResult<String> {
        let name = self.validate_string(name, "name")?;
        let mut properties = PropertyList::new();
        properties.add("Name", &name);
        properties.add_optional("Description", description);
        self.create(COLLECTION_PATH, ELEMENT, &properties).await
    }

    /// Change the name and/or description; at least one must be given
    pub async fn update(
        &self,
        object_id: impl Into<String>,
        name: Option<&str>,
        description: Option<&str>,
    ) -> CupiResult<WebCallResult> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        if let Some(name) = name {
            self.validate_string(name, "name")?;
        }
        let mut properties = PropertyList::new();
        properties.add_optional("Name", name.map(str::trim));
        properties.add_optional("Description", description);
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        ResourceOperations::update(self, &path, ELEMENT, &properties).await
    }

    pub async fn delete(&self, object_id: impl Into<String>) -> CupiResult<WebCallResult> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        ResourceOperations::delete(self, &path).await
    }
}

impl ResourceClient for PartitionClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PartitionClient {}

impl ResourceOperations for PartitionClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
