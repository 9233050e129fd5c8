// Schedule Set Member Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "ScheduleSetMember";

/// Link between a schedule set and one of its schedules. An excluded
/// schedule (a holiday list, typically) subtracts time from the set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScheduleSetMember {
    #[serde(rename = "URI")]
    pub uri: String,
    pub schedule_set_object_id: String,
    pub schedule_object_id: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_bool")]
    pub exclude: bool,
}

impl fmt::Display for ScheduleSetMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = if self.exclude { "excluded" } else { "included" };
        write!(f, "schedule {} {}", self.schedule_object_id, role)
    }
}

pub struct ScheduleSetMemberClient {
    base: BaseResourceClient,
}

impl ScheduleSetMemberClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "schedule_set_member"),
        }
    }

    pub async fn list(&self, schedule_set_id: impl Into<String>) -> CupiResult<Page<ScheduleSetMember>> {
        let schedule_set_id = self.validate_identifier(schedule_set_id, "schedule_set_id")?;
        let path = format!("schedulesets/{}/schedulesetmembers", schedule_set_id);
        self.fetch_page(&path, ELEMENT, &Clauses::none()).await
    }
}

impl ResourceClient for ScheduleSetMemberClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for ScheduleSetMemberClient {}

impl ResourceOperations for ScheduleSetMemberClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
