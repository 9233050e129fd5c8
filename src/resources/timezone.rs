// Time Zone Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "timezones";
const ELEMENT: &str = "TimeZone";

/// A time zone known to the server.
///
/// `Bias` is in minutes and follows the Windows convention: UTC equals local
/// time plus the bias, so US Eastern has a bias of 300.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimeZone {
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub time_zone_id: i32,
    pub display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub bias: i32,
}

impl TimeZone {
    /// Offset from UTC as `UTC-05:00`
    pub fn utc_offset(&self) -> String {
        let offset = -i64::from(self.bias);
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.abs();
        format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.utc_offset(), self.display_name, self.time_zone_id)
    }
}

pub struct TimeZoneClient {
    base: BaseResourceClient,
}

impl TimeZoneClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "timezone"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<TimeZone>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, time_zone_id: i32) -> CupiResult<TimeZone> {
        let time_zone_id = self.validate_range(time_zone_id, 0, i32::MAX, "time_zone_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, time_zone_id);
        self.fetch_single(&path, ELEMENT, &time_zone_id.to_string()).await
    }
}

impl ResourceClient for TimeZoneClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for TimeZoneClient {}

impl ResourceOperations for TimeZoneClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
