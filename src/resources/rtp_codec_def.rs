// RTP Codec Definition Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const COLLECTION_PATH: &str = "rtpcodecdefs";
const ELEMENT: &str = "RtpCodecDef";

/// A codec the server can negotiate, e.g. G.711 mu-law
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RtpCodecDef {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub default_packet_size: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub payload_type: i32,
}

impl fmt::Display for RtpCodecDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (payload {}, {} ms) [{}]",
            self.display_name, self.payload_type, self.default_packet_size, self.object_id
        )
    }
}

pub struct RtpCodecDefClient {
    base: BaseResourceClient,
}

impl RtpCodecDefClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "rtp_codec_def"),
        }
    }

    pub async fn list(&self, clauses: &Clauses) -> CupiResult<Page<RtpCodecDef>> {
        self.fetch_page(COLLECTION_PATH, ELEMENT, clauses).await
    }

    pub async fn get(&self, object_id: impl Into<String>) -> CupiResult<RtpCodecDef> {
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", COLLECTION_PATH, object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }
}

impl ResourceClient for RtpCodecDefClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for RtpCodecDefClient {}

impl ResourceOperations for RtpCodecDefClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
