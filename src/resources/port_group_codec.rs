// Port Group Codec Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use crate::utils::xml_body::PropertyList;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "PortGroupCodec";

/// Packet sizes the media stack accepts, in milliseconds
pub const MIN_PACKET_SIZE: i32 = 10;
pub const MAX_PACKET_SIZE: i32 = 60;

/// A codec advertised by a port group, with its packet size and the
/// preference order used during negotiation (0 is most preferred)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PortGroupCodec {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub media_port_group_object_id: String,
    pub rtp_codec_def_object_id: String,
    pub rtp_codec_def_display_name: String,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub packet_size: i32,
    #[serde(deserialize_with = "crate::utils::de::flexible_number")]
    pub preference: i32,
}

impl fmt::Display for PortGroupCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, packet size {} ms, preference {} [{}]",
            self.rtp_codec_def_display_name, self.packet_size, self.preference, self.object_id
        )
    }
}

pub struct PortGroupCodecClient {
    base: BaseResourceClient,
}

fn collection_path(port_group_id: &str) -> String {
    format!("portgroups/{}/portgroupcodecs", port_group_id)
}

impl PortGroupCodecClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "port_group_codec"),
        }
    }

    /// Codecs assigned to a port group
    pub async fn list(&self, port_group_id: impl Into<String>, clauses: &Clauses) -> CupiResult<Page<PortGroupCodec>> {
        let port_group_id = self.validate_identifier(port_group_id, "port_group_id")?;
        self.fetch_page(&collection_path(&port_group_id), ELEMENT, clauses).await
    }

    pub async fn get(
        &self,
        port_group_id: impl Into<String>,
        object_id: impl Into<String>,
    ) -> CupiResult<PortGroupCodec> {
        let port_group_id = self.validate_identifier(port_group_id, "port_group_id")?;
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", collection_path(&port_group_id), object_id);
        self.fetch_single(&path, ELEMENT, &object_id).await
    }

    /// Assign a codec definition to a port group and return the new object id
    pub async fn add(
        &self,
        port_group_id: impl Into<String>,
        rtp_codec_def_id: impl Into<String>,
        packet_size: i32,
        preference: i32,
    ) -> CupiResult<String> {
        let port_group_id = self.validate_identifier(port_group_id, "port_group_id")?;
        let rtp_codec_def_id = self.validate_identifier(rtp_codec_def_id, "rtp_codec_def_id")?;
        let packet_size = self.validate_range(packet_size, MIN_PACKET_SIZE, MAX_PACKET_SIZE, "packet_size")?;
        let preference = self.validate_range(preference, 0, i32::MAX, "preference")?;

        let mut properties = PropertyList::new();
        properties
            .add("MediaPortGroupObjectId", &port_group_id)
            .add("RtpCodecDefObjectId", &rtp_codec_def_id)
            .add("PacketSize", packet_size)
            .add("Preference", preference);
        self.create(&collection_path(&port_group_id), ELEMENT, &properties).await
    }

    /// Change packet size and/or preference; at least one must be given
    pub async fn update(
        &self,
        port_group_id: impl Into<String>,
        object_id: impl Into<String>,
        packet_size: Option<i32>,
        preference: Option<i32>,
    ) -> CupiResult<WebCallResult> {
        let port_group_id = self.validate_identifier(port_group_id, "port_group_id")?;
        let object_id = self.validate_identifier(object_id, "object_id")?;
        if let Some(size) = packet_size {
            self.validate_range(size, MIN_PACKET_SIZE, MAX_PACKET_SIZE, "packet_size")?;
        }
        if let Some(preference) = preference {
            self.validate_range(preference, 0, i32::MAX, "preference")?;
        }

        let mut properties = PropertyList::new();
        properties.add_optional("PacketSize", packet_size);
        properties.add_optional("Preference", preference);
        let path = format!("{}/{}", collection_path(&port_group_id), object_id);
        ResourceOperations::update(self, &path, ELEMENT, &properties).await
    }

    pub async fn delete(
        &self,
        port_group_id: impl Into<String>,
        object_id: impl Into<String>,
    ) -> CupiResult<WebCallResult> {
        let port_group_id = self.validate_identifier(port_group_id, "port_group_id")?;
        let object_id = self.validate_identifier(object_id, "object_id")?;
        let path = format!("{}/{}", collection_path(&port_group_id), object_id);
        ResourceOperations::delete(self, &path).await
    }
}

impl ResourceClient for PortGroupCodecClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for PortGroupCodecClient {}

impl ResourceOperations for PortGroupCodecClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
