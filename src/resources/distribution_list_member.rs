// Distribution List Member Client

use crate::builder::Clauses;
use crate::client::ConnectionServer;
use crate::resources::{base::BaseResourceClient, ResourceClient, ResourceOperations, ValidationOperations};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const ELEMENT: &str = "DistributionListMember";

/// One entry of a distribution list. Exactly one of the `Member*ObjectId`
/// fields is set, depending on what kind of object the member is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DistributionListMember {
    #[serde(rename = "URI")]
    pub uri: String,
    pub object_id: String,
    pub distribution_list_object_id: String,
    pub member_user_object_id: String,
    pub member_distribution_list_object_id: String,
    pub member_contact_object_id: String,
    pub member_global_user_object_id: String,
    pub member_location_object_id: String,
    pub alias: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    User,
    DistributionList,
    Contact,
    GlobalUser,
    Location,
    Unknown,
}

impl DistributionListMember {
    pub fn member_kind(&self) -> MemberKind {
        if !self.member_user_object_id.is_empty() {
            MemberKind::User
        } else if !self.member_distribution_list_object_id.is_empty() {
            MemberKind::DistributionList
        } else if !self.member_contact_object_id.is_empty() {
            MemberKind::Contact
        } else if !self.member_global_user_object_id.is_empty() {
            MemberKind::GlobalUser
        } else if !self.member_location_object_id.is_empty() {
            MemberKind::Location
        } else {
            MemberKind::Unknown
        }
    }
}

impl fmt::Display for DistributionListMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {:?}", self.display_name, self.alias, self.member_kind())
    }
}

pub struct DistributionListMemberClient {
    base: BaseResourceClient,
}

impl DistributionListMemberClient {
    pub(crate) fn new(server: Arc<ConnectionServer>) -> Self {
        Self {
            base: BaseResourceClient::new(server, "distribution_list_member"),
        }
    }

    pub async fn list(&self, list_id: impl Into<String>, clauses: &Clauses) -> CupiResult<Page<DistributionListMember>> {
        let list_id = self.validate_identifier(list_id, "list_id")?;
        let path = format!("distributionlists/{}/distributionlistmembers", list_id);
        self.fetch_page(&path, ELEMENT, clauses).await
    }
}

impl ResourceClient for DistributionListMemberClient {
    fn resource_name(&self) -> &str {
        self.base.resource_name()
    }
}

impl ValidationOperations for DistributionListMemberClient {}

impl ResourceOperations for DistributionListMemberClient {
    fn server(&self) -> &ConnectionServer {
        self.base.server()
    }
}
