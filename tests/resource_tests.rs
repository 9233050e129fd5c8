use cupi_rs::prelude::*;
use cupi_rs::resources::{IntegrationMethod, MemberKind, OwnerKind};
use pretty_assertions::assert_eq;

use mock_api_client::{mock_server, MockCupiApi, BASE_URL};

#[tokio::test]
async fn test_call_handler_owners() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "handlers/callhandlers/h1/callhandlerowners",
        r#"<CallHandlerOwners total="2">
             <CallHandlerOwner><ObjectId>o1</ObjectId><TargetHandlerObjectId>h1</TargetHandlerObjectId><UserObjectId>u1</UserObjectId></CallHandlerOwner>
             <CallHandlerOwner><ObjectId>o2</ObjectId><TargetHandlerObjectId>h1</TargetHandlerObjectId><DistributionListObjectId>d1</DistributionListObjectId></CallHandlerOwner>
           </CallHandlerOwners>"#,
    );
    let server = mock_server(&mock);

    let owners = server.call_handler_owners().list("h1", &Clauses::none()).await.unwrap();
    assert_eq!(owners.len(), 2);
    assert_eq!(owners.items[0].owner_kind(), OwnerKind::User);
    assert_eq!(owners.items[1].owner_kind(), OwnerKind::DistributionList);
    assert_eq!(CallHandlerOwner::default().owner_kind(), OwnerKind::Unknown);
}

#[tokio::test]
async fn test_cluster_servers() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "cluster",
        r#"<Servers total="2">
             <Server><Key>1</Key><DisplayName>cuc-pub</DisplayName><HostName>cuc-pub</HostName><IpAddress>10.0.0.1</IpAddress><IpAddressV6/><ServerState>8</ServerState><DatabaseReplication>2</DatabaseReplication><PingDelay>1</PingDelay></Server>
             <Server><Key>2</Key><DisplayName>cuc-sub</DisplayName><HostName>cuc-sub</HostName><IpAddress>10.0.0.2</IpAddress><IpAddressV6/><ServerState>1</ServerState><DatabaseReplication>2</DatabaseReplication></Server>
           </Servers>"#,
    );
    let server = mock_server(&mock);
    let cluster = server.cluster();

    let servers = cluster.servers().await.unwrap();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].ping_delay, Some(1));
    assert_eq!(servers[1].ping_delay, None);
    assert_eq!(servers[0].state(), ServerState::SecondaryActive);

    let primary = cluster.primary_server().await.unwrap();
    assert_eq!(primary.host_name, "cuc-sub");
    assert!(primary.state().is_active());
}

#[tokio::test]
async fn test_cluster_without_primary() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "cluster",
        r#"{"@total":"1","Server":{"HostName":"cuc-sub","ServerState":"9"}}"#,
    );
    let server = mock_server(&mock);

    let err = server.cluster().primary_server().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_configuration_values() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "configurationvalues/System.Conversations.MaxGreetingLength",
        r#"{"Type":"3","FullName":"System.Conversations.MaxGreetingLength","Value":"90","UserSetting":"true","MinValue":"1","MaxValue":"1200","RequiresRestart":"false"}"#,
    );
    let server = mock_server(&mock);

    let value = server
        .configuration_values()
        .get("System.Conversations.MaxGreetingLength")
        .await
        .unwrap();
    assert_eq!(value.value_type, 3);
    assert_eq!(value.as_i64(), Some(90));
    assert!(value.user_setting);
    assert!(!value.requires_restart);
    assert_eq!(value.to_string(), "System.Conversations.MaxGreetingLength = 90");
}

#[tokio::test]
async fn test_pin_and_password_credentials() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "users/u1/credential/pin",
        r#"<Credential><ObjectId>c1</ObjectId><UserObjectId>u1</UserObjectId><CredentialType>4</CredentialType><Locked>false</Locked><HackCount>2</HackCount><CredMustChange>true</CredMustChange><Alias>jdoe</Alias></Credential>"#,
    );
    mock.on_get(
        "users/u1/credential/password",
        r#"{"ObjectId":"c2","UserObjectId":"u1","CredentialType":"3","Locked":"true","Hacked":"true"}"#,
    );
    let server = mock_server(&mock);
    let credentials = server.credentials();

    let pin = credentials.pin("u1").await.unwrap();
    assert_eq!(pin.kind(), Some(CredentialType::Pin));
    assert_eq!(pin.hack_count, 2);
    assert!(pin.cred_must_change);
    assert!(!pin.locked);

    let password = credentials.password("u1").await.unwrap();
    assert_eq!(password.kind(), Some(CredentialType::Password));
    assert!(password.locked);
    assert_eq!(mock.last_request().unwrap().url, format!("{}users/u1/credential/password", BASE_URL));
}

#[tokio::test]
async fn test_distribution_list_members() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "distributionlists/d1/distributionlistmembers",
        r#"{"@total":"2","DistributionListMember":[
            {"ObjectId":"m1","DistributionListObjectId":"d1","MemberUserObjectId":"u1","Alias":"jdoe","DisplayName":"John Doe"},
            {"ObjectId":"m2","DistributionListObjectId":"d1","MemberContactObjectId":"k1","Alias":"vendor","DisplayName":"Vendor"}
        ]}"#,
    );
    let server = mock_server(&mock);

    let members = server
        .distribution_list_members()
        .list("d1", &Clauses::none())
        .await
        .unwrap();
    assert_eq!(members.items[0].member_kind(), MemberKind::User);
    assert_eq!(members.items[1].member_kind(), MemberKind::Contact);
}

#[tokio::test]
async fn test_global_users() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "globalusers",
        r#"{"@total":"1","GlobalUser":{"ObjectId":"g1","Alias":"jdoe","DisplayName":"John Doe","DtmfAccessId":"1001","IsTemplate":"false","ListInDirectory":"true"}}"#,
    );
    mock.on_get(
        "globalusers/g1",
        r#"{"ObjectId":"g1","Alias":"jdoe","DisplayName":"John Doe","DtmfAccessId":"1001"}"#,
    );
    let server = mock_server(&mock);
    let users = server.global_users();

    let by_alias = users.get_by_alias("jdoe").await.unwrap();
    assert!(by_alias.list_in_directory);
    assert_eq!(
        mock.last_request().unwrap().url,
        format!("{}globalusers?query=(alias%20is%20jdoe)", BASE_URL)
    );

    let by_id = users.fetch(Some("g1"), None).await.unwrap();
    assert_eq!(by_id.dtmf_access_id, "1001");
    assert_eq!(by_id.to_string(), "jdoe [John Doe] x1001");
}

#[tokio::test]
async fn test_interview_questions() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "handlers/interviewhandlers/ih1/interviewquestions/3",
        r#"<InterviewQuestion><InterviewHandlerObjectId>ih1</InterviewHandlerObjectId><QuestionNumber>3</QuestionNumber><IsActive>true</IsActive><MaxMsgLength>30</MaxMsgLength><QuestionText>Your phone number?</QuestionText></InterviewQuestion>"#,
    );
    let server = mock_server(&mock);
    let questions = server.interview_questions();

    let question = questions.get("ih1", 3).await.unwrap();
    assert_eq!(question.question_number, 3);
    assert_eq!(question.max_msg_length, 30);
    assert!(question.is_active);

    assert!(questions.get("ih1", 0).await.is_err());
    assert!(questions.get("ih1", 21).await.is_err());
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_locations() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "locations/connectionlocations",
        r#"<ConnectionLocations total="1"><ConnectionLocation><ObjectId>l1</ObjectId><DisplayName>HQ</DisplayName><HostAddress>cuc.example.com</HostAddress><IsPrimary>true</IsPrimary><DestinationType>1</DestinationType></ConnectionLocation></ConnectionLocations>"#,
    );
    let server = mock_server(&mock);

    let location = server.locations().get_by_name("HQ").await.unwrap();
    assert_eq!(location.object_id, "l1");
    assert!(location.is_primary);
    assert_eq!(location.destination_type, 1);
}

#[tokio::test]
async fn test_mailbox_info_and_folder_counts() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "mailbox",
        r#"{"DisplayName":"John Doe","CurrentSizeInBytes":"2048","IsPrimary":"true","ReceiveQuota":"-1","IsWarningQuotaExceeded":"true","IsMailboxMounted":"true"}"#,
    );
    mock.on_get("mailbox/folders/inbox", r#"{"DisplayName":"inbox","MessageCount":"3"}"#);
    mock.on_get("mailbox/folders/deleted", r#"<Folder><DisplayName>deleted</DisplayName><MessageCount>1</MessageCount></Folder>"#);
    mock.on_get("mailbox/folders/sent", r#"{"DisplayName":"sent","MessageCount":"0"}"#);
    let server = mock_server(&mock);
    let mailboxes = server.mailboxes();

    let info = mailboxes.get("u1").await.unwrap();
    assert_eq!(info.current_size_in_bytes, 2048);
    assert_eq!(info.receive_quota, -1);
    assert!(info.is_over_quota());
    assert_eq!(mock.last_request().unwrap().url, format!("{}mailbox?userobjectid=u1", BASE_URL));

    let counts = mailboxes.folder_message_counts("u1").await.unwrap();
    assert_eq!(counts.inbox, 3);
    assert_eq!(counts.deleted, 1);
    assert_eq!(counts.sent, 0);
    assert_eq!(counts.total(), 4);
    assert_eq!(
        mock.last_request().unwrap().url,
        format!("{}mailbox/folders/sent?userobjectid=u1", BASE_URL)
    );
}

#[tokio::test]
async fn test_notification_templates() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "notificationtemplates",
        r#"{"@total":"1","NotificationTemplate":{"NotificationTemplateID":"t1","NotificationTemplateName":"Default","IsPredefined":"true"}}"#,
    );
    let server = mock_server(&mock);

    let templates = server.notification_templates().list(&Clauses::none()).await.unwrap();
    let template = templates.first().unwrap();
    assert_eq!(template.notification_template_id, "t1");
    assert!(template.is_predefined);
}

#[tokio::test]
async fn test_phone_system_associations() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "phonesystems/ps1/phonesystemassociations",
        r#"<PhoneSystemAssociations total="1"><PhoneSystemAssociation><ObjectId>u1</ObjectId><Alias>jdoe</Alias><DtmfAccessId>1001</DtmfAccessId></PhoneSystemAssociation></PhoneSystemAssociations>"#,
    );
    let server = mock_server(&mock);

    let associations = server
        .phone_system_associations()
        .list("ps1", &Clauses::none())
        .await
        .unwrap();
    assert_eq!(associations.total, 1);
    assert_eq!(associations.items[0].alias, "jdoe");
}

#[tokio::test]
async fn test_policies_for_user_and_role() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "policies",
        r#"{"@total":"1","Policy":{"ObjectId":"po1","RoleObjectId":"r1","RoleName":"System Administrator","UserObjectId":"u1"}}"#,
    );
    let server = mock_server(&mock);
    let policies = server.policies();

    let for_user = policies.for_user("u1").await.unwrap();
    assert_eq!(for_user.items[0].role_name, "System Administrator");
    assert_eq!(
        mock.last_request().unwrap().url,
        format!("{}policies?query=(userobjectid%20is%20u1)", BASE_URL)
    );

    policies.for_role("r1").await.unwrap();
    assert_eq!(
        mock.last_request().unwrap().url,
        format!("{}policies?query=(roleobjectid%20is%20r1)", BASE_URL)
    );
}

#[tokio::test]
async fn test_port_groups_and_templates() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "portgroups/pg1",
        r#"{"ObjectId":"pg1","DisplayName":"CUCM-1","TelephonyIntegrationMethodEnum":"2","EnableMWI":"true","ResetStatusEnum":"1"}"#,
    );
    mock.on_get(
        "portgrouptemplates",
        r#"<PortGroupTemplates total="1"><PortGroupTemplate><ObjectId>t1</ObjectId><DisplayName>SCCP</DisplayName><TelephonyIntegrationMethodEnum>1</TelephonyIntegrationMethodEnum></PortGroupTemplate></PortGroupTemplates>"#,
    );
    let server = mock_server(&mock);

    let group = server.port_groups().get("pg1").await.unwrap();
    assert!(group.enable_mwi);
    assert!(group.needs_reset());
    assert_eq!(group.integration_method(), IntegrationMethod::Sip);

    let templates = server.port_group_templates().list(&Clauses::none()).await.unwrap();
    assert_eq!(templates.items[0].integration_method(), IntegrationMethod::Sccp);
}

#[tokio::test]
async fn test_restriction_patterns() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "restrictiontables/rt1/restrictionpatterns",
        r#"{"@total":"2","RestrictionPattern":[
            {"ObjectId":"rp1","NumberPattern":"9011*","Blocked":"true","SequenceNumber":"0"},
            {"ObjectId":"rp2","NumberPattern":"*","Blocked":"false","SequenceNumber":"1"}
        ]}"#,
    );
    let server = mock_server(&mock);

    let patterns = server
        .restriction_patterns()
        .list("rt1", &Clauses::none())
        .await
        .unwrap();
    assert!(patterns.items[0].blocked);
    assert_eq!(patterns.items[1].sequence_number, 1);
    assert_eq!(patterns.items[0].to_string(), "0: 9011* blocked");
}

#[tokio::test]
async fn test_rtp_codec_defs() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "rtpcodecdefs/g711u",
        r#"<RtpCodecDef><ObjectId>g711u</ObjectId><DisplayName>G.711 mu-law</DisplayName><DefaultPacketSize>20</DefaultPacketSize><PayloadType>0</PayloadType></RtpCodecDef>"#,
    );
    let server = mock_server(&mock);

    let codec = server.rtp_codec_defs().get("g711u").await.unwrap();
    assert_eq!(codec.default_packet_size, 20);
    assert_eq!(codec.payload_type, 0);
}

#[tokio::test]
async fn test_schedule_set_members() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "schedulesets/ss1/schedulesetmembers",
        r#"<ScheduleSetMembers total="2">
             <ScheduleSetMember><ScheduleSetObjectId>ss1</ScheduleSetObjectId><ScheduleObjectId>weekdays</ScheduleObjectId><Exclude>false</Exclude></ScheduleSetMember>
             <ScheduleSetMember><ScheduleSetObjectId>ss1</ScheduleSetObjectId><ScheduleObjectId>holidays</ScheduleObjectId><Exclude>true</Exclude></ScheduleSetMember>
           </ScheduleSetMembers>"#,
    );
    let server = mock_server(&mock);

    let members = server.schedule_set_members().list("ss1").await.unwrap();
    let excluded: Vec<&str> = members
        .iter()
        .filter(|member| member.exclude)
        .map(|member| member.schedule_object_id.as_str())
        .collect();
    assert_eq!(excluded, vec!["holidays"]);
}

#[tokio::test]
async fn test_smpp_providers() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "smppproviders",
        r#"{"@total":"1","SmppProvider":{"ObjectId":"s1","TextName":"Carrier","HostName":"smsc.example.com","Port":"2775","IsEnabled":"1"}}"#,
    );
    let server = mock_server(&mock);

    let providers = server.smpp_providers().list(&Clauses::none()).await.unwrap();
    assert_eq!(providers.items[0].port, 2775);
    assert!(providers.items[0].is_enabled);
}

#[tokio::test]
async fn test_timezones() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "timezones",
        r#"{"@total":"2","TimeZone":[
            {"TimeZoneId":"4","DisplayName":"(GMT-08:00) Pacific Time","Bias":"480"},
            {"TimeZoneId":"190","DisplayName":"(GMT+05:30) Chennai","Bias":"-330"}
        ]}"#,
    );
    let server = mock_server(&mock);

    let zones = server.timezones().list(&Clauses::none()).await.unwrap();
    assert_eq!(zones.items[0].utc_offset(), "UTC-08:00");
    assert_eq!(zones.items[1].utc_offset(), "UTC+05:30");
    assert!(server.timezones().get(-1).await.is_err());
}

#[tokio::test]
async fn test_vms_servers() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "vmsservers",
        r#"<VmsServers total="1"><VmsServer><ObjectId>v1</ObjectId><ServerName>cuc-pub</ServerName><IpAddress>10.0.0.1</IpAddress><ClusterMemberId>0</ClusterMemberId><ServerState>1</ServerState></VmsServer></VmsServers>"#,
    );
    let server = mock_server(&mock);

    let servers = server.vms_servers().list(&Clauses::none()).await.unwrap();
    assert_eq!(servers.items[0].server_name, "cuc-pub");
    assert!(servers.items[0].state().is_primary());
}
