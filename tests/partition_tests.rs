use cupi_rs::types::*;
use cupi_rs::{dump_properties, Clauses, QueryOp, SortOrder};
use pretty_assertions::assert_eq;
use reqwest::Method;

use mock_api_client::{mock_server, partition_xml, partitions_json, partitions_xml, MockCupiApi, BASE_URL};

#[tokio::test]
async fn test_list_partitions_from_json() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions", partitions_json());
    let server = mock_server(&mock);

    let page = server.partitions().list(&Clauses::none()).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].object_id, "p1");
    assert_eq!(page.items[0].uri, "/vmrest/partitions/p1");
    assert_eq!(page.items[1].name, "Support");
    assert_eq!(mock.last_request().unwrap().url, format!("{}partitions", BASE_URL));
}

#[tokio::test]
async fn test_xml_and_json_produce_the_same_records() {
    let json_mock = MockCupiApi::new();
    json_mock.on_get("partitions", partitions_json());
    let xml_mock = MockCupiApi::new();
    xml_mock.on_get("partitions", partitions_xml());

    let from_json = mock_server(&json_mock).partitions().list(&Clauses::none()).await.unwrap();
    let from_xml = mock_server(&xml_mock).partitions().list(&Clauses::none()).await.unwrap();

    assert_eq!(from_json, from_xml);
}

#[tokio::test]
async fn test_list_with_clauses_builds_query_string() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions", r#"{"@total":"0"}"#);
    let server = mock_server(&mock);

    let clauses = Clauses::new()
        .query("name", QueryOp::StartsWith, "Sa")
        .unwrap()
        .sort("name", SortOrder::Descending)
        .unwrap()
        .page(2, 25)
        .unwrap();
    let page = server.partitions().list(&clauses).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(
        mock.last_request().unwrap().url,
        format!(
            "{}partitions?query=(name%20startswith%20Sa)&sort=(name%20desc)&pageNumber=2&rowsPerPage=25",
            BASE_URL
        )
    );
}

#[tokio::test]
async fn test_failed_list_is_an_api_error() {
    let mock = MockCupiApi::new();
    mock.on(Method::GET, "partitions", WebCallResult::failure(500, "500 Internal Server Error"));
    let server = mock_server(&mock);

    match server.partitions().list(&Clauses::none()).await {
        Err(CupiError::ApiError { status, message, url, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "500 Internal Server Error");
            assert_eq!(url.as_deref(), Some(format!("{}partitions", BASE_URL).as_str()));
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparsable_body_is_a_parse_error() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions", "{\"@total\": ");
    let server = mock_server(&mock);

    let result = server.partitions().list(&Clauses::none()).await;
    assert!(matches!(result, Err(CupiError::ParseError { .. })));
}

#[tokio::test]
async fn test_get_partition() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions/p1", partition_xml());
    let server = mock_server(&mock);

    let partition = server.partitions().get("p1").await.unwrap();
    assert_eq!(partition.name, "Sales");
    assert_eq!(partition.description, "Sales team");
    assert_eq!(partition.location_object_id, "loc1");
    assert_eq!(partition.to_string(), "Sales [p1]");
}

#[tokio::test]
async fn test_get_missing_partition() {
    let mock = MockCupiApi::new();
    let server = mock_server(&mock);

    let err = server.partitions().get("nope").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_with_empty_body_is_not_found() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions/p1", "");
    let server = mock_server(&mock);

    match server.partitions().get("p1").await {
        Err(CupiError::NotFound { resource, identifier }) => {
            assert_eq!(resource, "partition");
            assert_eq!(identifier, "p1");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_identifiers_never_reach_the_server() {
    let mock = MockCupiApi::new();
    let server = mock_server(&mock);
    let partitions = server.partitions();

    assert!(matches!(partitions.get("").await, Err(CupiError::ResourceError { .. })));
    assert!(matches!(partitions.get("a/b").await, Err(CupiError::ResourceError { .. })));
    assert!(matches!(partitions.get_by_name("   ").await, Err(CupiError::ResourceError { .. })));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_get_by_name_uses_query_clause() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "partitions",
        r#"{"@total":"1","Partition":{"URI":"/vmrest/partitions/p1","ObjectId":"p1","Name":"Sales"}}"#,
    );
    let server = mock_server(&mock);

    let partition = server.partitions().get_by_name("Sales").await.unwrap();
    assert_eq!(partition.object_id, "p1");
    assert_eq!(
        mock.last_request().unwrap().url,
        format!("{}partitions?query=(name%20is%20Sales)", BASE_URL)
    );
}

#[tokio::test]
async fn test_get_by_name_escapes_reserved_characters() {
    let mock = MockCupiApi::new();
    mock.on_get(
        "partitions",
        r#"{"@total":"1","Partition":{"URI":"/vmrest/partitions/p2","ObjectId":"p2","Name":"R&D #2"}}"#,
    );
    let server = mock_server(&mock);

    let partition = server.partitions().get_by_name("R&D #2").await.unwrap();
    assert_eq!(partition.name, "R&D #2");

    let sent = mock.last_request().unwrap().url;
    assert_eq!(sent, format!("{}partitions?query=(name%20is%20R%26D%20%232)", BASE_URL));
    let parsed = url::Url::parse(&sent).unwrap();
    assert_eq!(parsed.fragment(), None);
    let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("query".to_string(), "(name is R&D #2)".to_string())]);
}

#[tokio::test]
async fn test_get_by_name_with_no_match() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions", r#"{"@total":"0"}"#);
    let server = mock_server(&mock);

    let err = server.partitions().get_by_name("Nobody").await.unwrap_err();
    assert!(matches!(err, CupiError::NotFound { .. }));
}

#[tokio::test]
async fn test_fetch_prefers_object_id() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions/p1", partition_xml());
    mock.on_get("partitions", partitions_json());
    let server = mock_server(&mock);
    let partitions = server.partitions();

    let by_id = partitions.fetch(Some("p1"), Some("Support")).await.unwrap();
    assert_eq!(by_id.object_id, "p1");
    assert_eq!(mock.last_request().unwrap().url, format!("{}partitions/p1", BASE_URL));

    let by_name = partitions.fetch(Some(""), Some("Sales")).await.unwrap();
    assert_eq!(by_name.object_id, "p1");
    assert!(mock.last_request().unwrap().url.contains("query="));

    assert!(partitions.fetch(None, None).await.is_err());
}

#[tokio::test]
async fn test_add_partition_returns_new_id() {
    let mock = MockCupiApi::new();
    mock.on(
        Method::POST,
        "partitions",
        WebCallResult::ok(201, "/vmrest/partitions/8c3f0a6e-1b2d-4c5e-9f00-112233445566"),
    );
    let server = mock_server(&mock);

    let id = server.partitions().add("Ops & Facilities", None).await.unwrap();
    assert_eq!(id, "8c3f0a6e-1b2d-4c5e-9f00-112233445566");

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, Method::POST);
    let body = request.body.unwrap();
    assert!(body.contains("<Partition><Name>Ops &amp; Facilities</Name></Partition>"));
    assert!(!body.contains("Description"));
}

#[tokio::test]
async fn test_add_without_returned_id_fails() {
    let mock = MockCupiApi::new();
    mock.on(Method::POST, "partitions", WebCallResult::ok(201, ""));
    let server = mock_server(&mock);

    let err = server.partitions().add("Ops", Some("Operations")).await.unwrap_err();
    assert!(matches!(err, CupiError::ResourceError { .. }));
}

#[tokio::test]
async fn test_add_rejected_by_server() {
    let mock = MockCupiApi::new();
    mock.on(
        Method::POST,
        "partitions",
        WebCallResult::failure(409, "409 Conflict: Name already exists"),
    );
    let server = mock_server(&mock);

    let err = server.partitions().add("Sales", None).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("Name already exists"));
}

#[tokio::test]
async fn test_update_partition() {
    let mock = MockCupiApi::new();
    mock.on(Method::PUT, "partitions/p1", WebCallResult::ok(204, ""));
    let server = mock_server(&mock);

    let result = server
        .partitions()
        .update("p1", None, Some("New description"))
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.method, "PUT");

    let body = mock.last_request().unwrap().body.unwrap();
    assert!(body.contains("<Description>New description</Description>"));
    assert!(!body.contains("<Name>"));
}

#[tokio::test]
async fn test_update_needs_a_field() {
    let mock = MockCupiApi::new();
    let server = mock_server(&mock);

    let err = server.partitions().update("p1", None, None).await.unwrap_err();
    assert!(matches!(err, CupiError::ResourceError { .. }));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_delete_partition() {
    let mock = MockCupiApi::new();
    mock.on(Method::DELETE, "partitions/p1", WebCallResult::ok(204, ""));
    let server = mock_server(&mock);

    server.partitions().delete("p1").await.unwrap();
    let request = mock.last_request().unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert!(request.body.is_none());

    let err = server.partitions().delete("p2").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_dump_properties_of_partition() {
    let mock = MockCupiApi::new();
    mock.on_get("partitions/p1", partition_xml());
    let server = mock_server(&mock);

    let partition = server.partitions().get("p1").await.unwrap();
    let dump = dump_properties(&partition, "").unwrap();
    assert!(dump.contains("URI [/vmrest/partitions/p1]\n"));
    assert!(dump.contains("Name [Sales]\n"));
    assert!(dump.contains("LocationObjectId [loc1]\n"));
}
