use serde_json::json;
use webex_api::{Client, Error, FeatureQuery, LocationPayload, Query, WorkspacePayload, WorkspaceQuery};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(mock_server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/v1/", mock_server.uri()), "test-token").unwrap()
}

#[tokio::test]
async fn list_workspaces_follows_link_header() {
    let mock_server = MockServer::start().await;
    let next = format!("<{}/v1/workspaces?cursor=page2>; rel=\"next\"", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/workspaces"))
        .and(query_param("orgId", "org-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", next.as_str())
                .set_body_string(load_fixture("workspaces_page1.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/workspaces"))
        .and(query_param("cursor", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("workspaces_page2.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let query = WorkspaceQuery::default().with_org_id("org-1");
    let records = client.workspaces().list(&query).unwrap().collect().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].get("displayName"), Some(&json!("Lobby Desk")));
    assert_eq!(records[0].object_type(), "workspace");
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/people/me"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "me-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let me = client(&mock_server).people().me().await.unwrap();
    assert_eq!(me.id(), Some("me-1"));
}

#[tokio::test]
async fn create_workspace_posts_filtered_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces"))
        .and(body_json(json!({"displayName": "Board Room", "capacity": 12})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "w-1", "displayName": "Board Room"})),
        )
        .mount(&mock_server)
        .await;

    let payload = WorkspacePayload::new("Board Room").with_capacity(12);
    let created = client(&mock_server).workspaces().create(&payload).await.unwrap();
    assert_eq!(created.id(), Some("w-1"));
}

#[tokio::test]
async fn unexpected_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/workspaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "w-1"})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .workspaces()
        .create(&WorkspacePayload::new("Board Room"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 200, expected: 201, .. }));
}

#[tokio::test]
async fn server_error_keeps_the_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/devices/d-1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\":\"not found\"}"))
        .mount(&mock_server)
        .await;

    match client(&mock_server).devices().get("d-1", None).await {
        Err(Error::HttpStatus { status, body, .. }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/telephony/config/huntGroups"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client
        .telephony()
        .list_hunt_groups(&Default::default())
        .unwrap()
        .collect()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RateLimited { retry_after: Some(30) }));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/workspaces/w-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).workspaces().get("w-1").await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn missing_items_field_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/telephony/config/huntGroups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .telephony()
        .list_hunt_groups(&Default::default())
        .unwrap()
        .collect()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn delete_accepts_empty_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/workspaces/w-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client(&mock_server).workspaces().delete("w-1").await.unwrap();
}

#[tokio::test]
async fn location_update_returns_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/locations/loc-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let payload = LocationPayload::new(
        "Austin",
        "America/Chicago",
        "en_us",
        "en_us",
        json!({"address1": "100 Congress Ave", "city": "Austin", "country": "US"}),
    );
    client(&mock_server).locations().update("loc-1", &payload).await.unwrap();
}

#[tokio::test]
async fn contact_center_paths_are_host_rooted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organization/org-1/team"))
        .and(query_param("orgId", "org-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("cc_teams.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let teams = client(&mock_server)
        .contact_center()
        .list_feature("org-1", "team", &FeatureQuery::default())
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0]["id"], "team-1");
}

#[tokio::test]
async fn csdm_search_is_posted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/csdm/api/v1/organization/org-1/devices"))
        .and(body_json(webex_api::api::csdm_search()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"hits": [{"cisUuid": "d-1"}, {"cisUuid": "d-2"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let devices = client(&mock_server)
        .csdm()
        .list("org-1", "devices")
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[1].get("cisUuid"), Some(&json!("d-2")));
}
