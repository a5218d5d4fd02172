//! Integration tests for the admin client against a mocked server
//!
//! **Coverage:**
//! - Login → create application → listing includes it
//! - Variant validation failure surfaces the server body unchanged
//! - Health endpoint status gating
//! - Failed login yields no client handle
//! - Concurrent calls are independent
//!
//! **Infrastructure:**
//! - One WireMock server playing both the Keycloak token endpoint and the
//!   push server REST API (the client derives the auth URL from the base
//!   URL, so they naturally share a host here)

use serde_json::json;
use unifiedpush_admin::{AdminClient, NewVariant, Platform, Settings, UpsError};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "integration-token";
const APP_ID: &str = "5d77107a-3624-4456-a8fa-37036274ff61";

async fn server_with_login() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/realms/aerogear/protocol/openid-connect/token"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("client_id=unified-push-server-js"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .mount(&server)
        .await;
    server
}

async fn connect(server: &MockServer) -> AdminClient {
    AdminClient::connect(server.uri(), Settings::new("admin", "admin")).await.expect("connect")
}

#[tokio::test]
async fn created_application_shows_up_in_the_listing() {
    let server = server_with_login().await;

    Mock::given(method("POST"))
        .and(path("/rest/applications/"))
        .and(header("Authorization", "Bearer integration-token"))
        .and(body_json(json!({"name": "First One"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "First One",
            "pushApplicationID": APP_ID
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/applications/"))
        .and(header("Authorization", "Bearer integration-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "First One", "pushApplicationID": APP_ID}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    let created =
        client.applications().create(json!({"name": "First One"})).await.expect("created");
    assert_eq!(created["pushApplicationID"], APP_ID);

    let listing = client.applications().find(None).await.expect("listing");
    let ids: Vec<&str> = listing
        .as_array()
        .expect("array listing")
        .iter()
        .filter_map(|app| app["pushApplicationID"].as_str())
        .collect();
    assert!(ids.contains(&APP_ID));
}

#[tokio::test]
async fn android_variant_without_google_key_rejects_with_the_server_body() {
    let server = server_with_login().await;

    Mock::given(method("POST"))
        .and(path(format!("/rest/applications/{APP_ID}/android")))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"googleKey": "may not be null"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    let variant = NewVariant {
        push_app_id: APP_ID.to_string(),
        name: "Android Variant".to_string(),
        description: None,
        platform: Platform::Android(json!({"projectNumber": "54321"})),
    };

    let result = client.variants().create(variant).await;

    match result {
        Err(UpsError::Api { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, json!({"googleKey": "may not be null"}));
        }
        other => panic!("expected the validation body, got {other:?}"),
    }
}

#[tokio::test]
async fn health_gates_on_ok() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/rest/sys/info/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;
    let report = client.health().await.expect("health");

    assert_eq!(report, json!({"status": "ok"}));
}

#[tokio::test]
async fn failed_login_yields_no_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/realms/aerogear/protocol/openid-connect/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid user credentials"
        })))
        .mount(&server)
        .await;

    let result = AdminClient::connect(server.uri(), Settings::new("admin", "nope")).await;

    assert!(matches!(result, Err(UpsError::Auth(_))));
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let server = server_with_login().await;

    Mock::given(method("GET"))
        .and(path("/rest/applications/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/sys/info/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = connect(&server).await;

    let (listing, report) =
        tokio::join!(client.applications().find(None), client.health());

    assert!(listing.expect("listing").is_array());
    assert_eq!(report.expect("health")["status"], "ok");
}
