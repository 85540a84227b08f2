use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clinicore_api::client::auth::LoginRequest;
use clinicore_api::client::{
    ApiClient, ListQuery, Navigator, NoopNavigator, SessionState, CLINIC_HEADER,
};

/// Navigator stub that counts redirects instead of navigating.
#[derive(Default)]
struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

fn client_for(server_uri: &str) -> ApiClient {
    ApiClient::new(
        server_uri,
        Arc::new(SessionState::new()),
        Arc::new(NoopNavigator),
    )
}

#[tokio::test]
async fn successful_call_returns_the_envelope_as_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hr/incentive-policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "id": "pol-001",
                "name": "Standard clinical incentive",
                "policy_type": "percentage",
                "value": "3.5",
                "min_achievement_rate": "80",
                "is_default": true,
                "is_active": true
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let envelope = client.list_incentive_policies().await;

    assert!(envelope.success);
    let policies = envelope.data.expect("success carries data");
    assert_eq!(policies.len(), 1);
    assert_eq!(policies[0].id, "pol-001");
    assert!(envelope.error.is_none());
}

#[tokio::test]
async fn transport_failure_normalizes_to_network_error() {
    // Nothing listens here; the connection is refused.
    let client = client_for("http://127.0.0.1:9");
    let envelope = client.current_user().await;

    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.as_deref(), Some("Network error"));
}

#[tokio::test]
async fn tenant_header_is_sent_when_session_is_scoped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marketing/patient-sources"))
        .and(header(CLINIC_HEADER, "clinic-001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "items": [],
                "pagination": {"page": 1, "limit": 20, "total": 0, "total_pages": 0}
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client.session().sign_in("token-abc", "clinic-001");

    let envelope = client.list_patient_sources(&ListQuery::default()).await;
    assert!(envelope.success, "mock only matches when the header is present");
}

#[tokio::test]
async fn tenant_header_is_omitted_without_a_clinic_scope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Missing tenant scope"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let _ = client.current_user().await;

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    // No session, no header; rejecting is the server's call.
    assert!(!requests[0].headers.contains_key(CLINIC_HEADER));
}

#[tokio::test]
async fn unauthorized_response_navigates_to_login_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hr/employees"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "error": "Session expired"
        })))
        .mount(&server)
        .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        server.uri(),
        Arc::new(SessionState::new()),
        navigator.clone(),
    );

    let envelope = client.list_employees(&ListQuery::default()).await;

    // Side effect fires exactly once, and the caller still gets a normal
    // failure envelope rather than an exception.
    assert_eq!(navigator.redirects.load(Ordering::SeqCst), 1);
    assert!(!envelope.success);
    assert_eq!(envelope.error.as_deref(), Some("Session expired"));
}

#[tokio::test]
async fn login_stores_token_and_clinic_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "token": "jwt-demo-token",
                "user": {
                    "id": "user-001",
                    "email": "admin@brightsmile.example",
                    "display_name": "Sora Kim",
                    "role": "ADMIN",
                    "clinic_id": "clinic-001"
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let envelope = client
        .login(&LoginRequest {
            email: "admin@brightsmile.example".to_string(),
            password: "demo-admin-2024!".to_string(),
        })
        .await;

    assert!(envelope.success);
    assert_eq!(client.session().token().as_deref(), Some("jwt-demo-token"));
    assert_eq!(client.session().clinic_id().as_deref(), Some("clinic-001"));
}

#[tokio::test]
async fn failed_login_leaves_the_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let envelope = client
        .login(&LoginRequest {
            email: "admin@brightsmile.example".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert!(!envelope.success);
    assert!(client.session().token().is_none());
    assert!(client.session().clinic_id().is_none());
}
