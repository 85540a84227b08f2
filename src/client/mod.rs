//! Typed clients for the domain REST services.
//!
//! Every call returns the uniform envelope `{success, data?, error?,
//! message?}` regardless of outcome: transport failures are normalized into
//! a failure envelope rather than surfaced as errors, and an unauthorized
//! response triggers the injected [`Navigator`] before being returned as a
//! normal failure. The wrappers themselves are thin; one method maps to one
//! HTTP call with no payload transformation.

pub mod auth;
pub mod hr;
pub mod inventory;
pub mod marketing;
pub mod revenue;

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Header carrying the tenant scope on every request that has one.
pub const CLINIC_HEADER: &str = "x-clinic-id";

const NETWORK_ERROR: &str = "Network error";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Uniform response envelope shared by every domain endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// The normalized shape every transport-level failure collapses to.
    pub fn network_error() -> Self {
        Self::fail(NETWORK_ERROR)
    }
}

/// List payload nested under `data` for collection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Filter/pagination parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Client-held session state the tenant header and bearer token come from.
///
/// Absence of a clinic id is not an error at this layer: the header is
/// simply omitted and the server rejects if it requires one.
#[derive(Debug, Default)]
pub struct SessionState {
    inner: RwLock<SessionData>,
}

#[derive(Debug, Default, Clone)]
struct SessionData {
    token: Option<String>,
    clinic_id: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, token: impl Into<String>, clinic_id: impl Into<String>) {
        let mut data = self.write();
        data.token = Some(token.into());
        data.clinic_id = Some(clinic_id.into());
    }

    pub fn clear(&self) {
        *self.write() = SessionData::default();
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn clinic_id(&self) -> Option<String> {
        self.read().clinic_id.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionData> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionData> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Navigation capability invoked when a response comes back unauthorized.
///
/// Injected rather than hard-coded so tests can substitute an observable
/// stub; the production implementation routes to the login entry point.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Navigator that goes nowhere. Suitable for headless callers.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self) {}
}

/// Shared HTTP client for all domain wrappers.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionState>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<SessionState>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Envelope<T> {
        self.dispatch(self.builder(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Envelope<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.dispatch(self.builder(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(self.builder(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Envelope<T> {
        self.dispatch(self.builder(Method::POST, path)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Envelope<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(self.builder(Method::PUT, path).json(body))
            .await
    }

    fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);
        if let Some(clinic_id) = self.session.clinic_id() {
            builder = builder.header(CLINIC_HEADER, clinic_id);
        }
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn dispatch<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Envelope<T> {
        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "request failed at transport level");
                return Envelope::network_error();
            }
        };

        // Global session-expiry side effect: navigate once, then surface the
        // response as an ordinary failure envelope. No retry.
        if response.status() == StatusCode::UNAUTHORIZED {
            self.navigator.redirect_to_login();
        }

        match response.json::<Envelope<T>>().await {
            Ok(envelope) => envelope,
            Err(err) => {
                debug!(error = %err, "response body was not a valid envelope");
                Envelope::fail("Invalid response from server")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_has_no_data() {
        let envelope: Envelope<String> = Envelope::network_error();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn envelope_serializes_without_absent_fields() {
        let envelope = Envelope::ok(42u32);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn session_sign_in_and_clear() {
        let session = SessionState::new();
        assert!(session.clinic_id().is_none());

        session.sign_in("token-abc", "clinic-001");
        assert_eq!(session.token().as_deref(), Some("token-abc"));
        assert_eq!(session.clinic_id().as_deref(), Some("clinic-001"));

        session.clear();
        assert!(session.token().is_none());
        assert!(session.clinic_id().is_none());
    }

    #[test]
    fn client_construction_applies_the_request_timeout() {
        // Builder failure would panic here instead of silently dropping the
        // timeout configuration.
        let _ = ApiClient::new(
            "http://localhost:8080/api/v1",
            Arc::new(SessionState::new()),
            Arc::new(NoopNavigator),
        );
    }

    #[test]
    fn list_query_omits_unset_fields() {
        let query = ListQuery::default();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
