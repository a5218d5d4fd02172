//! Shared request dispatch for the admin REST API.
//!
//! Every resource operation funnels through [`dispatch`]: one outbound
//! request carrying the session's bearer token, one normalized
//! `{status, body}` outcome. A transport failure is a hard error; an
//! unexpected status is a domain condition left to the caller to
//! interpret via [`expect_status`].

use std::sync::RwLock;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde_json::Value;
use tracing::debug;
use unifiedpush_domain::{Certificate, Result, UpsError};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state behind every resource module: server base URL, transport,
/// and the bearer token written once by the session bootstrap.
pub(crate) struct ClientContext {
    base_url: String,
    http: ReqwestClient,
    token: RwLock<Option<String>>,
}

impl ClientContext {
    pub(crate) fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| UpsError::Internal(format!("failed to build http client: {err}")))?;

        Ok(Self { base_url: base_url.into(), http, token: RwLock::new(None) })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &ReqwestClient {
        &self.http
    }

    /// Store the bearer token obtained at login. Written once; every
    /// dispatched request reads it afterwards.
    pub(crate) fn set_token(&self, token: String) {
        let mut slot = self.token.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Some(token);
    }

    /// The current bearer token. Dispatching before the session bootstrap
    /// has stored one is an authentication error.
    pub(crate) fn bearer_token(&self) -> Result<String> {
        let slot = self.token.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.clone().ok_or_else(|| UpsError::Auth("client is not authenticated".into()))
    }
}

/// Body of an outbound request. JSON and multipart are mutually exclusive
/// on the wire, so they are mutually exclusive here.
pub(crate) enum Payload {
    None,
    Json(Value),
    Form(Form),
}

/// A single outbound call.
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) payload: Payload,
}

impl ApiRequest {
    pub(crate) fn get(url: String) -> Self {
        Self { method: Method::GET, url, payload: Payload::None }
    }

    pub(crate) fn put(url: String) -> Self {
        Self { method: Method::PUT, url, payload: Payload::None }
    }

    pub(crate) fn delete(url: String) -> Self {
        Self { method: Method::DELETE, url, payload: Payload::None }
    }

    pub(crate) fn json(method: Method, url: String, body: Value) -> Self {
        Self { method, url, payload: Payload::Json(body) }
    }

    pub(crate) fn form(method: Method, url: String, form: Form) -> Self {
        Self { method, url, payload: Payload::Form(form) }
    }
}

/// Normalized outcome of a dispatched request.
#[derive(Debug)]
pub(crate) struct ApiResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: Value,
}

/// Execute exactly one HTTP request with the session's bearer token.
///
/// Any response the server produces resolves here, whatever its status;
/// only transport-level failures error out.
pub(crate) async fn dispatch(context: &ClientContext, request: ApiRequest) -> Result<ApiResponse> {
    let ApiRequest { method, url, payload } = request;
    let token = context.bearer_token()?;

    let mut builder = context
        .http()
        .request(method.clone(), &url)
        .bearer_auth(token)
        .header(ACCEPT, "application/json");

    builder = match payload {
        Payload::None => builder,
        Payload::Json(body) => builder.json(&body),
        Payload::Form(form) => builder.multipart(form),
    };

    debug!(%method, %url, "dispatching request");

    let response = builder
        .send()
        .await
        .map_err(|err| UpsError::Network(format!("request to {url} failed: {err}")))?;

    let status = response.status();
    debug!(%method, %url, %status, "received response");

    let text = response
        .text()
        .await
        .map_err(|err| UpsError::Network(format!("failed to read response body: {err}")))?;

    Ok(ApiResponse { status, body: decode_body(&text) })
}

/// Resolve the body when the status is the one the operation expects,
/// otherwise surface the body verbatim as the failure value.
pub(crate) fn expect_status(response: ApiResponse, expected: StatusCode) -> Result<Value> {
    if response.status == expected {
        Ok(response.body)
    } else {
        Err(UpsError::Api { status: response.status.as_u16(), body: response.body })
    }
}

/// Resolve a certificate input to a multipart file part. Path inputs are
/// read here, once; byte inputs pass through unchanged.
pub(crate) async fn certificate_part(certificate: Certificate) -> Result<Part> {
    let bytes = match certificate {
        Certificate::Path(path) => tokio::fs::read(&path).await.map_err(|err| {
            UpsError::InvalidInput(format!("cannot read certificate {}: {err}", path.display()))
        })?,
        Certificate::Bytes(bytes) => bytes,
    };

    Part::bytes(bytes)
        .file_name("certificate.p12")
        .mime_str("application/octet-stream")
        .map_err(|err| UpsError::Internal(format!("invalid certificate part: {err}")))
}

/// Literal string form booleans take in multipart fields.
pub(crate) fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn decode_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use super::ClientContext;

    pub(crate) const TEST_TOKEN: &str = "test-token";

    /// Context wired to `base_url` with a token already in place.
    pub(crate) fn authenticated_context(base_url: &str) -> Arc<ClientContext> {
        let context = ClientContext::new(base_url).expect("client context");
        context.set_token(TEST_TOKEN.to_string());
        Arc::new(context)
    }
}
