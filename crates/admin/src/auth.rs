//! Session bootstrap against the Keycloak instance fronting the server.
//!
//! The push server and its Keycloak share a host, so the identity URL can
//! be derived from the server base URL unless one is configured
//! explicitly. The exchange uses the direct-access password grant; the
//! Keycloak client below must have Direct Access Grants enabled.

use serde::Deserialize;
use tracing::debug;
use unifiedpush_domain::{Result, UpsError};
use url::Url;

use crate::client::Settings;
use crate::http::ClientContext;

/// Fixed path of the identity service on the shared host.
const AUTH_PATH: &str = "/auth";
const GRANT_TYPE: &str = "password";
/// Client registered with Keycloak for this library.
const CLIENT_ID: &str = "unified-push-server-js";
/// Realm the server ships with.
const DEFAULT_REALM: &str = "aerogear";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange the configured credentials for a bearer token and store it in
/// the shared context. Everything the client does afterwards rides on that
/// token.
pub(crate) async fn authenticate(context: &ClientContext, settings: &Settings) -> Result<()> {
    let auth_url = match settings.auth_url.clone() {
        Some(url) => url,
        None => derive_auth_url(context.base_url())?,
    };
    let realm = settings.realm.as_deref().unwrap_or(DEFAULT_REALM);

    let token_endpoint = format!("{auth_url}/realms/{realm}/protocol/openid-connect/token");
    debug!(%token_endpoint, realm, "requesting bearer token");

    let params = [
        ("grant_type", GRANT_TYPE),
        ("client_id", CLIENT_ID),
        ("username", settings.username.as_str()),
        ("password", settings.password.as_str()),
    ];

    let response = context.http().post(&token_endpoint).form(&params).send().await.map_err(
        |err| UpsError::Network(format!("token request to {token_endpoint} failed: {err}")),
    )?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpsError::Auth(format!("token exchange failed with status {status}: {body}")));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|err| UpsError::Auth(format!("malformed token response: {err}")))?;

    context.set_token(token.access_token);
    debug!("session authenticated");

    Ok(())
}

/// Derive the identity-provider URL from the server base URL: same scheme,
/// host, and port, with the server's own path replaced by the fixed auth
/// path.
fn derive_auth_url(base_url: &str) -> Result<String> {
    let parsed = Url::parse(base_url)
        .map_err(|err| UpsError::Config(format!("invalid base url {base_url}: {err}")))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| UpsError::Config(format!("base url {base_url} has no host")))?;

    let auth_url = match parsed.port() {
        Some(port) => format!("{}://{host}:{port}{AUTH_PATH}", parsed.scheme()),
        None => format!("{}://{host}{AUTH_PATH}", parsed.scheme()),
    };

    Ok(auth_url)
}
