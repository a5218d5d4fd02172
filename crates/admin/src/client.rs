//! Client facade: login settings and the assembled resource handles.

use std::env;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use unifiedpush_domain::{Result, UpsError};

use crate::applications::Applications;
use crate::http::ClientContext;
use crate::installations::Installations;
use crate::variants::Variants;
use crate::{auth, health};

/// Login settings for [`AdminClient::connect`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub username: String,
    pub password: String,
    /// Explicit identity-provider URL. Derived from the server base URL
    /// when unset.
    pub auth_url: Option<String>,
    /// Keycloak realm to log in against. Server default when unset.
    pub realm: Option<String>,
}

impl Settings {
    /// Settings carrying just a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into(), auth_url: None, realm: None }
    }

    /// Use an explicit identity-provider URL instead of deriving one.
    #[must_use]
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = Some(auth_url.into());
        self
    }

    /// Log in against a specific realm.
    #[must_use]
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Read settings from `UPS_ADMIN_USERNAME` and `UPS_ADMIN_PASSWORD`,
    /// with the optional `UPS_ADMIN_AUTH_URL` and `UPS_ADMIN_REALM`
    /// overrides.
    ///
    /// # Errors
    /// Returns `UpsError::Config` when either credential variable is unset.
    pub fn from_env() -> Result<Self> {
        let username = env::var("UPS_ADMIN_USERNAME")
            .map_err(|_| UpsError::Config("UPS_ADMIN_USERNAME is not set".into()))?;
        let password = env::var("UPS_ADMIN_PASSWORD")
            .map_err(|_| UpsError::Config("UPS_ADMIN_PASSWORD is not set".into()))?;

        Ok(Self {
            username,
            password,
            auth_url: env::var("UPS_ADMIN_AUTH_URL").ok(),
            realm: env::var("UPS_ADMIN_REALM").ok(),
        })
    }
}

/// Authenticated handle to the admin REST API.
///
/// Constructed through [`AdminClient::connect`]. The resource handles all
/// share one context, so the token obtained at login backs every call.
pub struct AdminClient {
    context: Arc<ClientContext>,
    applications: Applications,
    variants: Variants,
    installations: Installations,
}

impl AdminClient {
    /// Log in against the server behind `base_url` and assemble the
    /// resource handles. No handle is returned when the login fails.
    ///
    /// # Errors
    /// Returns `UpsError::Config` for a base URL the identity URL cannot be
    /// derived from, `UpsError::Network` when the identity endpoint is
    /// unreachable, or `UpsError::Auth` when the token exchange is refused
    /// or its response is malformed.
    pub async fn connect(base_url: impl Into<String>, settings: Settings) -> Result<Self> {
        let context = Arc::new(ClientContext::new(base_url)?);

        auth::authenticate(&context, &settings).await?;
        info!(base_url = context.base_url(), "admin session established");

        Ok(Self {
            applications: Applications::new(Arc::clone(&context)),
            variants: Variants::new(Arc::clone(&context)),
            installations: Installations::new(Arc::clone(&context)),
            context,
        })
    }

    /// Push application operations.
    #[must_use]
    pub fn applications(&self) -> &Applications {
        &self.applications
    }

    /// Variant operations.
    #[must_use]
    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    /// Installation operations.
    #[must_use]
    pub fn installations(&self) -> &Installations {
        &self.installations
    }

    /// Ask the server for its health report.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn health(&self) -> Result<Value> {
        health::check(&self.context).await
    }

    /// The server base URL this client was connected with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.context.base_url()
    }
}
