//! Push application resource.

use std::sync::Arc;

use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use unifiedpush_domain::{ApplicationBootstrap, Result};

use crate::http::{self, bool_text, certificate_part, ApiRequest, ClientContext};

/// Operations on push applications.
pub struct Applications {
    context: Arc<ClientContext>,
}

impl Applications {
    pub(crate) fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    fn collection_url(&self) -> String {
        format!("{}/rest/applications/", self.context.base_url())
    }

    fn resource_url(&self, push_app_id: &str) -> String {
        format!("{}/rest/applications/{push_app_id}", self.context.base_url())
    }

    /// Fetch all push applications, or a single one by id.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn find(&self, push_app_id: Option<&str>) -> Result<Value> {
        let url = match push_app_id {
            Some(id) => self.resource_url(id),
            None => self.collection_url(),
        };

        let response = http::dispatch(&self.context, ApiRequest::get(url)).await?;
        http::expect_status(response, StatusCode::OK)
    }

    /// Create a push application from the given representation.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// carrying the server's validation body when the status is not 201.
    pub async fn create(&self, application: Value) -> Result<Value> {
        let request = ApiRequest::json(Method::POST, self.collection_url(), application);
        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::CREATED)
    }

    /// Replace an existing push application.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// carrying the server's validation body when the status is not 204.
    pub async fn update(&self, push_app_id: &str, application: Value) -> Result<Value> {
        let request = ApiRequest::json(Method::PUT, self.resource_url(push_app_id), application);
        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::NO_CONTENT)
    }

    /// Delete a push application and everything registered under it.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 204.
    pub async fn remove(&self, push_app_id: &str) -> Result<Value> {
        let request = ApiRequest::delete(self.resource_url(push_app_id));
        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::NO_CONTENT)
    }

    /// Regenerate the application's master secret.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn reset(&self, push_app_id: &str) -> Result<Value> {
        let url = format!("{}/reset", self.resource_url(push_app_id));
        let response = http::dispatch(&self.context, ApiRequest::put(url)).await?;
        http::expect_status(response, StatusCode::OK)
    }

    /// Create an application together with up to one variant per family in
    /// a single round trip.
    ///
    /// The description goes out as one multipart form; the server performs
    /// all per-variant validation.
    ///
    /// # Errors
    /// Returns `UpsError::InvalidInput` for an unreadable certificate path,
    /// `UpsError::Network` on transport failure, or `UpsError::Api` carrying
    /// the server's validation body when the status is not 201.
    pub async fn bootstrap(&self, bootstrap: ApplicationBootstrap) -> Result<Value> {
        let url = format!("{}/rest/applications/bootstrap", self.context.base_url());
        let form = bootstrap_form(bootstrap).await?;

        let request = ApiRequest::form(Method::POST, url, form);
        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::CREATED)
    }
}

async fn bootstrap_form(bootstrap: ApplicationBootstrap) -> Result<Form> {
    let mut form = Form::new().text("pushApplicationName", bootstrap.name);

    if let Some(android) = bootstrap.android {
        form = form.text("androidVariantName", android.variant_name);
        if let Some(google_key) = android.google_key {
            form = form.text("androidGoogleKey", google_key);
        }
        if let Some(project_number) = android.project_number {
            form = form.text("androidProjectNumber", project_number);
        }
    }

    if let Some(ios) = bootstrap.ios {
        form = form
            .text("iosVariantName", ios.variant_name)
            .part("iosCertificate", certificate_part(ios.certificate).await?)
            .text("iosPassphrase", ios.passphrase)
            .text("iosProduction", bool_text(ios.production));
    }

    if let Some(simple_push) = bootstrap.simple_push {
        form = form.text("simplePushVariantName", simple_push.variant_name);
    }

    if let Some(windows) = bootstrap.windows {
        form = form
            .text("windowsVariantName", windows.variant_name)
            .text("windowsType", windows.protocol_type);
        if let Some(sid) = windows.sid {
            form = form.text("windowsSid", sid);
        }
        if let Some(client_secret) = windows.client_secret {
            form = form.text("windowsClientSecret", client_secret);
        }
    }

    if let Some(adm) = bootstrap.adm {
        form = form.text("admVariantName", adm.variant_name);
        if let Some(client_id) = adm.client_id {
            form = form.text("admClientId", client_id);
        }
        if let Some(client_secret) = adm.client_secret {
            form = form.text("admClientSecret", client_secret);
        }
    }

    Ok(form)
}
