//! Variant resource.
//!
//! Create and update share one payload convention: the common fields
//! (`name`, `description`) sit at the top level and the platform config is
//! flattened in next to them. iOS is the exception, its certificate makes
//! the submission a multipart form rather than JSON.

use std::sync::Arc;

use reqwest::multipart::Form;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value};
use unifiedpush_domain::{
    IosConfig, NewVariant, Platform, Result, UpsError, VariantKey, VariantKind, VariantQuery,
    VariantUpdate,
};

use crate::http::{self, bool_text, certificate_part, ApiRequest, ClientContext};

/// Operations on the variants of a push application.
pub struct Variants {
    context: Arc<ClientContext>,
}

impl Variants {
    pub(crate) fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    fn family_url(&self, push_app_id: &str, kind: VariantKind) -> String {
        format!("{}/rest/applications/{push_app_id}/{kind}", self.context.base_url())
    }

    fn variant_url(&self, key: &VariantKey) -> String {
        format!("{}/{}", self.family_url(&key.push_app_id, key.kind), key.variant_id)
    }

    /// Fetch all variants of one family, or a single variant by id.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn find(&self, query: VariantQuery) -> Result<Value> {
        let family = self.family_url(&query.push_app_id, query.kind);
        let url = match query.variant_id {
            Some(variant_id) => format!("{family}/{variant_id}"),
            None => family,
        };

        let response = http::dispatch(&self.context, ApiRequest::get(url)).await?;
        http::expect_status(response, StatusCode::OK)
    }

    /// Create a variant under an application.
    ///
    /// # Errors
    /// Returns `UpsError::InvalidInput` for a non-object platform config or
    /// an unreadable certificate path, `UpsError::Network` on transport
    /// failure, or `UpsError::Api` carrying the server's validation body
    /// when the status is not 201.
    pub async fn create(&self, variant: NewVariant) -> Result<Value> {
        let url = self.family_url(&variant.push_app_id, variant.platform.kind());
        let request =
            variant_request(Method::POST, url, variant.name, variant.description, variant.platform)
                .await?;

        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::CREATED)
    }

    /// Replace an existing variant.
    ///
    /// # Errors
    /// Returns `UpsError::InvalidInput` for a non-object platform config or
    /// an unreadable certificate path, `UpsError::Network` on transport
    /// failure, or `UpsError::Api` carrying the server's validation body
    /// when the status is not 200.
    pub async fn update(&self, update: VariantUpdate) -> Result<Value> {
        let key = VariantKey {
            kind: update.platform.kind(),
            push_app_id: update.push_app_id,
            variant_id: update.variant_id,
        };
        let url = self.variant_url(&key);
        let request =
            variant_request(Method::PUT, url, update.name, update.description, update.platform)
                .await?;

        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::OK)
    }

    /// Delete a variant.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 204.
    pub async fn remove(&self, key: VariantKey) -> Result<Value> {
        let request = ApiRequest::delete(self.variant_url(&key));
        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::NO_CONTENT)
    }

    /// Regenerate the variant secret.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn reset(&self, key: VariantKey) -> Result<Value> {
        let url = format!("{}/reset", self.variant_url(&key));
        let response = http::dispatch(&self.context, ApiRequest::put(url)).await?;
        http::expect_status(response, StatusCode::OK)
    }
}

async fn variant_request(
    method: Method,
    url: String,
    name: String,
    description: Option<String>,
    platform: Platform,
) -> Result<ApiRequest> {
    match platform {
        Platform::Ios(config) => {
            let form = ios_form(config, name, description).await?;
            Ok(ApiRequest::form(method, url, form))
        }
        Platform::Android(config)
        | Platform::SimplePush(config)
        | Platform::Windows(config)
        | Platform::Adm(config) => {
            let body = flatten_config(name, description, config)?;
            Ok(ApiRequest::json(method, url, body))
        }
    }
}

/// Merge the platform config object into the top-level payload next to the
/// common fields.
fn flatten_config(name: String, description: Option<String>, config: Value) -> Result<Value> {
    let mut payload = Map::new();
    payload.insert("name".into(), Value::String(name));
    if let Some(description) = description {
        payload.insert("description".into(), Value::String(description));
    }

    match config {
        Value::Object(fields) => {
            for (field, value) in fields {
                payload.insert(field, value);
            }
        }
        Value::Null => {}
        other => {
            return Err(UpsError::InvalidInput(format!(
                "platform config must be a JSON object, got {other}"
            )))
        }
    }

    Ok(Value::Object(payload))
}

async fn ios_form(config: IosConfig, name: String, description: Option<String>) -> Result<Form> {
    let mut form = Form::new()
        .part("certificate", certificate_part(config.certificate).await?)
        .text("passphrase", config.passphrase)
        .text("production", bool_text(config.production))
        .text("name", name);

    if let Some(description) = description {
        form = form.text("description", description);
    }

    Ok(form)
}
