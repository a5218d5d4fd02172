//! Installation resource.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use unifiedpush_domain::{InstallationQuery, Result, UpsError};

use crate::http::{self, ApiRequest, ClientContext};

/// Operations on the device installations registered under a variant.
pub struct Installations {
    context: Arc<ClientContext>,
}

impl Installations {
    pub(crate) fn new(context: Arc<ClientContext>) -> Self {
        Self { context }
    }

    fn collection_url(&self, variant_id: &str) -> String {
        format!("{}/rest/applications/{variant_id}/installations/", self.context.base_url())
    }

    /// Fetch all installations of a variant, or a single one by id.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 200.
    pub async fn find(&self, query: InstallationQuery) -> Result<Value> {
        let collection = self.collection_url(&query.variant_id);
        let url = match query.installation_id {
            Some(installation_id) => format!("{collection}{installation_id}"),
            None => collection,
        };

        let response = http::dispatch(&self.context, ApiRequest::get(url)).await?;
        http::expect_status(response, StatusCode::OK)
    }

    /// Replace an installation. The target id is the installation object's
    /// own `id` field; a payload without one never reaches the wire.
    ///
    /// # Errors
    /// Returns `UpsError::InvalidInput` when the payload has no `id`,
    /// `UpsError::Network` on transport failure, or `UpsError::Api` carrying
    /// the server's validation body when the status is not 204.
    pub async fn update(&self, variant_id: &str, installation: Value) -> Result<Value> {
        let installation_id = installation
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| UpsError::InvalidInput("installation payload has no id".into()))?
            .to_owned();

        let url = format!("{}{installation_id}", self.collection_url(variant_id));
        let request = ApiRequest::json(Method::PUT, url, installation);

        let response = http::dispatch(&self.context, request).await?;
        http::expect_status(response, StatusCode::NO_CONTENT)
    }

    /// Unregister an installation.
    ///
    /// # Errors
    /// Returns `UpsError::Network` on transport failure or `UpsError::Api`
    /// when the server answers with anything but 204.
    pub async fn remove(&self, variant_id: &str, installation_id: &str) -> Result<Value> {
        let url = format!("{}{installation_id}", self.collection_url(variant_id));
        let response = http::dispatch(&self.context, ApiRequest::delete(url)).await?;
        http::expect_status(response, StatusCode::NO_CONTENT)
    }
}
