//! Server health endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use unifiedpush_domain::Result;

use crate::http::{self, ApiRequest, ClientContext};

/// Fetch the server's health report.
pub(crate) async fn check(context: &ClientContext) -> Result<Value> {
    let url = format!("{}/rest/sys/info/health", context.base_url());
    let response = http::dispatch(context, ApiRequest::get(url)).await?;
    http::expect_status(response, StatusCode::OK)
}
