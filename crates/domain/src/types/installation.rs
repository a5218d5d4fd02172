//! Installation parameter types

/// Addresses the installations registered under a variant, or a single
/// installation when `installation_id` is set.
#[derive(Debug, Clone)]
pub struct InstallationQuery {
    pub variant_id: String,
    pub installation_id: Option<String>,
}

impl InstallationQuery {
    /// Address every installation of the given variant.
    #[must_use]
    pub fn all_of(variant_id: impl Into<String>) -> Self {
        Self { variant_id: variant_id.into(), installation_id: None }
    }

    /// Address one installation of the given variant.
    #[must_use]
    pub fn one(variant_id: impl Into<String>, installation_id: impl Into<String>) -> Self {
        Self { variant_id: variant_id.into(), installation_id: Some(installation_id.into()) }
    }
}
