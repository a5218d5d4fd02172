//! Variant parameter types

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Variant family, as used in variant resource URLs.
///
/// Windows covers both WNS and MPNS; the subtype travels inside the config
/// object as `protocolType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "simplePush")]
    SimplePush,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "adm")]
    Adm,
}

impl VariantKind {
    /// All variant families the server knows about.
    pub const ALL: [VariantKind; 5] = [
        VariantKind::Android,
        VariantKind::Ios,
        VariantKind::SimplePush,
        VariantKind::Windows,
        VariantKind::Adm,
    ];

    /// The path segment used in variant resource URLs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Android => "android",
            VariantKind::Ios => "ios",
            VariantKind::SimplePush => "simplePush",
            VariantKind::Windows => "windows",
            VariantKind::Adm => "adm",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An APNs signing certificate, either on disk or already in memory.
///
/// Path inputs are read into bytes once at the call boundary, before any
/// request is built; byte inputs pass through unchanged.
#[derive(Debug, Clone)]
pub enum Certificate {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// iOS variant credentials, submitted as a multipart form.
#[derive(Debug, Clone)]
pub struct IosConfig {
    pub certificate: Certificate,
    pub passphrase: String,
    /// Sent on the wire as the literal string `"true"` or `"false"`.
    pub production: bool,
}

/// Platform-specific variant configuration.
///
/// The JSON families carry an opaque config object whose fields the server
/// validates; the client flattens them into the top-level payload. iOS is
/// the odd one out: its certificate forces a multipart form.
#[derive(Debug, Clone)]
pub enum Platform {
    Android(Value),
    Ios(IosConfig),
    SimplePush(Value),
    Windows(Value),
    Adm(Value),
}

impl Platform {
    /// The variant family this configuration belongs to.
    #[must_use]
    pub fn kind(&self) -> VariantKind {
        match self {
            Platform::Android(_) => VariantKind::Android,
            Platform::Ios(_) => VariantKind::Ios,
            Platform::SimplePush(_) => VariantKind::SimplePush,
            Platform::Windows(_) => VariantKind::Windows,
            Platform::Adm(_) => VariantKind::Adm,
        }
    }
}

/// Parameters for creating a variant under an application.
#[derive(Debug, Clone)]
pub struct NewVariant {
    pub push_app_id: String,
    pub name: String,
    pub description: Option<String>,
    pub platform: Platform,
}

/// Parameters for replacing an existing variant.
#[derive(Debug, Clone)]
pub struct VariantUpdate {
    pub push_app_id: String,
    pub variant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub platform: Platform,
}

/// Addresses the variants of one family, or a single variant when
/// `variant_id` is set.
#[derive(Debug, Clone)]
pub struct VariantQuery {
    pub push_app_id: String,
    pub kind: VariantKind,
    pub variant_id: Option<String>,
}

/// Addresses exactly one variant.
#[derive(Debug, Clone)]
pub struct VariantKey {
    pub push_app_id: String,
    pub kind: VariantKind,
    pub variant_id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kind_path_segments_match_the_server_routes() {
        assert_eq!(VariantKind::Android.as_str(), "android");
        assert_eq!(VariantKind::Ios.as_str(), "ios");
        assert_eq!(VariantKind::SimplePush.as_str(), "simplePush");
        assert_eq!(VariantKind::Windows.as_str(), "windows");
        assert_eq!(VariantKind::Adm.as_str(), "adm");
    }

    #[test]
    fn kind_display_matches_as_str() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn kind_serializes_to_the_path_segment() {
        let serialized = serde_json::to_value(VariantKind::SimplePush).unwrap();
        assert_eq!(serialized, json!("simplePush"));
    }

    #[test]
    fn platform_reports_its_kind() {
        assert_eq!(Platform::Android(json!({})).kind(), VariantKind::Android);
        assert_eq!(Platform::Windows(json!({"protocolType": "wns"})).kind(), VariantKind::Windows);

        let ios = Platform::Ios(IosConfig {
            certificate: Certificate::Bytes(vec![1, 2, 3]),
            passphrase: "secret".to_string(),
            production: false,
        });
        assert_eq!(ios.kind(), VariantKind::Ios);
    }
}
