//! Composite application bootstrap parameters

use super::variant::Certificate;

/// One-shot description of a push application plus up to one variant per
/// family.
///
/// No per-variant validation happens client side; fields left `None` are
/// omitted from the submitted form and the server decides what is
/// acceptable.
#[derive(Debug, Clone, Default)]
pub struct ApplicationBootstrap {
    /// Name of the push application to create.
    pub name: String,
    pub android: Option<AndroidBootstrap>,
    pub ios: Option<IosBootstrap>,
    pub simple_push: Option<SimplePushBootstrap>,
    pub windows: Option<WindowsBootstrap>,
    pub adm: Option<AdmBootstrap>,
}

impl ApplicationBootstrap {
    /// Start a bootstrap description with just the application name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Android variant portion of a bootstrap.
#[derive(Debug, Clone, Default)]
pub struct AndroidBootstrap {
    pub variant_name: String,
    pub google_key: Option<String>,
    pub project_number: Option<String>,
}

/// iOS variant portion of a bootstrap.
#[derive(Debug, Clone)]
pub struct IosBootstrap {
    pub variant_name: String,
    pub certificate: Certificate,
    pub passphrase: String,
    pub production: bool,
}

/// SimplePush variant portion of a bootstrap.
#[derive(Debug, Clone, Default)]
pub struct SimplePushBootstrap {
    pub variant_name: String,
}

/// Windows variant portion of a bootstrap.
#[derive(Debug, Clone, Default)]
pub struct WindowsBootstrap {
    pub variant_name: String,
    /// `wns` or `mpns`.
    pub protocol_type: String,
    pub sid: Option<String>,
    pub client_secret: Option<String>,
}

/// Amazon Device Messaging variant portion of a bootstrap.
#[derive(Debug, Clone, Default)]
pub struct AdmBootstrap {
    pub variant_name: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_bootstrap_carries_no_variants() {
        let bootstrap = ApplicationBootstrap::named("Bootstrap 1");

        assert_eq!(bootstrap.name, "Bootstrap 1");
        assert!(bootstrap.android.is_none());
        assert!(bootstrap.ios.is_none());
        assert!(bootstrap.simple_push.is_none());
        assert!(bootstrap.windows.is_none());
        assert!(bootstrap.adm.is_none());
    }
}
