//! # UnifiedPush Admin Client
//!
//! Authenticated client for the UnifiedPush server's admin REST API.
//!
//! [`AdminClient::connect`] logs in against the Keycloak instance guarding
//! the server, stores the bearer token it receives, and hands back a client
//! whose resource handles (applications, variants, installations, health)
//! all ride on that token. A handle only ever exists for a session whose
//! login succeeded.
//!
//! ```no_run
//! use unifiedpush_admin::{AdminClient, Settings};
//!
//! # async fn example() -> unifiedpush_domain::Result<()> {
//! let settings = Settings::new("admin", "admin");
//! let client = AdminClient::connect("http://127.0.0.1:8080/ag-push", settings).await?;
//!
//! let applications = client.applications().find(None).await?;
//! println!("applications: {applications:#}");
//! # Ok(())
//! # }
//! ```

mod auth;
mod health;
mod http;

pub mod applications;
pub mod client;
pub mod installations;
pub mod variants;

// Re-export commonly used items
pub use applications::Applications;
pub use client::{AdminClient, Settings};
pub use installations::Installations;
pub use variants::Variants;
pub use unifiedpush_domain::{
    device_types, AdmBootstrap, AndroidBootstrap, ApplicationBootstrap, Certificate,
    InstallationQuery, IosBootstrap, IosConfig, NewVariant, Platform, Result,
    SimplePushBootstrap, UpsError, VariantKey, VariantKind, VariantQuery, VariantUpdate,
    WindowsBootstrap,
};
