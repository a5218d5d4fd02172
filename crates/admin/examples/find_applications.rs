//! Connect to a local push server and list its applications.
//!
//! Run a UnifiedPush server on localhost first, then:
//! `cargo run --example find_applications`

use unifiedpush_admin::{AdminClient, Settings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let settings = Settings::new("admin", "admin");
    let client = AdminClient::connect("http://127.0.0.1:8080/ag-push", settings).await?;

    let applications = client.applications().find(None).await?;
    println!("applications: {applications:#}");

    Ok(())
}
