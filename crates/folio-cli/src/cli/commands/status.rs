//! `folio status`: non-interactive backend diagnostics.
//!
//! Probes the health endpoint, the session endpoint, and the blogs listing,
//! and prints one row per endpoint. The exit code reflects the health check
//! only: an anonymous session or an empty platform is not an outage.

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use folio_core::api::ApiClient;

pub async fn run(base_url: &str) -> Result<()> {
    let api = ApiClient::new(base_url)?;

    let health = api.health().await;
    let me = api.me().await;
    let blogs = api.blogs().await;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(["Endpoint", "Status", "Detail"]);

    table.add_row([
        "/api/health".to_string(),
        mark(health.is_ok()),
        match &health {
            Ok(()) => "ok".to_string(),
            Err(err) => err.to_string(),
        },
    ]);
    table.add_row([
        "/auth/me".to_string(),
        mark(me.is_ok()),
        match &me {
            Ok(identity) => format!("signed in as {}", identity.email),
            Err(_) => "no active session".to_string(),
        },
    ]);
    table.add_row([
        "/blogs".to_string(),
        mark(blogs.is_ok()),
        match &blogs {
            Ok(blogs) => format!("{} blogs", blogs.len()),
            Err(err) => err.to_string(),
        },
    ]);

    println!("Backend: {base_url}");
    println!("{table}");

    if let Err(err) = health {
        bail!("backend is unreachable: {err}");
    }
    Ok(())
}

fn mark(ok: bool) -> String {
    if ok { "✓".to_string() } else { "✕".to_string() }
}
