//! Full-screen TUI for the folio portfolio browser.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod styles;
pub mod terminal;
pub mod update;

use std::io::{stderr, IsTerminal};

use anyhow::Result;
use folio_core::api::ApiClient;
use folio_core::config::Config;
use folio_core::prefs::PrefsStore;
pub use runtime::TuiRuntime;

/// Runs the interactive browser against the given backend.
pub async fn run(config: Config, base_url: &str) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "folio needs a terminal.\n\
             Use `folio status` for a non-interactive backend check."
        );
    }

    let api = ApiClient::new(base_url)?;
    let prefs = PrefsStore::open_default();

    let mut config = config;
    config.base_url = base_url.to_string();

    let mut runtime = TuiRuntime::new(config, api, prefs)?;
    runtime.run()?;

    Ok(())
}
