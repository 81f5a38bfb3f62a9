//! Full-screen portal TUI for the Meridian Advisory client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod guard;
pub mod overlays;
pub mod render;
pub mod routes;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use meridian_core::config::Config;
pub use runtime::PortalRuntime;

use crate::routes::Route;

/// Runs the interactive portal.
///
/// `initial_path` opens the portal at a specific destination; unmatched
/// paths resolve to home, and protected ones wait on the boot check.
pub async fn run_portal(config: &Config, initial_path: Option<&str>) -> Result<()> {
    // The portal requires a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!("The Meridian portal requires a terminal.");
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Meridian Advisory")?;
    writeln!(err, "Backend: {}", config.base_url)?;
    err.flush()?;

    let mut runtime = PortalRuntime::new(config.clone())?;
    if let Some(path) = initial_path {
        runtime.open(Route::parse(path));
    }
    runtime.run()?;

    // Print goodbye after the TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
