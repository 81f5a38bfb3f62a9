//! Default command: the interactive portal.

use anyhow::Result;
use meridian_core::config::Config;

pub async fn run(config: &Config, open: Option<&str>) -> Result<()> {
    meridian_tui::run_portal(config, open).await
}
