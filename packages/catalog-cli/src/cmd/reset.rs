//! Reset command

use anyhow::{Context, Result};
use colored::Colorize;
use resource_catalog::SessionStore;

use crate::cmd::session_store;
use crate::config::Config;

/// Remove the guided answers so the next listing shows every resource.
pub fn run(config: &Config) -> Result<()> {
    session_store(config)
        .clear_flow_answers(&config.catalog.session_key)
        .with_context(|| format!("Failed to update {}", config.session_file.display()))?;

    println!("{}", "Cleared guided answers".green());
    Ok(())
}
