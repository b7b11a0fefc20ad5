//! Show and filters commands

use anyhow::Result;
use colored::Colorize;
use resource_catalog::pipeline::filter_button_label;
use std::path::Path;
use tracing::info;

use crate::cmd::open_session;
use crate::config::Config;
use crate::render::{print_render, write_html, PageRenderer};

/// Render the catalog for the current session and selection.
pub async fn run(config: &Config, select: &str, html: Option<&Path>, recover: bool) -> Result<()> {
    let mut session = open_session(config).await?;

    let mut render = session.select(select);
    if render.is_empty() && recover {
        info!("No results, showing all resources");
        render = session.view_all()?;
    }

    print_render(&render, session.view().topic_labels());

    if let Some(path) = html {
        let page = PageRenderer::new()?.page_html(&render, session.view().topic_labels())?;
        if write_html(path, &page)? {
            println!("{} {}", "Wrote".green(), path.display());
        }
    }

    Ok(())
}

/// Print the filter values available for the current session.
pub async fn list_filters(config: &Config) -> Result<()> {
    let session = open_session(config).await?;
    let view = session.view();

    println!("{} {}", "Mode:".bold(), view.mode());
    for value in view.catalog() {
        println!(
            "  {:<40} {}",
            value.as_str(),
            filter_button_label(value, view.mode(), view.topic_labels()).dimmed()
        );
    }

    Ok(())
}
