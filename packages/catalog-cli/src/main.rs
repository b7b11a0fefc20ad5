// Command-line front end for the resource catalog

mod cmd;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "catalog", about = "Browse the resource catalog", version)]
struct Cli {
    /// Feed location (file path or http(s) URL); overrides CATALOG_FEED
    #[arg(long, global = true)]
    feed: Option<String>,

    /// Session file; overrides CATALOG_SESSION_FILE
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the catalog for the current session
    Show {
        /// Filter value to select (category or topic)
        #[arg(long, default_value = "all")]
        select: String,

        /// Also write a static HTML page to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// On zero results, clear the guided answers and show everything
        #[arg(long)]
        recover: bool,
    },
    /// List the filter values for the current session
    Filters,
    /// Run the guided "Get Started" questions interactively
    Start,
    /// Record guided answers without prompting
    Answer {
        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        language: Option<String>,

        #[arg(long)]
        category: Option<String>,
    },
    /// Forget the guided answers
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,resource_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_overrides(cli.feed, cli.session);

    match cli.command {
        Command::Show {
            select,
            html,
            recover,
        } => cmd::show::run(&config, &select, html.as_deref(), recover).await,
        Command::Filters => cmd::show::list_filters(&config).await,
        Command::Start => cmd::start::run(&config).await,
        Command::Answer {
            role,
            language,
            category,
        } => cmd::answer::run(&config, role.as_deref(), language.as_deref(), category.as_deref()),
        Command::Reset => cmd::reset::run(&config),
    }
}
