use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::ViewController;
use storage::TopicStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod command;
mod config;
mod render;
mod shell;

use config::{load_settings, log_filter, seed_topics};

#[derive(Parser, Debug)]
#[command(about = "Browse and edit an in-memory list of topics")]
struct Args {
    /// TOML settings file; defaults to ./topic_shell.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start with an empty topic list.
    #[arg(long)]
    no_seed: bool,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(env_filter.as_deref(), &args.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = load_settings(args.config.as_deref())?;
    let store = TopicStore::with_seed(seed_topics(&settings, args.no_seed))
        .context("failed to seed topics")?;
    info!(topics = store.len(), title = %settings.title, "starting topic shell");

    let mut controller = ViewController::with_welcome(store, settings.welcome());
    let stdin = io::stdin();
    shell::run(&settings.title, &mut controller, stdin.lock(), io::stdout().lock())
}
