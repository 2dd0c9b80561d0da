//! roster-connector binary.
//!
//! Turns a personnel feed into account create-directives.
//!
//! # Usage
//!
//! ```
//! roster-connector
//! roster-connector --config connector.toml --base-dir /srv/roster
//! ```
//!
//! With no arguments every file lives next to the executable: it reads
//! `bok_input.json` and writes `directives.jsonl`, `acks.jsonl` and `run.log`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use roster_cli::{ConnectorConfig, settings};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Derive account create-directives from a personnel feed")]
struct Args {
  /// TOML overlay, relative to the base directory (default: connector.toml).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Directory that relative paths resolve against (default: the executable's
  /// directory).
  #[arg(long, value_name = "DIR")]
  base_dir: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let base_dir = match args.base_dir {
    Some(dir) => dir,
    None => settings::executable_dir()?,
  };
  tracing::info!("base directory {}", base_dir.display());

  let cfg = ConnectorConfig::load(&base_dir, args.config.as_deref())?;
  let now = chrono::Local::now().naive_local();

  let summary = roster_cli::run(&cfg, now)?;
  tracing::info!(
    failed = summary.failed,
    "wrote {} directives, {} acknowledgements",
    summary.directives,
    summary.acknowledgements
  );

  Ok(())
}
