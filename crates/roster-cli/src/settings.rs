//! Connector configuration.
//!
//! Defaults place every file next to the executable. An optional TOML file and
//! `ROSTER_*` environment variables can override any key; relative paths are
//! resolved against the base directory.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use roster_core::{directive::DEFAULT_SOURCE, handle::DEFAULT_DOMAIN};
use roster_feed::OutputPaths;
use serde::Deserialize;

/// File name of the optional overlay looked up in the base directory.
pub const DEFAULT_CONFIG_FILE: &str = "connector.toml";

/// Shape of the merged configuration sources.
#[derive(Debug, Deserialize)]
struct RawConfig {
  input:      PathBuf,
  directives: PathBuf,
  acks:       PathBuf,
  log:        PathBuf,
  domain:     String,
  source:     String,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
  pub input:   PathBuf,
  pub outputs: OutputPaths,
  pub domain:  String,
  pub source:  String,
}

impl ConnectorConfig {
  /// Built-in defaults rooted at `base_dir`, with no overlay applied.
  pub fn defaults(base_dir: &Path) -> Self {
    Self {
      input:   base_dir.join("bok_input.json"),
      outputs: OutputPaths {
        directives:       base_dir.join("directives.jsonl"),
        acknowledgements: base_dir.join("acks.jsonl"),
        log:              base_dir.join("run.log"),
      },
      domain:  DEFAULT_DOMAIN.to_owned(),
      source:  DEFAULT_SOURCE.to_owned(),
    }
  }

  /// Merge defaults, the overlay file (if it exists) and the environment.
  ///
  /// `config_file` defaults to [`DEFAULT_CONFIG_FILE`] inside `base_dir`.
  pub fn load(base_dir: &Path, config_file: Option<&Path>) -> anyhow::Result<Self> {
    let file = config_file
      .map(|p| base_dir.join(p))
      .unwrap_or_else(|| base_dir.join(DEFAULT_CONFIG_FILE));

    let settings = config::Config::builder()
      .set_default("input", "bok_input.json")?
      .set_default("directives", "directives.jsonl")?
      .set_default("acks", "acks.jsonl")?
      .set_default("log", "run.log")?
      .set_default("domain", DEFAULT_DOMAIN)?
      .set_default("source", DEFAULT_SOURCE)?
      .add_source(
        config::File::new(&file.to_string_lossy(), config::FileFormat::Toml).required(false),
      )
      .add_source(config::Environment::with_prefix("ROSTER"))
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let raw: RawConfig = settings
      .try_deserialize()
      .context("failed to deserialise connector config")?;

    Ok(Self {
      input:   base_dir.join(raw.input),
      outputs: OutputPaths {
        directives:       base_dir.join(raw.directives),
        acknowledgements: base_dir.join(raw.acks),
        log:              base_dir.join(raw.log),
      },
      domain:  raw.domain,
      source:  raw.source,
    })
  }
}

/// The directory holding the running executable.
pub fn executable_dir() -> anyhow::Result<PathBuf> {
  let exe = std::env::current_exe().context("failed to locate the executable")?;
  exe
    .parent()
    .map(Path::to_path_buf)
    .context("executable has no parent directory")
}
