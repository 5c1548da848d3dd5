//! Configuration file support for kmp-catalog.
//!
//! Provides YAML-based configuration through `kmp-catalog.config.yml` files,
//! and the merge of file values with command-line flags into the settings of
//! one run.

use anyhow::{bail, Context};
use kmp_catalog::prelude::{CatalogRequest, ClientSettings, VersionWindow};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use kmp_catalog::shared::Result;

const CONFIG_FILENAME: &str = "kmp-catalog.config.yml";
const DEFAULT_OUTPUT: &str = "output.json";
const STDOUT_MARKER: &str = "-";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub previous: Option<PathBuf>,
    pub cache: Option<bool>,
    pub page_size: Option<usize>,
    pub version_window: Option<usize>,
    pub max_concurrent_artifacts: Option<usize>,
    pub max_concurrent_versions: Option<usize>,
    pub search_url: Option<String>,
    pub repository_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub max_in_flight_requests: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let positive = [
        ("page_size", config.page_size),
        ("max_concurrent_artifacts", config.max_concurrent_artifacts),
        ("max_concurrent_versions", config.max_concurrent_versions),
        ("max_in_flight_requests", config.max_in_flight_requests),
    ];
    for (field, value) in positive {
        if value == Some(0) {
            bail!(
                "Invalid config: {} must be greater than 0.\n\n\
                 💡 Hint: Remove the field to use the default value.",
                field
            );
        }
    }

    for (field, value) in [
        ("request_timeout_secs", config.request_timeout_secs),
        ("connect_timeout_secs", config.connect_timeout_secs),
    ] {
        if value == Some(0) {
            bail!(
                "Invalid config: {} must be greater than 0.\n\n\
                 💡 Hint: Timeouts are given in seconds (default: 60).",
                field
            );
        }
    }

    for (field, value) in [
        ("search_url", config.search_url.as_deref()),
        ("repository_url", config.repository_url.as_deref()),
    ] {
        if let Some(url) = value {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!(
                    "Invalid config: {} must be an http(s) URL, got '{}'.\n\n\
                     💡 Hint: For example \"https://repo1.maven.org/maven2\".",
                    field,
                    url
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Where the catalog is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

/// Settings of one run: command-line flags over config file values over
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub output: OutputTarget,
    /// Snapshot feeding the incremental cache; `None` disables the cache.
    pub previous: Option<PathBuf>,
    pub request: CatalogRequest,
    pub client: ClientSettings,
}

impl EngineSettings {
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let defaults = CatalogRequest::default();
        let client_defaults = ClientSettings::default();

        let output_path = args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let output = if output_path.as_os_str() == STDOUT_MARKER {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(output_path)
        };

        let cache_enabled = !args.no_cache && config.cache.unwrap_or(true);
        let previous = if cache_enabled {
            args.previous.clone().or(config.previous).or(match &output {
                OutputTarget::File(path) => Some(path.clone()),
                OutputTarget::Stdout => None,
            })
        } else {
            None
        };

        let request = CatalogRequest::new(
            args.page_size
                .or(config.page_size)
                .unwrap_or(defaults.page_size),
            args.version_window
                .or(config.version_window)
                .map(VersionWindow::from_size)
                .unwrap_or(defaults.version_window),
            args.max_concurrency
                .or(config.max_concurrent_artifacts)
                .unwrap_or(defaults.max_concurrent_artifacts),
            config
                .max_concurrent_versions
                .unwrap_or(defaults.max_concurrent_versions),
        );

        let client = ClientSettings {
            search_url: config.search_url.unwrap_or(client_defaults.search_url),
            repository_url: config
                .repository_url
                .unwrap_or(client_defaults.repository_url),
            request_timeout: config
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(client_defaults.request_timeout),
            connect_timeout: config
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(client_defaults.connect_timeout),
            max_retries: config.max_retries.unwrap_or(client_defaults.max_retries),
            retry_delay: config
                .retry_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(client_defaults.retry_delay),
            max_in_flight_requests: config
                .max_in_flight_requests
                .unwrap_or(client_defaults.max_in_flight_requests),
        };

        Self {
            output,
            previous,
            request,
            client,
        }
    }
}
