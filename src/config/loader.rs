//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::ColumnMode;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or invalid field values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting carried a value outside its accepted range or form.
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue {
        /// Setting name (config key or environment variable).
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/feedtui/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Cards per synthesized feed page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Simulated repository latency for refresh/load-more, in milliseconds.
    #[serde(default)]
    pub refresh_ms: Option<u64>,

    /// Autoplay countdown length in seconds.
    #[serde(default)]
    pub countdown_secs: Option<u64>,

    /// Status notice lifetime in seconds.
    #[serde(default)]
    pub notice_secs: Option<u64>,

    /// Starting column mode ("single" or "double").
    #[serde(default)]
    pub columns: Option<ColumnMode>,

    /// Feed fixture path (unset means the bundled fixture).
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,

    /// Feed cache path.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Cards per synthesized feed page.
    pub page_size: usize,
    /// Simulated repository latency in milliseconds.
    pub refresh_ms: u64,
    /// Autoplay countdown length in seconds.
    pub countdown_secs: u64,
    /// Status notice lifetime in seconds.
    pub notice_secs: u64,
    /// Starting column mode.
    pub columns: ColumnMode,
    /// Feed fixture path (`None` means the bundled fixture).
    pub fixture_path: Option<PathBuf>,
    /// Feed cache path (`None` disables the cache fallback).
    pub cache_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            refresh_ms: 1000,
            countdown_secs: 5,
            notice_secs: 3,
            columns: ColumnMode::default(),
            fixture_path: None,
            cache_path: default_cache_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/feedtui/feedtui.log` on Unix-like systems,
/// or the appropriate platform path elsewhere. Falls back to the current
/// directory when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("feedtui").join("feedtui.log")
    } else {
        PathBuf::from("feedtui.log")
    }
}

/// Resolve default feed cache path.
///
/// Returns `~/.cache/feedtui/feed_cache.json` on Unix-like systems.
/// `None` when no cache directory can be determined (cache disabled).
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("feedtui").join("feed_cache.json"))
}

/// Resolve default config file path.
///
/// Returns `~/.config/feedtui/config.toml` on Unix, appropriate path on
/// other platforms. `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feedtui").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FEEDTUI_CONFIG` environment variable
/// 3. Default path `~/.config/feedtui/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FEEDTUI_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. A `page_size` of zero is rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for out-of-range settings.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    if config.page_size == Some(0) {
        return Err(ConfigError::InvalidValue {
            name: "page_size".to_string(),
            value: "0".to_string(),
        });
    }

    Ok(ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        refresh_ms: config.refresh_ms.unwrap_or(defaults.refresh_ms),
        countdown_secs: config.countdown_secs.unwrap_or(defaults.countdown_secs),
        notice_secs: config.notice_secs.unwrap_or(defaults.notice_secs),
        columns: config.columns.unwrap_or(defaults.columns),
        fixture_path: config.fixture_path.or(defaults.fixture_path),
        cache_path: config.cache_path.or(defaults.cache_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FEEDTUI_COLUMNS`: starting column mode ("single"/"double")
/// - `FEEDTUI_FIXTURE`: fixture path
/// - `FEEDTUI_PAGE_SIZE`: cards per synthesized page
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] when a variable is set to an
/// unparseable value.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(columns) = std::env::var("FEEDTUI_COLUMNS") {
        config.columns = columns
            .parse::<ColumnMode>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "FEEDTUI_COLUMNS".to_string(),
                value: columns.clone(),
            })?;
    }

    if let Ok(fixture) = std::env::var("FEEDTUI_FIXTURE") {
        config.fixture_path = Some(PathBuf::from(fixture));
    }

    if let Ok(page_size) = std::env::var("FEEDTUI_PAGE_SIZE") {
        let parsed = page_size
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "FEEDTUI_PAGE_SIZE".to_string(),
                value: page_size.clone(),
            })?;
        config.page_size = parsed;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    fixture_override: Option<PathBuf>,
    columns_override: Option<ColumnMode>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(fixture) = fixture_override {
        config.fixture_path = Some(fixture);
    }

    if let Some(columns) = columns_override {
        config.columns = columns;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
