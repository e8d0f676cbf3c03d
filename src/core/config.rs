//! # Configuration
//!
//! Navigation settings with a clear override hierarchy:
//! coordinator defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wayfinder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::StartPolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WayfinderConfig {
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavigationConfig {
    pub max_depth: Option<usize>,
    pub start_policy: Option<StartPolicy>,
    pub log_actions: Option<bool>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub max_depth: Option<usize>,
    pub start_policy: Option<StartPolicy>,
    pub log_actions: Option<bool>,
}

pub const ENV_MAX_DEPTH: &str = "WAYFINDER_MAX_DEPTH";
pub const ENV_START_POLICY: &str = "WAYFINDER_START_POLICY";
pub const ENV_LOG_ACTIONS: &str = "WAYFINDER_LOG_ACTIONS";

// ============================================================================
// Resolved Config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` keeps each coordinator type's own `MAX_NAVIGATION_DEPTH`.
    pub max_depth: Option<usize>,
    pub start_policy: StartPolicy,
    pub log_actions: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            start_policy: StartPolicy::default(),
            log_actions: false,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.wayfinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wayfinder").join("config.toml"))
}

/// Load config from `~/.wayfinder/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WayfinderConfig::default()`.
pub fn load_config() -> Result<WayfinderConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(WayfinderConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default file if absent.
/// A malformed file yields `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<WayfinderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WayfinderConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WayfinderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Wayfinder Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [navigation]
# max_depth = 20                  # Or set WAYFINDER_MAX_DEPTH
# start_policy = "best_effort"    # "best_effort" or "strict"
# log_actions = false             # Log every dispatched action at debug level
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: config file → env vars → CLI.
pub fn resolve(config: &WayfinderConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &WayfinderConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let max_depth = cli
        .max_depth
        .or_else(|| env(ENV_MAX_DEPTH).and_then(|v| parse_env(ENV_MAX_DEPTH, &v, parse_depth)))
        .or(config.navigation.max_depth);

    let start_policy = cli
        .start_policy
        .or_else(|| {
            env(ENV_START_POLICY).and_then(|v| parse_env(ENV_START_POLICY, &v, parse_start_policy))
        })
        .or(config.navigation.start_policy)
        .unwrap_or_default();

    let log_actions = cli
        .log_actions
        .or_else(|| env(ENV_LOG_ACTIONS).and_then(|v| parse_env(ENV_LOG_ACTIONS, &v, parse_flag)))
        .or(config.navigation.log_actions)
        .unwrap_or(false);

    ResolvedConfig {
        max_depth,
        start_policy,
        log_actions,
    }
}

fn parse_env<T>(key: &str, value: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(value.trim());
    if parsed.is_none() {
        warn!("Ignoring unrecognised value for {}: {:?}", key, value);
    }
    parsed
}

fn parse_depth(value: &str) -> Option<usize> {
    value.parse().ok()
}

fn parse_start_policy(value: &str) -> Option<StartPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "best_effort" | "best-effort" => Some(StartPolicy::BestEffort),
        "strict" => Some(StartPolicy::Strict),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
