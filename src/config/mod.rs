//! Filter configuration loading and management.
//!
//! Loads leakgate configuration from `./leakgate.toml` (or
//! `$LEAKGATE_CONFIG_PATH`). Environment variables override file values;
//! file values override defaults.
//!
//! Precedence: env vars > config file > defaults.
//!
//! The configuration owns the three inputs the filter core reads: the
//! enabled flag, the use-built-in-patterns flag, and the custom pattern
//! list. Any change to these must be followed by
//! [`crate::service::ContentFilter::invalidate_cache`] on the filter that
//! shares this config.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A user-supplied detection pattern from configuration.
///
/// Entries missing any of the three fields (empty strings after parsing)
/// are dropped silently during the registry merge — a misconfigured custom
/// rule never disables the rest of the filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomPatternConfig {
    /// Unique pattern identifier reported in matches.
    pub name: String,
    /// Human-readable category label (e.g. "API Key").
    pub category: String,
    /// Regex source compiled case-insensitively.
    pub pattern: String,
}

/// Top-level filter configuration loaded from TOML.
///
/// Path: `./leakgate.toml` or `$LEAKGATE_CONFIG_PATH`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Master switch. When `false`, scans return empty without touching
    /// the pattern cache.
    pub enabled: bool,
    /// Whether the built-in rule table participates in scanning.
    pub use_builtin_patterns: bool,
    /// Custom rules appended after the built-ins, in declared order.
    pub custom_patterns: Vec<CustomPatternConfig>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            use_builtin_patterns: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// Config file path: `$LEAKGATE_CONFIG_PATH` or `./leakgate.toml`.
    /// If the file does not exist, returns defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::config_path_with(|key| std::env::var(key).ok());
        Self::load_from(&path)
    }

    /// Load configuration from a specific TOML file path.
    ///
    /// A missing file is not an error: defaults are returned.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading filter config from file");
                let config: FilterConfig =
                    toml::from_str(&contents).context("failed to parse filter config TOML")?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no filter config file found, using defaults");
                Ok(FilterConfig::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read filter config file: {e}")),
        }
    }

    /// Resolve config path using a custom env resolver (for testing).
    fn config_path_with(env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(p) = env("LEAKGATE_CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from("leakgate.toml")
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability (avoids unsafe `set_var`
    /// in tests).
    fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("LEAKGATE_ENABLED") {
            match v.parse() {
                Ok(b) => self.enabled = b,
                Err(_) => tracing::warn!(
                    var = "LEAKGATE_ENABLED",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("LEAKGATE_USE_BUILTIN_PATTERNS") {
            match v.parse() {
                Ok(b) => self.use_builtin_patterns = b,
                Err(_) => tracing::warn!(
                    var = "LEAKGATE_USE_BUILTIN_PATTERNS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
    }

    /// Parse a TOML string into config (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: FilterConfig =
            toml::from_str(toml_str).context("failed to parse filter config TOML")?;
        Ok(config)
    }
}

// ── Tests ───────────────────────────────────────────────────────
