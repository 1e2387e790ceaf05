//! Configuration file loading with precedence handling.

use crate::config::{DeckGeometry, Metrics};
use crate::layout::types::Overscan;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

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

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cardgrid/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Grid card width in pixels.
    #[serde(default)]
    pub card_width: Option<usize>,

    /// Grid card height in pixels.
    #[serde(default)]
    pub card_height: Option<usize>,

    /// Gap between cards/columns/rows in pixels.
    #[serde(default)]
    pub gap: Option<usize>,

    /// List-view row height in pixels.
    #[serde(default)]
    pub row_height: Option<usize>,

    /// Overscan above the viewport in pixels.
    #[serde(default)]
    pub overscan_top: Option<usize>,

    /// Overscan below the viewport in pixels.
    #[serde(default)]
    pub overscan_bottom: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Associated-region geometry overrides.
    #[serde(default)]
    pub deck: Option<DeckConfigSection>,
}

/// Deck/stack geometry section from TOML.
///
/// Structure matches the TOML format:
/// ```toml
/// [deck]
/// card_width = 98
/// card_height = 140
/// gap = 8
/// stack_width = 156
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeckConfigSection {
    /// Deck card width in pixels.
    #[serde(default)]
    pub card_width: Option<usize>,

    /// Deck card height in pixels.
    #[serde(default)]
    pub card_height: Option<usize>,

    /// Gap between deck cards in pixels.
    #[serde(default)]
    pub gap: Option<usize>,

    /// Nominal stack column width in pixels.
    #[serde(default)]
    pub stack_width: Option<usize>,
}

impl ConfigFile {
    /// Merge file overrides onto the given defaults, producing final metrics.
    ///
    /// Zero-valued card dimensions would make the layout math degenerate
    /// (cards must be > 0 per the geometry contract), so zeros in the file
    /// are ignored in favor of the defaults.
    pub fn apply(&self, defaults: Metrics) -> Metrics {
        fn pick(over: Option<usize>, default: usize) -> usize {
            match over {
                Some(v) if v > 0 => v,
                _ => default,
            }
        }

        let deck = self.deck.clone().unwrap_or(DeckConfigSection {
            card_width: None,
            card_height: None,
            gap: None,
            stack_width: None,
        });

        Metrics {
            card_width: pick(self.card_width, defaults.card_width),
            card_height: pick(self.card_height, defaults.card_height),
            // Gaps may legitimately be zero.
            gap: self.gap.unwrap_or(defaults.gap),
            row_height: pick(self.row_height, defaults.row_height),
            overscan: Overscan {
                top: self.overscan_top.unwrap_or(defaults.overscan.top),
                bottom: self.overscan_bottom.unwrap_or(defaults.overscan.bottom),
            },
            deck: DeckGeometry {
                card_width: pick(deck.card_width, defaults.deck.card_width),
                card_height: pick(deck.card_height, defaults.deck.card_height),
                gap: deck.gap.unwrap_or(defaults.deck.gap),
                stack_width: pick(deck.stack_width, defaults.deck.stack_width),
            },
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cardgrid/cardgrid.log` on Unix-like systems,
/// or the appropriate platform path elsewhere.
///
/// If the state directory cannot be determined, falls back to the current
/// directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cardgrid").join("cardgrid.log")
    } else {
        PathBuf::from("cardgrid.log")
    }
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

/// Resolve default config file path.
///
/// Returns `~/.config/cardgrid/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardgrid").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `CARDGRID_CONFIG` environment variable
/// 3. Default path `~/.config/cardgrid/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    // 1. Explicit path
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    // 2. CARDGRID_CONFIG environment variable
    if let Ok(env_path) = std::env::var("CARDGRID_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    // 3. Default path
    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    // No config path available
    Ok(None)
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
