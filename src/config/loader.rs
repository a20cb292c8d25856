//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TAXCALC_CONFIG";
/// Environment variable overriding the frame rate.
pub const FPS_ENV_VAR: &str = "TAXCALC_FPS";

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

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

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting parsed but is outside its accepted range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/taxcalc/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Target redraw rate in frames per second.
    #[serde(default)]
    pub fps: Option<u32>,

    /// Start in fullscreen layout instead of the 500×760 window.
    #[serde(default)]
    pub start_fullscreen: Option<bool>,

    /// Fallback pixel width of one terminal cell.
    #[serde(default)]
    pub cell_width: Option<u16>,

    /// Fallback pixel height of one terminal cell.
    #[serde(default)]
    pub cell_height: Option<u16>,

    /// Disable colours.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Frames per second.
    pub fps: u32,
    /// Start fullscreen.
    pub start_fullscreen: bool,
    /// Cell width in pixels when the terminal does not report it.
    pub cell_width: u16,
    /// Cell height in pixels when the terminal does not report it.
    pub cell_height: u16,
    /// Colours disabled.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            start_fullscreen: false,
            cell_width: 8,
            cell_height: 16,
            no_color: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject settings the event loop or projection cannot work with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidValue {
                field: "fps",
                reason: format!("{} is outside 1..={MAX_FPS}", self.fps),
            });
        }
        if self.cell_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cell_width",
                reason: "must be at least 1 pixel".to_string(),
            });
        }
        if self.cell_height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cell_height",
                reason: "must be at least 1 pixel".to_string(),
            });
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/taxcalc/taxcalc.log` on Linux, the platform
/// equivalent elsewhere, or `taxcalc.log` in the current directory when no
/// state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("taxcalc").join("taxcalc.log")
    } else {
        PathBuf::from("taxcalc.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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
/// Returns `~/.config/taxcalc/config.toml` on Linux, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taxcalc").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TAXCALC_CONFIG` environment variable
/// 3. Default path `~/.config/taxcalc/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        fps: config.fps.unwrap_or(defaults.fps),
        start_fullscreen: config.start_fullscreen.unwrap_or(defaults.start_fullscreen),
        cell_width: config.cell_width.unwrap_or(defaults.cell_width),
        cell_height: config.cell_height.unwrap_or(defaults.cell_height),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TAXCALC_FPS`: Override frame rate (ignored unless it parses as a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(FPS_ENV_VAR) {
        match raw.trim().parse::<u32>() {
            Ok(fps) => config.fps = fps,
            Err(_) => tracing::warn!(value = %raw, "Ignoring non-numeric {FPS_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    fps_override: Option<u32>,
    fullscreen_override: Option<bool>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(fps) = fps_override {
        config.fps = fps;
    }

    if let Some(fullscreen) = fullscreen_override {
        config.start_fullscreen = fullscreen;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
