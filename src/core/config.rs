//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.strawhat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Content lists (`[[popular]]`, `[[movies]]`, `[[episodes]]`) replace the
//! built-in catalog entries when present.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::catalog::{CardSpec, Catalog};
use crate::core::router::ScreenId;
use crate::core::state::Timing;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StrawhatConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub popular: Vec<LinkEntry>,
    #[serde(default)]
    pub movies: Vec<LinkEntry>,
    #[serde(default)]
    pub episodes: Vec<LinkEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_screen: Option<ScreenId>,
    pub skip_landing: Option<bool>,
    pub popup_duration_ms: Option<u64>,
    pub press_reset_ms: Option<u64>,
    pub link_opener: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
    pub image: Option<String>,
}

impl LinkEntry {
    fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(fallback)
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POPUP_DURATION_MS: u64 = 2000;
pub const DEFAULT_PRESS_RESET_MS: u64 = 150;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_screen: ScreenId,
    pub skip_landing: bool,
    pub timing: Timing,
    /// Command used to open links; `None` means the platform default.
    pub link_opener: Option<String>,
    pub catalog: Catalog,
}

/// Values that came from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_screen: Option<ScreenId>,
    pub skip_landing: bool,
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

/// Returns the path to `~/.strawhat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".strawhat").join("config.toml"))
}

/// Load config from `path`, or from `~/.strawhat/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `StrawhatConfig::default()`. An explicit path that doesn't exist
/// is an `Io` error. A file that exists but is malformed returns
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<StrawhatConfig, ConfigError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StrawhatConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StrawhatConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<StrawhatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StrawhatConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Strawhat Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_screen = "home"            # "home", "movies", "episodes", "about", "contact"
# skip_landing = false
# popup_duration_ms = 2000         # How long "Sent" stays up after submitting
# press_reset_ms = 150             # How long a clicked card stays popped
# link_opener = "xdg-open"         # Or set STRAWHAT_LINK_OPENER env var

# Any list below replaces the built-in entries of the same kind.

# [[popular]]
# title = "EP 1071"
# url = "https://example.com/one-piece-episode-1071/"

# [[movies]]
# title = "One Piece Film: Gold (2016)"
# url = "https://example.com/film-gold"
# image = "onepiece_gold"

# [[episodes]]
# title = "One Piece: Episodes 0–500"
# url = "https://example.com/episodes0to500"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StrawhatConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Start screen: CLI → env → config → default
    let start_screen = cli
        .start_screen
        .or_else(|| env_screen("STRAWHAT_START_SCREEN"))
        .or(config.general.start_screen)
        .unwrap_or_default();

    // Skipping the landing is opt-in from either source
    let skip_landing = cli.skip_landing || config.general.skip_landing.unwrap_or(false);

    // Link opener: env → config → platform default
    let link_opener = std::env::var("STRAWHAT_LINK_OPENER")
        .ok()
        .filter(|cmd| !cmd.trim().is_empty())
        .or_else(|| config.general.link_opener.clone());

    let timing = Timing {
        reset_delay: Duration::from_millis(
            config.general.press_reset_ms.unwrap_or(DEFAULT_PRESS_RESET_MS),
        ),
        popup_duration: Duration::from_millis(
            config
                .general
                .popup_duration_ms
                .unwrap_or(DEFAULT_POPUP_DURATION_MS),
        ),
    };

    ResolvedConfig {
        start_screen,
        skip_landing,
        timing,
        link_opener,
        catalog: resolve_catalog(config),
    }
}

fn env_screen(var: &str) -> Option<ScreenId> {
    let value = std::env::var(var).ok()?;
    match value.parse() {
        Ok(screen) => Some(screen),
        Err(e) => {
            warn!("Ignoring {}: {}", var, e);
            None
        }
    }
}

/// Built-in catalog with any configured lists swapped in.
fn resolve_catalog(config: &StrawhatConfig) -> Catalog {
    let mut catalog = Catalog::default();

    if !config.popular.is_empty() {
        catalog.popular = config
            .popular
            .iter()
            .map(|e| CardSpec::popular(&e.title, e.image_or("episode"), &e.url))
            .collect();
    }
    if !config.movies.is_empty() {
        catalog.movies = config
            .movies
            .iter()
            .map(|e| CardSpec::movie(&e.title, e.image_or("movie"), &e.url))
            .collect();
    }
    if !config.episodes.is_empty() {
        catalog.episodes = config
            .episodes
            .iter()
            .map(|e| CardSpec::episode_range(&e.title, e.image_or("episodes"), &e.url))
            .collect();
    }

    catalog
}
