//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.slidenav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::menu::MenuEntry;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SlidenavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub swipe: SwipeConfig,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_slide: Option<usize>,
    pub reveal_delay_ms: Option<u64>,
    pub auto_hide_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewConfig {
    pub counter: Option<bool>,
    pub progress: Option<bool>,
    pub controls: Option<bool>,
    pub menu_toggle: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwipeConfig {
    pub threshold_px: Option<f64>,
    pub cell_width_px: Option<f64>,
    pub cell_height_px: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REVEAL_DELAY_MS: u64 = 50;
/// Longest pause allowed between hiding a slide and revealing the next.
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;
pub const DEFAULT_AUTO_HIDE_SECS: u64 = 3;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_CELL_WIDTH_PX: f64 = 8.0;
pub const DEFAULT_CELL_HEIGHT_PX: f64 = 16.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Which optional UI elements exist. A disabled element is skipped by every
/// render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeConfig {
    pub counter: bool,
    pub progress: bool,
    pub controls: bool,
    pub menu_toggle: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            counter: true,
            progress: true,
            controls: true,
            menu_toggle: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    pub threshold_px: f64,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            cell_height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_slide: usize,
    pub reveal_delay: Duration,
    /// `None` disables auto-hide.
    pub auto_hide: Option<Duration>,
    pub chrome: ChromeConfig,
    pub swipe: SwipeSettings,
    /// Custom menu entries. Empty means "one entry per slide".
    pub menu: Vec<MenuEntry>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&SlidenavConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None/false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_slide: Option<usize>,
    pub reveal_delay_ms: Option<u64>,
    pub no_auto_hide: bool,
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

/// Returns the path to `~/.slidenav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".slidenav").join("config.toml"))
}

/// Load config from `~/.slidenav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SlidenavConfig::default()`.
pub fn load_config() -> Result<SlidenavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SlidenavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SlidenavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. Malformed TOML is `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<SlidenavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SlidenavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# slidenav configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_slide = 1
# reveal_delay_ms = 50      # pause between hiding a slide and showing the next
# auto_hide_secs = 3        # dim controls after this much inactivity, 0 = never

# [view]
# counter = true
# progress = true
# controls = true
# menu_toggle = true

# [swipe]
# threshold_px = 50
# cell_width_px = 8         # terminal cell size used to convert drags to pixels
# cell_height_px = 16

# Custom jump menu. Without any [[menu]] entries, every slide is listed.
# [[menu]]
# label = "Intro"
# slide = "1"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Read and parse an env var, ignoring (and logging) unparsable values.
fn env_value<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: not a valid value ({:?})", name, raw);
            None
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SlidenavConfig, cli: &CliOverrides) -> ResolvedConfig {
    let start_slide = cli
        .start_slide
        .or_else(|| env_value("SLIDENAV_START_SLIDE"))
        .or(config.general.start_slide)
        .unwrap_or(1);

    let reveal_delay_ms = cli
        .reveal_delay_ms
        .or_else(|| env_value("SLIDENAV_REVEAL_DELAY_MS"))
        .or(config.general.reveal_delay_ms)
        .unwrap_or(DEFAULT_REVEAL_DELAY_MS);
    if reveal_delay_ms > MAX_REVEAL_DELAY_MS {
        warn!(
            "reveal_delay_ms {} too long, using {}",
            reveal_delay_ms, MAX_REVEAL_DELAY_MS
        );
    }
    let reveal_delay_ms = reveal_delay_ms.min(MAX_REVEAL_DELAY_MS);

    let auto_hide_secs = env_value("SLIDENAV_AUTO_HIDE_SECS")
        .or(config.general.auto_hide_secs)
        .unwrap_or(DEFAULT_AUTO_HIDE_SECS);
    let auto_hide = if cli.no_auto_hide || auto_hide_secs == 0 {
        None
    } else {
        Some(Duration::from_secs(auto_hide_secs))
    };

    let defaults = ChromeConfig::default();
    let chrome = ChromeConfig {
        counter: config.view.counter.unwrap_or(defaults.counter),
        progress: config.view.progress.unwrap_or(defaults.progress),
        controls: config.view.controls.unwrap_or(defaults.controls),
        menu_toggle: config.view.menu_toggle.unwrap_or(defaults.menu_toggle),
    };

    let swipe = SwipeSettings {
        threshold_px: config
            .swipe
            .threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
        cell_width_px: config
            .swipe
            .cell_width_px
            .unwrap_or(DEFAULT_CELL_WIDTH_PX),
        cell_height_px: config
            .swipe
            .cell_height_px
            .unwrap_or(DEFAULT_CELL_HEIGHT_PX),
    };

    ResolvedConfig {
        start_slide,
        reveal_delay: Duration::from_millis(reveal_delay_ms),
        auto_hide,
        chrome,
        swipe,
        menu: config.menu.clone(),
    }
}
