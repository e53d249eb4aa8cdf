//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.deepforge/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeepForgeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub animate_background: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    pub reply_text: Option<String>,
    pub reply_delay_ms: Option<u64>,
    pub welcome_grace_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SidebarConfig {
    pub start_expanded: Option<bool>,
    pub expanded_width: Option<u16>,
    pub collapsed_width: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const PLACEHOLDER_REPLY: &str = "That's an interesting question. Let me help with that...";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_WELCOME_GRACE_MS: u64 = 1000;
pub const DEFAULT_EXPANDED_WIDTH: u16 = 24;
pub const DEFAULT_COLLAPSED_WIDTH: u16 = 6;
/// Narrowest rail that still fits the right border, one column of padding on
/// each side, and one glyph between them.
pub const MIN_COLLAPSED_WIDTH: u16 = 4;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub animate_background: bool,
    pub reply_text: String,
    pub reply_delay: Duration,
    pub welcome_grace: Duration,
    pub sidebar_start_expanded: bool,
    pub sidebar_expanded_width: u16,
    pub sidebar_collapsed_width: u16,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&DeepForgeConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Settings that can only come from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub collapsed: bool,
    pub no_animation: bool,
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

/// Returns the path to `~/.deepforge/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".deepforge").join("config.toml"))
}

/// Load config from `~/.deepforge/config.toml`.
pub fn load_config() -> Result<DeepForgeConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(DeepForgeConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeepForgeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<DeepForgeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeepForgeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeepForgeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# DeepForge Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# animate_background = true          # Or set DEEPFORGE_ANIMATE=0

# [chat]
# reply_text = "That's an interesting question. Let me help with that..."
# reply_delay_ms = 1000              # Or set DEEPFORGE_REPLY_DELAY_MS
# welcome_grace_ms = 1000            # Or set DEEPFORGE_WELCOME_GRACE_MS

# [sidebar]
# start_expanded = true
# expanded_width = 24
# collapsed_width = 6
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DeepForgeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// Same as [`resolve`], with the environment lookup injected.
pub fn resolve_with_env(
    config: &DeepForgeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| match LevelFilter::from_str(level) {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log_level {:?}, using debug", level);
                None
            }
        })
        .unwrap_or(LevelFilter::Debug);

    // Animation: CLI off-switch → env → config → default
    let animate_background = !cli.no_animation
        && env_override(&env, "DEEPFORGE_ANIMATE", parse_flag)
            .or(config.general.animate_background)
            .unwrap_or(true);

    // Delays: env → config → default
    let reply_delay_ms = env_override(&env, "DEEPFORGE_REPLY_DELAY_MS", |s| s.parse().ok())
        .or(config.chat.reply_delay_ms)
        .unwrap_or(DEFAULT_REPLY_DELAY_MS);
    let welcome_grace_ms = env_override(&env, "DEEPFORGE_WELCOME_GRACE_MS", |s| s.parse().ok())
        .or(config.chat.welcome_grace_ms)
        .unwrap_or(DEFAULT_WELCOME_GRACE_MS);

    let reply_text = config
        .chat
        .reply_text
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_REPLY.to_string());

    let sidebar_start_expanded =
        !cli.collapsed && config.sidebar.start_expanded.unwrap_or(true);

    let sidebar_collapsed_width = config
        .sidebar
        .collapsed_width
        .unwrap_or(DEFAULT_COLLAPSED_WIDTH)
        .max(MIN_COLLAPSED_WIDTH);
    let sidebar_expanded_width = config
        .sidebar
        .expanded_width
        .unwrap_or(DEFAULT_EXPANDED_WIDTH)
        .max(sidebar_collapsed_width.saturating_add(1));

    ResolvedConfig {
        log_level,
        animate_background,
        reply_text,
        reply_delay: Duration::from_millis(reply_delay_ms),
        welcome_grace: Duration::from_millis(welcome_grace_ms),
        sidebar_start_expanded,
        sidebar_expanded_width,
        sidebar_collapsed_width,
    }
}

/// Look up an env var and parse it; unparseable values are ignored with a warning.
fn env_override<T>(
    env: &impl Fn(&str) -> Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = env(name)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring unparseable {}={:?}", name, raw);
    }
    parsed
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
