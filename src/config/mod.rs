//! Configuration for the standards browser
//!
//! Configuration is loaded in order of precedence:
//! 1. Command-line flags (highest priority, applied by `main`)
//! 2. Environment variables
//! 3. Config file (~/.config/standards-browser/config.toml)
//! 4. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application directory name under ~/.config
pub const APP_NAME: &str = "standards-browser";

const DEFAULT_DATA: &str = "standards-data.json";
const DEFAULT_GRADE: &str = "K";
const DEFAULT_DOMAIN: &str = "CC";
const DEFAULT_THEME: &str = "Dark";
const DEFAULT_LABEL_WIDTH: usize = crate::view::labels::DEFAULT_LABEL_WIDTH;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog source: a file path or an http(s) URL
    pub data: String,

    /// Grade selected at startup
    pub initial_grade: String,

    /// Domain opened at startup (None = leave the grade collapsed)
    pub initial_domain: Option<String>,

    /// Theme name: "Dark", "Light", "High Contrast"
    pub theme: String,

    /// Column budget for domain and cluster labels in the tree
    pub label_width: usize,

    /// Whether to run the TUI (false = headless, print and exit)
    pub enable_tui: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            initial_grade: DEFAULT_GRADE.to_string(),
            initial_domain: Some(DEFAULT_DOMAIN.to_string()),
            theme: DEFAULT_THEME.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
            enable_tui: true,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub data: Option<String>,
    pub initial_grade: Option<String>,
    /// Empty string disables opening a domain at startup
    pub initial_domain: Option<String>,
    pub theme: Option<String>,
    pub label_width: Option<usize>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/standards-browser/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_NAME).join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed ends the
    /// process with an actionable message instead of falling back to
    /// defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Non-numeric label_width");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `{APP_NAME} config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Catalog source: env > file > default
        let data = env("STANDARDS_DATA")
            .or(file.data)
            .unwrap_or(defaults.data);

        // Initial grade: env > file > default
        let initial_grade = env("STANDARDS_GRADE")
            .or(file.initial_grade)
            .unwrap_or(defaults.initial_grade);

        // Initial domain: file > default ("" turns it off)
        let initial_domain = match file.initial_domain {
            Some(domain) if domain.is_empty() => None,
            Some(domain) => Some(domain),
            None => defaults.initial_domain,
        };

        // Theme: env > file > default
        let theme = env("STANDARDS_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let label_width = file.label_width.unwrap_or(defaults.label_width);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("STANDARDS_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            data,
            initial_grade,
            initial_domain,
            theme,
            label_width,
            enable_tui,
            logging,
        }
    }

    /// Whether the config file on disk is the source of this config
    pub fn file_source() -> Option<PathBuf> {
        Self::config_path().filter(|p| p.exists())
    }
}
