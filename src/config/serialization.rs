//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# standards-browser configuration

# Catalog source: a JSON file path or an http(s) URL
# (STANDARDS_DATA env var and --data override this)
data = "{data}"

# Grade selected at startup (STANDARDS_GRADE, --grade)
initial_grade = "{grade}"

# Domain opened at startup; "" leaves the grade collapsed
initial_domain = "{domain}"

# Theme: Dark, Light, High Contrast (press 't' in the TUI to cycle)
theme = "{theme}"

# Column budget for domain and cluster labels in the navigation tree
label_width = {label_width}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the logs panel or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            data = escape(&self.data),
            grade = escape(&self.initial_grade),
            domain = escape(self.initial_domain.as_deref().unwrap_or("")),
            theme = escape(&self.theme),
            label_width = self.label_width,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
