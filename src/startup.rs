// Startup module - version banner and catalog summary
//
// Headless runs print the banner to stderr with --verbose so stdout stays
// clean for piping. The TUI gets the same summary in its logs panel.

use crate::catalog::{loader, CatalogStats};
use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Where the catalog came from, for display
fn data_source(config: &Config) -> String {
    if loader::is_url(&config.data) {
        format!("{} (remote)", config.data)
    } else {
        config.data.clone()
    }
}

/// Count lines shown under the banner
fn stat_lines(stats: &CatalogStats) -> [(&'static str, usize); 5] {
    [
        ("grades", stats.grades),
        ("domains", stats.domains),
        ("clusters", stats.clusters),
        ("standards", stats.standards),
        ("sub-standards", stats.sub_standards),
    ]
}

/// Print the startup banner and catalog summary to stderr
pub fn print_startup(config: &Config, stats: &CatalogStats) {
    use colors::*;

    // Banner
    eprintln!();
    eprintln!("  {BOLD}{CYAN}Standards Browser{RESET} {DIM}v{VERSION}{RESET}");
    eprintln!();

    // Config file status
    match Config::file_source() {
        Some(path) => eprintln!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display()),
        None => eprintln!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}"),
    }
    eprintln!("  {DIM}Data:{RESET}   {}", data_source(config));
    eprintln!();

    for (name, count) in stat_lines(stats) {
        eprintln!("    {GREEN}✓{RESET} {:<14} {DIM}{}{RESET}", name, count);
    }
    eprintln!();
}

/// Print the same summary to the TUI logs panel
pub fn log_startup(config: &Config, stats: Option<&CatalogStats>) {
    tracing::info!("Standards Browser v{}", VERSION);

    match Config::file_source() {
        Some(path) => tracing::info!("Config: {}", path.display()),
        None => tracing::info!("Config: defaults"),
    }

    match stats {
        Some(stats) => {
            let summary: Vec<String> = stat_lines(stats)
                .iter()
                .map(|(name, count)| format!("{count} {name}"))
                .collect();
            tracing::info!("Catalog {}: {}", data_source(config), summary.join(", "));
        }
        None => tracing::error!("No catalog loaded from {}", data_source(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_source_is_marked() {
        let config = Config {
            data: "https://example.com/standards.json".to_string(),
            ..Config::default()
        };
        assert_eq!(data_source(&config), "https://example.com/standards.json (remote)");
        assert_eq!(data_source(&Config::default()), "standards-data.json");
    }

    #[test]
    fn test_stat_lines_follow_catalog_depth() {
        let stats = crate::catalog::fixtures::sample().stats();
        let lines = stat_lines(&stats);
        assert_eq!(lines[0], ("grades", 2));
        assert_eq!(lines[4], ("sub-standards", 3));
    }
}
