// Standards Browser - K-8 standards explorer for the terminal
//
// Loads a grade → domain → cluster → standard → sub-standard catalog once,
// then lets the user walk it in a TUI or print views headless.
//
// Architecture:
// - Catalog: immutable tree loaded from a file or URL, with lookups
// - Selection: explicit state plus pure transitions (one per user action)
// - View: tree rows, breadcrumb and preview projected from the state
// - TUI (ratatui): panels, modals and key handling around those projections
// - CLI (clap): headless show/tree/grades and config management

mod catalog;
mod cli;
mod config;
mod logging;
mod selection;
mod startup;
mod tui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management runs before anything is loaded
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Precedence: CLI flags > env vars > config file > defaults
    let config = cli.apply_overrides(Config::from_env());

    // In TUI mode logs go to the logs panel (prevents garbling the display)
    // In headless mode they go to stderr
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    let loaded = catalog::load(&config.data).await;

    if config.enable_tui {
        startup::log_startup(&config, loaded.as_ref().ok().map(|c| c.stats()).as_ref());

        // A failed load still opens the TUI, with the error in the preview
        let loaded = loaded.map_err(|e| {
            tracing::error!("Failed to load catalog: {}", e);
            e.to_string()
        });

        tracing::info!("Starting TUI");
        tui::run_tui(loaded, log_buffer, &config).await?;
        tracing::info!("Shutdown complete");
        return Ok(());
    }

    let catalog = loaded.with_context(|| format!("Failed to load catalog from {}", config.data))?;
    if cli.verbose {
        startup::print_startup(&config, &catalog.stats());
    }

    cli::run(cli.command.as_ref(), &config, &catalog)
}
