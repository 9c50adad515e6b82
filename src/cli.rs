// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the browser opens the TUI. Subcommands run headless:
// - show:   breadcrumb and preview for a path given as flags
// - tree:   the navigation tree after applying that path
// - grades: the grades in the catalog
// - config: --show, --path, --reset

use crate::catalog::{Catalog, ClusterId};
use crate::config::{Config, APP_NAME, VERSION};
use crate::selection::{apply, Action, Selection};
use crate::view::{breadcrumb, nav, preview, NavTree};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;

/// Standards Browser - explore K-8 standards from the terminal
#[derive(Parser, Debug)]
#[command(name = "standards-browser")]
#[command(version = VERSION)]
#[command(about = "Browse K-8 math standards by grade, domain, cluster and standard", long_about = None)]
pub struct Cli {
    /// Catalog file path or http(s) URL
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Grade to start from
    #[arg(long, global = true)]
    pub grade: Option<String>,

    /// Print a startup summary before headless output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the breadcrumb and preview for a path
    Show(PathArgs),

    /// Print the navigation tree after applying a path
    Tree(PathArgs),

    /// List the grades in the catalog
    Grades,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// A path into the selected grade, applied the way the tree applies clicks
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Domain id (e.g. CC)
    #[arg(long)]
    pub domain: Option<String>,

    /// Cluster key within the domain (A) or full id (CC.A)
    #[arg(long)]
    pub cluster: Option<String>,

    /// Standard code (e.g. K.CC.1)
    #[arg(long)]
    pub standard: Option<String>,

    /// Sub-standard code (e.g. K.CC.1.a)
    #[arg(long)]
    pub sub: Option<String>,

    /// Select the path without opening it in the tree
    #[arg(long)]
    pub collapsed: bool,
}

impl Cli {
    /// Layer command-line flags over the loaded config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(data) = &self.data {
            config.data = data.clone();
        }
        if let Some(grade) = &self.grade {
            config.initial_grade = grade.clone();
        }
        if self.command.is_some() {
            config.enable_tui = false;
        }
        config
    }
}

impl PathArgs {
    /// The path a bare headless run shows: the configured startup domain
    pub fn startup(config: &Config) -> Self {
        Self {
            domain: config.initial_domain.clone(),
            ..Self::default()
        }
    }

    /// Actions that walk from the grade down this path
    ///
    /// Domains, clusters and standards toggle (opening them from a fresh
    /// grade); a sub-standard is selected. With `collapsed` every step is a
    /// plain select and nothing opens.
    pub fn actions(&self, grade: &str) -> Result<Vec<Action>> {
        let mut actions = vec![Action::SetGrade(grade.to_string())];

        if let Some(domain) = &self.domain {
            actions.push(if self.collapsed {
                Action::SelectDomain(domain.clone())
            } else {
                Action::ToggleDomain(domain.clone())
            });
        }
        if let Some(cluster) = &self.cluster {
            let id = match (ClusterId::parse(cluster), &self.domain) {
                (Some(id), _) => id,
                (None, Some(domain)) => ClusterId::new(domain.as_str(), cluster.as_str()),
                (None, None) => bail!("--cluster {cluster} needs --domain or a full id like CC.A"),
            };
            actions.push(if self.collapsed {
                Action::SelectCluster(id)
            } else {
                Action::ToggleCluster(id)
            });
        }
        if let Some(standard) = &self.standard {
            actions.push(if self.collapsed {
                Action::SelectStandard(standard.clone())
            } else {
                Action::ToggleStandard(standard.clone())
            });
        }
        if let Some(sub) = &self.sub {
            actions.push(Action::SelectSubStandard(sub.clone()));
        }
        Ok(actions)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless commands
// ─────────────────────────────────────────────────────────────────────────────

/// Run a headless command against a loaded catalog
pub fn run(command: Option<&Commands>, config: &Config, catalog: &Catalog) -> Result<()> {
    let output = match command {
        Some(Commands::Show(path)) => {
            render_show(&walk(catalog, &config.initial_grade, path)?, catalog)
        }
        Some(Commands::Tree(path)) => render_tree(
            &walk(catalog, &config.initial_grade, path)?,
            catalog,
            config.label_width,
        ),
        Some(Commands::Grades) => render_grades(catalog),
        // Handled before the catalog is loaded
        Some(Commands::Config { .. }) => return Ok(()),
        None => {
            let path = PathArgs::startup(config);
            render_show(&walk(catalog, &config.initial_grade, &path)?, catalog)
        }
    };

    print!("{output}");
    std::io::stdout().flush().context("Failed to write output")?;
    Ok(())
}

/// Apply a path from the empty selection; the first unresolved step fails
pub fn walk(catalog: &Catalog, grade: &str, path: &PathArgs) -> Result<Selection> {
    let mut state = Selection::default();
    for action in path.actions(grade)? {
        state = apply(&state, catalog, &action)?;
        tracing::debug!(?action, "Applied");
    }
    Ok(state)
}

/// Breadcrumb line, blank line, preview text
pub fn render_show(state: &Selection, catalog: &Catalog) -> String {
    let crumbs = breadcrumb::to_line(&breadcrumb::project(state));
    let preview = preview::project(state, catalog).to_plain_text();
    format!("{crumbs}\n\n{preview}")
}

/// One line per visible row; selected rows end in `*`
pub fn render_tree(state: &Selection, catalog: &Catalog, label_width: usize) -> String {
    let tree = nav::project(state, catalog, label_width);
    if let Some(message) = tree.message() {
        return format!("{message}\n");
    }

    let mut out = String::new();
    if let NavTree::Rows(rows) = &tree {
        for row in rows {
            out.push_str(&"  ".repeat(row.depth));
            out.push_str(row.expander.icon());
            out.push(' ');
            out.push_str(&row.label);
            if row.selected {
                out.push_str(" *");
            }
            out.push('\n');
        }
    }
    out
}

/// Grade ids and names in catalog order
pub fn render_grades(catalog: &Catalog) -> String {
    let width = catalog.grade_ids().map(str::len).max().unwrap_or(0);
    catalog
        .grades()
        .iter()
        .map(|g| {
            let domains = g.domains.len();
            let plural = if domains == 1 { "" } else { "s" };
            format!("{:<width$}  {} ({domains} domain{plural})\n", g.id, g.name)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Config command
// ─────────────────────────────────────────────────────────────────────────────

/// Handle `config`; runs before logging and catalog loading
pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: {APP_NAME} config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    match Config::file_source() {
        Some(path) => println!("# Source: {}", path.display()),
        None => println!("# Source: defaults (no config file)"),
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to write prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use clap::CommandFactory;

    fn path(
        domain: Option<&str>,
        cluster: Option<&str>,
        standard: Option<&str>,
        sub: Option<&str>,
    ) -> PathArgs {
        PathArgs {
            domain: domain.map(String::from),
            cluster: cluster.map(String::from),
            standard: standard.map(String::from),
            sub: sub.map(String::from),
            collapsed: false,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_global_flags() {
        let cli = Cli::try_parse_from([
            "standards-browser",
            "show",
            "--grade",
            "1",
            "--domain",
            "NBT",
            "--data",
            "catalog.json",
        ])
        .unwrap();

        assert_eq!(cli.grade.as_deref(), Some("1"));
        assert_eq!(cli.data.as_deref(), Some("catalog.json"));
        assert!(matches!(
            cli.command,
            Some(Commands::Show(ref p)) if p.domain.as_deref() == Some("NBT")
        ));
    }

    #[test]
    fn test_overrides_win_and_subcommands_are_headless() {
        let cli = Cli::try_parse_from(["standards-browser", "--grade", "1", "grades"]).unwrap();
        let config = cli.apply_overrides(Config::default());
        assert_eq!(config.initial_grade, "1");
        assert!(!config.enable_tui);

        let cli = Cli::try_parse_from(["standards-browser"]).unwrap();
        assert!(cli.apply_overrides(Config::default()).enable_tui);
    }

    #[test]
    fn test_cluster_key_is_scoped_to_domain() {
        let actions = path(Some("CC"), Some("A"), None, None).actions("K").unwrap();
        assert_eq!(actions[2], Action::ToggleCluster(ClusterId::new("CC", "A")));

        let actions = path(None, Some("CC.B"), None, None).actions("K").unwrap();
        assert_eq!(actions[1], Action::ToggleCluster(ClusterId::new("CC", "B")));

        assert!(path(None, Some("A"), None, None).actions("K").is_err());
    }

    #[test]
    fn test_show_grade_and_domain() {
        let catalog = fixtures::sample();
        let state = walk(&catalog, "K", &path(Some("CC"), None, None, None)).unwrap();
        let out = render_show(&state, &catalog);

        assert!(out.starts_with("Kindergarten › Counting & Cardinality\n\nCounting and Cardinality\nK.CC\n"));
        assert!(out.contains("Clusters in this Domain:"));

        let catalog = fixtures::minimal();
        let state = walk(&catalog, "K", &path(Some("CC"), None, None, None)).unwrap();
        let out = render_show(&state, &catalog);
        assert!(!out.contains("Clusters in this Domain:"));
    }

    #[test]
    fn test_show_sub_standard() {
        let catalog = fixtures::sample();
        let state = walk(
            &catalog,
            "K",
            &path(Some("CC"), Some("A"), Some("K.CC.1"), Some("K.CC.1.a")),
        )
        .unwrap();
        let out = render_show(&state, &catalog);
        assert!(out.starts_with(
            "Kindergarten › Counting & Cardinality › Know number names and the count sequence › K.CC.1 › K.CC.1.a\n"
        ));
    }

    #[test]
    fn test_unresolved_step_fails() {
        let catalog = fixtures::sample();
        assert!(walk(&catalog, "K", &path(Some("NBT"), None, None, None)).is_err());
        assert!(walk(&catalog, "12", &PathArgs::default()).is_err());
    }

    #[test]
    fn test_tree_marks_selected_rows() {
        let catalog = fixtures::sample();
        let state = walk(&catalog, "K", &path(Some("CC"), None, None, None)).unwrap();
        let out = render_tree(&state, &catalog, 25);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "▼ Counting & Cardinality *");
        assert!(lines[1].starts_with("  ▶ "));
        assert_eq!(lines[3], "▶ Operations & Algebra");
    }

    #[test]
    fn test_collapsed_path_selects_without_opening() {
        let catalog = fixtures::sample();
        let collapsed = PathArgs {
            collapsed: true,
            ..path(Some("CC"), Some("A"), Some("K.CC.1"), None)
        };

        let actions = collapsed.actions("K").unwrap();
        assert_eq!(actions[1], Action::SelectDomain("CC".into()));
        assert_eq!(actions[2], Action::SelectCluster(ClusterId::new("CC", "A")));
        assert_eq!(actions[3], Action::SelectStandard("K.CC.1".into()));

        let state = walk(&catalog, "K", &collapsed).unwrap();
        assert_eq!(state.standard.as_deref(), Some("K.CC.1"));
        assert_eq!(state.expanded_domain, None);
        assert_eq!(state.expanded_standard, None);

        let out = render_tree(&state, &catalog, 25);
        assert_eq!(out, "▶ Counting & Cardinality *\n▶ Operations & Algebra\n");

        // The preview follows the selection all the same
        assert!(render_show(&state, &catalog).starts_with(
            "Kindergarten › Counting & Cardinality › Know number names and the count sequence › K.CC.1\n"
        ));
    }

    #[test]
    fn test_parse_collapsed_flag() {
        let cli = Cli::try_parse_from(["standards-browser", "tree", "--domain", "CC", "--collapsed"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Tree(ref p)) if p.collapsed));
    }

    #[test]
    fn test_tree_without_grade_prints_message() {
        let catalog = fixtures::sample();
        let out = render_tree(&Selection::default(), &catalog, 25);
        assert_eq!(out, format!("{}\n", nav::NO_GRADE_MESSAGE));
    }

    #[test]
    fn test_grades_listing() {
        let out = render_grades(&fixtures::sample());
        assert_eq!(
            out,
            "K  Kindergarten (2 domains)\n1  Grade 1 (1 domain)\n"
        );
    }
}
