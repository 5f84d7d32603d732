//! feedtui - Entry Point

use clap::Parser;
use feedtui::model::{ColumnMode, FeedTab};
use std::path::PathBuf;
use tracing::info;

/// feedtui - terminal feed browser
#[derive(Parser, Debug)]
#[command(name = "feedtui")]
#[command(version)]
#[command(about = "TUI feed browser with viewport-driven video autoplay")]
pub struct Args {
    /// Path to a feed fixture JSON file (bundled fixture if not provided)
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Starting column mode
    #[arg(long)]
    pub columns: Option<ColumnMode>,

    /// Cards per synthesized feed page (must be positive)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub page_size: Option<usize>,

    /// Starting feed tab
    #[arg(long, default_value = "all")]
    pub tab: FeedTab,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            // Print the whole cause chain; the TUI owns stdout, so errors
            // must land on stderr after the terminal is restored.
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = feedtui::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = feedtui::config::merge_config(config_file)?;

        // 3. Apply environment variable overrides
        let with_env = feedtui::config::apply_env_overrides(merged)?;

        // 4. Apply CLI argument overrides
        feedtui::config::apply_cli_overrides(
            with_env,
            args.fixture.clone(),
            args.columns,
            args.page_size,
        )
    };

    // Initialize tracing with configured log file path. The TUI needs the
    // terminal to itself, so all diagnostics go to the file.
    feedtui::logging::init(&config.log_file_path)?;

    info!(config = ?config, tab = %args.tab, "configuration loaded and resolved");

    let repository = feedtui::repo::FeedRepository::load(
        config.fixture_path.as_deref(),
        config.cache_path.as_deref(),
    )?;

    feedtui::view::run_with_config(repository, &config, args.tab)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help should succeed (exits with code 0)
        let result = Args::try_parse_from(["feedtui", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["feedtui", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["feedtui"]);
        assert_eq!(args.fixture, None);
        assert_eq!(args.config, None);
        assert_eq!(args.columns, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.tab, FeedTab::All);
        assert!(!args.no_color);
    }

    #[test]
    fn test_fixture_path_flag() {
        let args = Args::parse_from(["feedtui", "--fixture", "custom_feed.json"]);
        assert_eq!(args.fixture, Some(PathBuf::from("custom_feed.json")));
    }

    #[test]
    fn test_config_path_flag() {
        let args = Args::parse_from(["feedtui", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_columns_single() {
        let args = Args::parse_from(["feedtui", "--columns", "single"]);
        assert_eq!(args.columns, Some(ColumnMode::Single));
    }

    #[test]
    fn test_columns_double() {
        let args = Args::parse_from(["feedtui", "--columns", "double"]);
        assert_eq!(args.columns, Some(ColumnMode::Double));
    }

    #[test]
    fn test_columns_invalid_rejects() {
        let result = Args::try_parse_from(["feedtui", "--columns", "triple"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_size_flag() {
        let args = Args::parse_from(["feedtui", "--page-size", "8"]);
        assert_eq!(args.page_size, Some(8));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["feedtui", "--page-size", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_tab_default_is_all() {
        let args = Args::parse_from(["feedtui"]);
        assert_eq!(args.tab, FeedTab::All);
    }

    #[test]
    fn test_tab_parses_case_insensitively() {
        let args = Args::parse_from(["feedtui", "--tab", "Videos"]);
        assert_eq!(args.tab, FeedTab::Videos);
    }

    #[test]
    fn test_tab_invalid_rejects() {
        let result = Args::try_parse_from(["feedtui", "--tab", "nonsense"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["feedtui", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "feedtui",
            "--fixture",
            "feed.json",
            "--columns",
            "single",
            "--page-size",
            "3",
            "--tab",
            "products",
            "--no-color",
        ]);
        assert_eq!(args.fixture, Some(PathBuf::from("feed.json")));
        assert_eq!(args.columns, Some(ColumnMode::Single));
        assert_eq!(args.page_size, Some(3));
        assert_eq!(args.tab, FeedTab::Products);
        assert!(args.no_color);
    }

    #[test]
    fn test_columns_flow_through_config_precedence_chain() {
        use feedtui::config::{apply_cli_overrides, merge_config, ConfigFile};

        // Simulate the precedence chain without touching process env:
        // Defaults → Config File → CLI Args
        let config_file = ConfigFile {
            page_size: Some(7),
            refresh_ms: None,
            countdown_secs: None,
            notice_secs: None,
            columns: Some(ColumnMode::Single),
            fixture_path: None,
            cache_path: None,
            log_file_path: None,
        };

        // Step 1: Merge with defaults
        let merged = merge_config(Some(config_file)).unwrap();
        assert_eq!(
            merged.columns,
            ColumnMode::Single,
            "Config file should override default columns"
        );
        assert_eq!(merged.page_size, 7);

        // Step 2: Apply CLI override
        let with_cli = apply_cli_overrides(merged, None, Some(ColumnMode::Double), Some(3));
        assert_eq!(
            with_cli.columns,
            ColumnMode::Double,
            "CLI columns should override all other sources"
        );
        assert_eq!(with_cli.page_size, 3);
    }

    #[test]
    fn test_page_size_default_is_five() {
        use feedtui::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.columns, ColumnMode::Double);
    }
}
