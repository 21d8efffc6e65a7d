//! Roster admin dashboard - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Roster - TUI admin dashboard for a user roster
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "TUI admin dashboard over a JSON user roster")]
pub struct Args {
    /// Path to a local roster JSON file (fetches from the API when absent)
    pub file: Option<PathBuf>,

    /// Roster API endpoint to fetch from
    #[arg(short, long)]
    pub url: Option<String>,

    /// Start with a search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Rows per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), roster::model::AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = roster::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = roster::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = roster::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        roster::config::apply_cli_overrides(
            with_env,
            args.url.clone(),
            args.page_size.map(|n| n as usize),
        )
    };

    // Initialize tracing with configured log file path
    roster::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    // Detect record source (file beats URL) and load the roster.
    // Load failures are logged and yield an empty dashboard.
    let source = roster::source::RecordSource::detect(args.file.clone(), config.api_url.clone());
    let records = source.load_or_empty();

    let mut state = roster::state::DashboardState::new(records, config.page_size);
    if let Some(query) = args.search {
        state.set_query(query);
    }

    roster::view::run_dashboard(state)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["roster", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["roster", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["roster"]);
        assert_eq!(args.file, None);
        assert_eq!(args.url, None);
        assert_eq!(args.search, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["roster", "members.json"]);
        assert_eq!(args.file, Some(PathBuf::from("members.json")));
    }

    #[test]
    fn test_url_flag() {
        let args = Args::parse_from(["roster", "--url", "https://example.com/members.json"]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/members.json"));
    }

    #[test]
    fn test_search_short_flag() {
        let args = Args::parse_from(["roster", "-s", "admin"]);
        assert_eq!(args.search, Some("admin".to_string()));
    }

    #[test]
    fn test_page_size_flag() {
        let args = Args::parse_from(["roster", "--page-size", "25"]);
        assert_eq!(args.page_size, Some(25));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["roster", "--page-size", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["roster", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "roster",
            "members.json",
            "-s",
            "admin",
            "--page-size",
            "5",
        ]);
        assert_eq!(args.file, Some(PathBuf::from("members.json")));
        assert_eq!(args.search, Some("admin".to_string()));
        assert_eq!(args.page_size, Some(5));
    }

    #[test]
    fn test_url_flows_through_config_precedence_chain() {
        use roster::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        // Simulate full precedence chain: Defaults → Config File → Env Vars → CLI Args
        let config_file = ConfigFile {
            api_url: Some("https://file.example.com/members.json".to_string()),
            page_size: None,
            log_file_path: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(
            merged.api_url, "https://file.example.com/members.json",
            "Config file should override default URL"
        );

        // Env override simulated as absent (ROSTER_API_URL not set here)
        let with_env = apply_env_overrides(merged);
        assert_eq!(with_env.api_url, "https://file.example.com/members.json");

        let with_cli = apply_cli_overrides(
            with_env,
            Some("https://cli.example.com/members.json".to_string()),
            None,
        );
        assert_eq!(
            with_cli.api_url, "https://cli.example.com/members.json",
            "CLI URL should override all other sources"
        );
    }

    #[test]
    fn test_default_page_size_is_ten() {
        use roster::config::ResolvedConfig;

        let config = ResolvedConfig::default();
        assert_eq!(config.page_size, 10);
    }
}
