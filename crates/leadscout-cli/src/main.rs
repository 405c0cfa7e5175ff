//! Leadscout command line interface.

mod analyze;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "leadscout-cli")]
#[command(about = "Lead scoring and classification command line interface")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Score a batch of profile records and print the ranked leads
    Analyze {
        /// Path to a JSON array of profile records
        #[arg(long)]
        input: PathBuf,

        /// Path to the scoring configuration
        #[arg(long, env = "LEADSCOUT_CONFIG", default_value = "./config/scoring.yaml")]
        config: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Keep only the top N leads after ranking
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Load and validate a scoring configuration
    Validate {
        /// Path to the scoring configuration
        #[arg(long, env = "LEADSCOUT_CONFIG", default_value = "./config/scoring.yaml")]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Column-projected text table driven by `output_columns`
    Table,
    /// Full lead records as a JSON array
    Json,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            config,
            format,
            limit,
        } => analyze::run_analyze(&input, &config, format, limit),
        Commands::Validate { config } => validate::run_validate(&config),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn parses_analyze_with_defaults() {
        let cli =
            Cli::try_parse_from(["leadscout-cli", "analyze", "--input", "profiles.json"]).unwrap();
        match cli.command {
            Commands::Analyze {
                input,
                config,
                format,
                limit,
            } => {
                assert_eq!(input.to_str(), Some("profiles.json"));
                assert_eq!(config.to_str(), Some("./config/scoring.yaml"));
                assert_eq!(format, OutputFormat::Table);
                assert!(limit.is_none());
            }
            Commands::Validate { .. } => panic!("expected analyze command"),
        }
    }

    #[test]
    fn parses_analyze_with_json_format_and_limit() {
        let cli = Cli::try_parse_from([
            "leadscout-cli",
            "analyze",
            "--input",
            "profiles.json",
            "--format",
            "json",
            "--limit",
            "5",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Analyze {
                format: OutputFormat::Json,
                limit: Some(5),
                ..
            }
        ));
    }

    #[test]
    fn parses_validate_with_config_path() {
        let cli = Cli::try_parse_from([
            "leadscout-cli",
            "validate",
            "--config",
            "custom/scoring.yaml",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Validate { config } if config.to_str() == Some("custom/scoring.yaml")
        ));
    }

    #[test]
    fn analyze_requires_input() {
        assert!(Cli::try_parse_from(["leadscout-cli", "analyze"]).is_err());
    }
}
