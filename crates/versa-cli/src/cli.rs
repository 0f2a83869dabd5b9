//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Versa - Learn conjunctive concepts from labelled examples.
#[derive(Debug, Parser)]
#[command(name = "versa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERSA_CONFIG")]
    pub config: Option<PathBuf>,

    /// How to expand the boundaries into hypotheses
    #[arg(short, long, value_enum, global = true)]
    pub materialization: Option<MaterializationArg>,

    /// Upper bound on the number of materialized hypotheses
    #[arg(long, global = true)]
    pub max_hypotheses: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare results)
    Quiet,
}

/// Materialization strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum MaterializationArg {
    /// Boundaries plus single-position hybrids
    Hybrid,
    /// Every hypothesis between the boundaries
    Exact,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train on a dataset and show the version space boundaries
    Train(TrainArgs),

    /// Predict the label of one instance
    Predict(PredictArgs),

    /// Score the learner on its own training data
    Evaluate(EvaluateArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the train command.
#[derive(Debug, Parser)]
pub struct TrainArgs {
    /// JSON dataset; the last column is the label
    pub dataset: PathBuf,

    /// Also list every materialized hypothesis
    #[arg(long)]
    pub hypotheses: bool,
}

/// Arguments for the predict command.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// JSON dataset to train on
    pub dataset: PathBuf,

    /// One value per attribute in header order; `?` matches anything
    #[arg(required = true, num_args = 1..)]
    pub values: Vec<String>,
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// JSON dataset to train and score on
    pub dataset: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<MaterializationArg> for crate::config::MaterializationMode {
    fn from(arg: MaterializationArg) -> Self {
        match arg {
            MaterializationArg::Hybrid => crate::config::MaterializationMode::Hybrid,
            MaterializationArg::Exact => crate::config::MaterializationMode::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_command() {
        let cli = Cli::parse_from(["versa", "train", "data.json"]);
        match cli.command {
            Command::Train(args) => {
                assert_eq!(args.dataset, PathBuf::from("data.json"));
                assert!(!args.hypotheses);
            }
            _ => panic!("Expected Train command"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_predict_command() {
        let cli = Cli::parse_from(["versa", "-vv", "predict", "data.json", "Sunny", "?", "Warm"]);
        match cli.command {
            Command::Predict(args) => assert_eq!(args.values, vec!["Sunny", "?", "Warm"]),
            _ => panic!("Expected Predict command"),
        }
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_predict_requires_values() {
        assert!(Cli::try_parse_from(["versa", "predict", "data.json"]).is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "versa",
            "evaluate",
            "data.json",
            "--format",
            "json",
            "--materialization",
            "exact",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.materialization, Some(MaterializationArg::Exact)));
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["versa", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }
}
