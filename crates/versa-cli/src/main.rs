//! Versa CLI - Train and query version-space concept learners.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use versa_cli::commands;
use versa_cli::config::OutputFormat;
use versa_cli::{Cli, Command, Config, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> versa_cli::Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load(&path)?;

    config.apply_overrides(cli.materialization.map(Into::into), cli.max_hypotheses)?;

    let format: OutputFormat = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let materialize = config.materialize_config();
    match cli.command {
        Command::Train(args) => commands::execute_train(args, &materialize, &formatter)?,
        Command::Predict(args) => commands::execute_predict(args, &materialize, &formatter)?,
        Command::Evaluate(args) => commands::execute_evaluate(args, &materialize, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter)?,
    }

    Ok(())
}
