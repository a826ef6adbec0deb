use std::{path::PathBuf, process::ExitCode};

use clap::Parser as _;
use millis::{config::Config, logging};

use crate::ops::Operation;

mod ops;

/// Millisecond timestamp arithmetic from the command line.
#[derive(clap::Parser, Debug)]
#[command(name = "millis", version)]
struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Operation name, e.g. `floor`, `last_minute`, `is_same_day` or `roundtrip`
    operation: Operation,
    /// Timestamps in milliseconds, then an optional factor or count
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    operands: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.config.as_deref().map(Config::from_file).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            logging::init(env!("CARGO_CRATE_NAME"), false);
            tracing::error!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(env!("CARGO_CRATE_NAME"), config.log_json);
    tracing::debug!(?config, operation = %args.operation);

    match args.operation.eval(&args.operands, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(operation = %args.operation, "{err:#}");
            ExitCode::FAILURE
        }
    }
}
