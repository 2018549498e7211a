mod commands;
mod input;
mod kind;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use kind::ModelKind;

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "VICEBANK_LOG";

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Vice bank record toolkit.
#[derive(Parser)]
#[command(name = "vicebank", version, about = "Validate and inspect vice bank records")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record, or an array of records, against a model shape
    Validate {
        /// Model the records should match
        #[arg(long, value_enum)]
        kind: ModelKind,
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Print the tokens earned or spent by transaction records
    Tokens {
        /// Transaction model the records should match
        #[arg(long, value_enum)]
        kind: ModelKind,
        /// Path to the JSON file
        file: PathBuf,
    },

    /// Re-issue a record under a new identifier
    Reid {
        /// Model the record should match
        #[arg(long, value_enum)]
        kind: ModelKind,
        /// Identifier for the new record
        #[arg(long)]
        id: String,
        /// Path to the JSON file
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { kind, file } => {
            commands::validate::cmd_validate(kind, &file, cli.output, cli.quiet);
        }
        Commands::Tokens { kind, file } => {
            commands::tokens::cmd_tokens(kind, &file, cli.output, cli.quiet);
        }
        Commands::Reid { kind, id, file } => {
            commands::reid::cmd_reid(kind, &id, &file, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
