//! NanoDB Binary
//!
//! Runs the command loop over stdin (or a script file) and stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use nanodb::{Config, FieldPolicy, Repl};
use tracing_subscriber::{fmt, EnvFilter};

/// NanoDB
#[derive(Parser, Debug)]
#[command(name = "nanodb")]
#[command(about = "Line-oriented command interpreter for a toy row store")]
#[command(version)]
struct Args {
    /// Prompt printed before each line is read
    #[arg(short, long, default_value = nanodb::config::DEFAULT_PROMPT)]
    prompt: String,

    /// Policy for over-long text fields: preserve, truncate or reject
    #[arg(long, default_value = "preserve")]
    field_policy: FieldPolicy,

    /// Report ids that are not clean integers instead of converting them to a number
    #[arg(long)]
    strict_ids: bool,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr; stdout carries only prompts and responses
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("NanoDB v{}", nanodb::VERSION);

    let config = Config::builder()
        .prompt(args.prompt)
        .field_policy(args.field_policy)
        .strict_ids(args.strict_ids)
        .build();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => {
                tracing::info!("Reading commands from {}", path.display());
                Box::new(BufReader::new(file))
            }
            Err(e) => {
                tracing::error!("Failed to open {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut repl = Repl::new(reader, io::stdout().lock(), config);
    if let Err(e) = repl.run() {
        tracing::error!("Command loop failed: {}", e);
        std::process::exit(1);
    }
}
