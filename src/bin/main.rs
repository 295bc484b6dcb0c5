use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sjavac::parser::Tokenizer;
use sjavac::Error;

#[derive(Parser)]
#[command(name = "sjavac")]
#[command(about = "Static verifier for the s-Java subset of Java")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify an s-Java file and print the verdict
    Check {
        /// Input .sjava file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Dump the token stream of an s-Java file
    Lex {
        /// Input .sjava file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show line numbers
        #[arg(short, long)]
        locations: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { input } => check_file(input),
        Commands::Lex { input, locations } => match lex_file(input, *locations) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Verdict protocol: `0` for a valid program, `1` plus a message for a
/// validation failure, `2` plus a message when the source is unreadable.
/// The process exit code mirrors the printed verdict.
fn check_file(input: &Path) -> ExitCode {
    match sjavac::verify_file(input) {
        Ok(()) => {
            println!("0");
            ExitCode::SUCCESS
        }
        Err(err @ Error::Validation { .. }) => {
            println!("1");
            println!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            println!("2");
            println!("{err}");
            ExitCode::from(2)
        }
    }
}

fn lex_file(input: &Path, locations: bool) -> Result<()> {
    let source = std::fs::read_to_string(input)?;
    let mut tokens = Tokenizer::new(&source);
    while let Some(token) = tokens.next_token() {
        if locations {
            println!("{:>4}: {}", tokens.line_number(), token);
        } else {
            println!("{token}");
        }
    }
    Ok(())
}
