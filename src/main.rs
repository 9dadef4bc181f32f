//! lispv command line: translate `<file>` into `./<file>.c`

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use lispv::{format_tokens, output_path_for, CompileOptions, Compiler};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lispv")]
#[command(version = lispv::VERSION)]
#[command(about = "Translate an S-expression assignment into C")]
struct Cli {
    /// Source file to translate
    input: PathBuf,

    /// Write here instead of ./<INPUT>.c
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print the scanned tokens to stdout
    #[arg(long, value_name = "FORMAT")]
    tokens: Option<TokenFormat>,

    /// Reject non-digit values and require the closing `)`
    #[arg(long)]
    strict: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum TokenFormat {
    /// `<"lexeme", KIND>` listing
    Text,
    /// JSON array
    Json,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let bytes = fs::read(&cli.input)
        .with_context(|| format!("Failed to open file {}", cli.input.display()))?;
    // Invalid UTF-8 becomes U+FFFD, which the scanner skips
    let source = String::from_utf8_lossy(&bytes);

    let compiler = Compiler::new(CompileOptions {
        strict: cli.strict,
        ..CompileOptions::default()
    });
    let result = compiler
        .compile(&source)
        .with_context(|| format!("Failed to translate {}", cli.input.display()))?;

    match cli.tokens {
        Some(TokenFormat::Text) => println!("{}", format_tokens(&result.tokens)),
        Some(TokenFormat::Json) => println!("{}", serde_json::to_string_pretty(&result.tokens)?),
        None => {}
    }

    let output_path = cli.output.unwrap_or_else(|| output_path_for(&cli.input));
    fs::write(&output_path, &result.output)
        .with_context(|| format!("Couldn't create output file {}", output_path.display()))?;

    tracing::info!(path = %output_path.display(), bytes = result.output.len(), "wrote output");
    println!("{}", output_path.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lispv: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
