//! cscant - list the tokens of a C-family source file.
//!
//! This is the main entry point for the cscant CLI application. It reads a
//! source file (or standard input, or the built-in demo program), runs it
//! through the lexer and prints the resulting tokens.

mod config;
mod error;
mod output;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{CscantError, Result};
use output::{render, OutputFormat, RenderOptions};

/// Sample program tokenized by `--demo`.
const DEMO_SOURCE: &str = r#"int main() {
            int x = 42;
            if (x > 0) {
                std::cout << "Hello, World!" << std::endl;
            }
            return 0;
        }
    "#;

/// cscant - list the tokens of a C-family source file
#[derive(Parser, Debug)]
#[command(name = "cscant")]
#[command(author = "cscan Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List the tokens of a C-family source file", long_about = None)]
struct Cli {
    /// Source file to tokenize (`-` or omitted reads standard input)
    #[arg(conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Tokenize the built-in sample program
    #[arg(long)]
    demo: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Don't print the banner above text output
    #[arg(long)]
    no_header: bool,

    /// Don't print the trailing end-of-file token
    #[arg(long)]
    skip_eof: bool,

    /// Enable verbose output
    #[arg(short, long, env = "CSCANT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CSCANT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "CSCANT_NO_COLOR")]
    no_color: bool,
}

/// Main entry point for the cscant CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// and prints the token listing. Errors are reported on stderr with their
/// display message and a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        },
    }
}

fn start(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    run(cli, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries only the token listing. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CscantError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Read the source selected on the command line.
///
/// Invalid UTF-8 is replaced rather than rejected; the lexer turns the
/// replacement characters into unknown tokens.
fn read_source(cli: &Cli) -> Result<String> {
    if cli.demo {
        debug!("using built-in demo program");
        return Ok(DEMO_SOURCE.to_string());
    }

    let bytes = match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            debug!(path = %path.display(), "reading source file");
            std::fs::read(path).map_err(|source| CscantError::Input {
                path: path.to_path_buf(),
                source,
            })?
        },
        _ => {
            debug!("reading source from stdin");
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            bytes
        },
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Merge command-line flags over the configured output settings.
fn render_options(cli: &Cli, config: &Config) -> RenderOptions {
    let mut options = RenderOptions::from(&config.output);
    if let Some(format) = cli.format {
        options.format = format;
    }
    if cli.no_header {
        options.header = false;
    }
    if cli.skip_eof {
        options.include_eof = false;
    }
    options
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let source = read_source(cli)?;
    let tokens = cscan_lex::tokenize(&source);
    debug!(bytes = source.len(), tokens = tokens.len(), "lexing finished");

    let options = render_options(cli, config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&tokens, &options, &mut out)
}
