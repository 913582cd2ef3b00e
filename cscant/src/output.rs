//! Rendering of token lists.
//!
//! Text output is one `[TYPE] 'value' (line L, col C)` line per token,
//! optionally under a banner. JSON output is an array of token records.

use std::io::Write;

use clap::ValueEnum;
use cscan_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Banner printed above the text listing.
pub const HEADER_TITLE: &str = "Tokenization Result:";

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON array of token records
    Json,
}

/// Options controlling how tokens are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Print the banner before a text listing.
    pub header: bool,
    /// Include the trailing end-of-file token.
    pub include_eof: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            header: true,
            include_eof: true,
        }
    }
}

/// Writes `tokens` to `out` according to `options`.
pub fn render(tokens: &[Token], options: &RenderOptions, out: &mut impl Write) -> Result<()> {
    let tokens: Vec<&Token> = tokens
        .iter()
        .filter(|t| options.include_eof || !t.is_eof())
        .collect();

    match options.format {
        OutputFormat::Text => {
            if options.header {
                writeln!(out, "{}", HEADER_TITLE)?;
                writeln!(out, "{}", "=".repeat(20))?;
            }
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &tokens)?;
            writeln!(out)?;
        },
    }

    out.flush()?;
    Ok(())
}
