//! `jsonv` CLI — format, query and validate JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Re-emit JSON in canonical form (stdin → stdout)
//! echo '{"name":"pkg","tags":["a"]}' | jsonv fmt
//!
//! # Pretty-print from file to file
//! jsonv fmt --pretty -i package.json -o package.pretty.json
//!
//! # Look up a nested field by dotted path
//! jsonv get dependencies.com.example.core -i package.json
//!
//! # Validate, reporting the line and column of the first error
//! jsonv check -i package.json
//! ```
//!
//! Log output goes to stderr and is filtered with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonv_core::{parse, parse_or_default, Value};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsonv", version, about = "Format, query and validate JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and write it back out in canonical form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indent the output instead of using the canonical single-line form
        #[arg(long)]
        pretty: bool,
        /// Log parse errors and emit `null` instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Print the value at a dotted path (`null` when absent)
    Get {
        /// Dotted path of map keys, e.g. `author.name`
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Log parse errors and treat the document as `null` instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Check that the input parses
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt {
            input,
            output,
            pretty,
            lenient,
        } => {
            let text = read_input(input.as_deref())?;
            let value = load(&text, lenient)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&value).context("Failed to pretty-print JSON")?
            } else {
                value.to_text().context("Failed to serialize JSON")?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Get {
            path,
            input,
            lenient,
        } => {
            let text = read_input(input.as_deref())?;
            let value = load(&text, lenient)?;
            let found = value.get(&path);
            tracing::debug!(%path, kind = found.type_name(), "resolved path");
            let rendered = found.to_text().context("Failed to serialize JSON")?;
            println!("{}", rendered);
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            parse(&text).context("Invalid JSON")?;
            println!("ok");
        }
    }

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse strictly, or fall back to `null` with a logged warning.
fn load(text: &str, lenient: bool) -> Result<Value> {
    if lenient {
        Ok(parse_or_default(text))
    } else {
        parse(text).context("Failed to parse JSON")
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
