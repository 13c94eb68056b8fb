#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CLI entrypoint for the style guide export tool.
//!
//! # Design
//! Parses flags (with environment fallbacks), installs logging on stderr, and
//! delegates to the library implementation, surfacing errors via `anyhow`.

use std::io;
use std::path::PathBuf;

use allclear_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use anyhow::{Context, Result};
use clap::Parser;
use page_export::{ExportConfig, ExportFormat};

/// Render the All Clear Gear style guide.
#[derive(Debug, Parser)]
#[command(name = "page_export", version, about = "Render the All Clear Gear style guide")]
struct Cli {
    /// Artifact to render.
    #[arg(long, value_enum, default_value_t = ExportFormat::Html, env = "ALLCLEAR_EXPORT_FORMAT")]
    format: ExportFormat,
    /// Write to this file instead of stdout.
    #[arg(long, env = "ALLCLEAR_EXPORT_OUT")]
    out: Option<PathBuf>,
    /// Verify the file at `--out` matches a fresh render instead of writing it.
    #[arg(long)]
    check: bool,
    /// Log level used when `RUST_LOG` is unset.
    #[arg(long, env = "ALLCLEAR_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
    /// Log output format (`pretty` or `json`).
    #[arg(long, env = "ALLCLEAR_LOG_FORMAT")]
    log_format: Option<String>,
}

impl Cli {
    fn export_config(&self) -> ExportConfig {
        ExportConfig {
            format: self.format,
            output: self.out.clone(),
            check: self.check,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli
        .log_format
        .as_deref()
        .map(str::parse::<LogFormat>)
        .transpose()
        .context("invalid log format")?
        .unwrap_or_else(LogFormat::infer);
    init_logging(&LoggingConfig {
        level: &cli.log_level,
        format,
    })
    .context("failed to install logging")?;

    let mut stdout = io::stdout().lock();
    let outcome = page_export::run(&cli.export_config(), &mut stdout)
        .with_context(|| format!("style guide export failed ({})", cli.format))?;
    tracing::debug!(?outcome, "export finished");
    Ok(())
}
