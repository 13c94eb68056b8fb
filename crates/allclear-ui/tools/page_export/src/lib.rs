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
#![allow(clippy::multiple_crate_versions)]
//! Render the All Clear Gear style guide and its design tokens natively.
//!
//! # Design
//! - Renders one artifact per run: the page HTML, palette custom properties, or token JSON.
//! - Writes to stdout unless an output path is configured; parent directories are created.
//! - `check` mode re-renders and compares SHA-256 digests against the file on disk, so a
//!   committed snapshot can be verified in CI without rewriting it.
//!
//! Failure modes are IO errors, token serialization errors, a missing snapshot, or a
//! snapshot that no longer matches the render.

pub mod config;
pub mod error;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::info;

pub use config::{ExportConfig, ExportFormat};
pub use error::ExportError;

/// Result of a successful export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Artifact streamed to stdout.
    Printed {
        /// Number of bytes written.
        bytes: usize,
    },
    /// Artifact written to a file.
    Written {
        /// Destination path.
        path: PathBuf,
        /// SHA-256 of the written bytes.
        digest: String,
    },
    /// Snapshot on disk matches a fresh render.
    Verified {
        /// Snapshot path.
        path: PathBuf,
        /// SHA-256 shared by the snapshot and the render.
        digest: String,
    },
}

/// Render the requested artifact.
///
/// # Errors
/// Returns [`ExportError::Serialize`] if the token JSON cannot be produced.
pub fn render_artifact(format: ExportFormat) -> Result<String, ExportError> {
    Ok(match format {
        ExportFormat::Html => allclear_ui::render_page(),
        ExportFormat::Css => allclear_ui::tokens::css_custom_properties(),
        ExportFormat::Json => {
            let mut json = allclear_ui::tokens::tokens_json()?;
            json.push('\n');
            json
        }
    })
}

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Execute an export run, writing to `stdout` when no output path is configured.
///
/// # Errors
/// Returns an error if the configuration is invalid, the artifact cannot be rendered
/// or written, or a checked snapshot is missing or stale.
pub fn run<W: Write>(config: &ExportConfig, stdout: &mut W) -> Result<ExportOutcome, ExportError> {
    config.validate()?;
    let artifact = render_artifact(config.format)?;
    match (&config.output, config.check) {
        (Some(path), true) => verify_snapshot(path, &artifact),
        (Some(path), false) => write_artifact(path, &artifact),
        (None, _) => {
            stdout
                .write_all(artifact.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| ExportError::Stdout { source })?;
            Ok(ExportOutcome::Printed {
                bytes: artifact.len(),
            })
        }
    }
}

fn write_artifact(path: &Path, artifact: &str) -> Result<ExportOutcome, ExportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, artifact).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = sha256_hex(artifact.as_bytes());
    info!(
        path = %path.display(),
        sha256 = %digest,
        bytes = artifact.len(),
        "wrote style guide artifact"
    );
    Ok(ExportOutcome::Written {
        path: path.to_path_buf(),
        digest,
    })
}

fn verify_snapshot(path: &Path, artifact: &str) -> Result<ExportOutcome, ExportError> {
    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ExportError::MissingSnapshot {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ExportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let expected = sha256_hex(artifact.as_bytes());
    let actual = sha256_hex(&existing);
    if expected != actual {
        return Err(ExportError::Drift {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    info!(path = %path.display(), sha256 = %expected, "style guide snapshot is current");
    Ok(ExportOutcome::Verified {
        path: path.to_path_buf(),
        digest: expected,
    })
}
