//! Error types for the export tool.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the export tool.
#[derive(Debug, Error)]
pub enum ExportError {
    /// `--check` was requested without an output path to compare against.
    #[error("--check requires --out to name the snapshot to verify")]
    CheckWithoutOutput,
    /// Serializing the design tokens failed.
    #[error("failed to serialize design tokens")]
    Serialize {
        /// Underlying serde error.
        #[from]
        source: serde_json::Error,
    },
    /// A filesystem operation failed.
    #[error("io error at {}", .path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Writing the artifact to stdout failed.
    #[error("failed to write artifact to stdout")]
    Stdout {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The snapshot to verify does not exist.
    #[error("snapshot is missing: {}", .path.display())]
    MissingSnapshot {
        /// Expected snapshot path.
        path: PathBuf,
    },
    /// The snapshot on disk differs from a fresh render.
    #[error(
        "snapshot {} is out of date (expected sha256 {expected}, found {actual})",
        .path.display()
    )]
    Drift {
        /// Snapshot path.
        path: PathBuf,
        /// Digest of the fresh render.
        expected: String,
        /// Digest of the file on disk.
        actual: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_name_the_offending_path() {
        let drift = ExportError::Drift {
            path: PathBuf::from("docs/style-guide.html"),
            expected: "aa".to_string(),
            actual: "bb".to_string(),
        };
        assert_eq!(
            drift.to_string(),
            "snapshot docs/style-guide.html is out of date (expected sha256 aa, found bb)"
        );

        let io_failure = ExportError::Io {
            path: PathBuf::from("out"),
            source: io::Error::other("denied"),
        };
        assert_eq!(io_failure.to_string(), "io error at out");
        assert!(io_failure.source().is_some());
        assert!(ExportError::CheckWithoutOutput.source().is_none());
    }
}
