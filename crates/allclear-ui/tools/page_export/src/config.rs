//! Typed export configuration.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::ExportError;

/// Artifact produced by the export tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Rendered style guide page.
    #[default]
    Html,
    /// `:root` custom properties for the palette.
    Css,
    /// Palette and gradients as JSON.
    Json,
}

impl ExportFormat {
    /// Identifier used on the command line and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// What to render and where to put it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportConfig {
    /// Artifact to render.
    pub format: ExportFormat,
    /// Destination file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Compare `output` against a fresh render instead of writing it.
    pub check: bool,
}

impl ExportConfig {
    /// Reject combinations the tool cannot act on.
    ///
    /// # Errors
    /// Returns [`ExportError::CheckWithoutOutput`] when `check` is set without `output`.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.check && self.output.is_none() {
            return Err(ExportError::CheckWithoutOutput);
        }
        Ok(())
    }
}
