//! Logging primitives shared by the All Clear Gear native tools.
//!
//! Rendering the style guide has no side effects, so only the binaries that
//! export it install a subscriber. Logs go to stderr so rendered artifacts can
//! be piped from stdout untouched.

pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
