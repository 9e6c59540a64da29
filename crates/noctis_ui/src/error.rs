//! # UI Error Types
//!
//! Everything the toolkit can refuse. Drawing and animation never fail; only
//! construction and configuration do.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while wiring up or configuring the overlay.
#[derive(Error, Debug)]
pub enum UiError {
    /// A required host capability (font, clock) was never supplied.
    #[error("missing capability: {0}")]
    MissingCapability(&'static str),

    /// A configuration value is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file is not valid TOML for the expected schema.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A color string is not `#RRGGBB`, `0xRRGGBB` or a decimal integer.
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),
}

/// Result type for UI setup operations.
pub type UiResult<T> = Result<T, UiError>;
