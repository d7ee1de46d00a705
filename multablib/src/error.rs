//! Error types for multablib

use std::path::PathBuf;
use thiserror::Error;

use crate::kind::NumericKind;

/// Errors that can occur while loading configuration and coercing values.
///
/// Range validation failures are deliberately absent: an unusable range is an
/// ordinary `false` from `validate` plus a sink diagnostic, not an error
/// value.
#[derive(Error, Debug)]
pub enum MultabError {
    /// Configuration file does not exist
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Configuration file exists but could not be read
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A line in the configuration file is not a key-value pair
    #[error("invalid property on line {line}: '{text}'")]
    ConfigParse { line: usize, text: String },

    /// A required configuration key is absent
    #[error("missing config key: {0}")]
    MissingKey(String),

    /// A configuration value could not be parsed as the requested kind
    #[error("cannot parse {key}='{value}' as {kind}")]
    NumericParse {
        kind: NumericKind,
        key: String,
        value: String,
    },

    /// The requested numeric kind is not one of the known names
    #[error("number type is not supported: {0}")]
    UnsupportedKind(String),
}
