//! Config loading errors.
//!
//! Classification itself has no error type: `classify` is defined for every
//! string input and never fails. Errors only exist at the config boundary,
//! where user-supplied pattern tables are read and compiled.

use std::path::PathBuf;

/// Errors that can occur while loading or compiling a triage config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read triage config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse triage config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid priority vocabulary")]
    InvalidVocabulary(#[from] aho_corasick::BuildError),
}
