//! Error types for keycalc.
//!
//! The engine itself never fails; these cover the layers around it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while translating typed text into keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Character has no key binding.
    #[error("unknown key {0:?}")]
    UnknownKey(char),

    /// Key exists but is not part of the active keypad layout.
    #[error("key {0:?} is not on this keypad")]
    NotOnKeypad(String),
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors that can occur while copying to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard")]
    Access(#[source] arboard::Error),

    #[error("failed to copy to clipboard")]
    Copy(#[source] arboard::Error),
}
