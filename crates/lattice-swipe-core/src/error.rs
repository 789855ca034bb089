//! Error types for Lattice Swipe.
//!
//! The swipe state machine itself is total and never fails; errors only
//! arise at the edges where settings are read from or written to disk.

use thiserror::Error;

/// The main error type for Lattice Swipe operations.
#[derive(Error, Debug)]
pub enum SwipeError {
    /// Reading or writing a configuration file failed.
    #[error("configuration I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration parsed, but holds values no row can use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for Lattice Swipe operations.
pub type Result<T> = std::result::Result<T, SwipeError>;
