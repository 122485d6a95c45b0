//! Unified error type for the bridge.
//!
//! A single `Error` enum that every port error converts into, keeping the
//! control loop's error handling uniform: whatever fails, the loop logs
//! it, pauses and resumes.

use core::fmt;

use crate::app::ports::{SerialError, StoreError};
use crate::config::ConfigError;

/// Every fallible operation in the bridge funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The sensor link failed.
    Serial(SerialError),
    /// The remote store could not be read or written.
    Store(StoreError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Store(e) => write!(f, "store: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serial(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Bridge-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
