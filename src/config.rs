//! Bridge configuration parameters
//!
//! Every value here is compiled in.  The struct is serde-enabled so a
//! future provisioning path can load it from disk, but the binary only
//! ever uses [`BridgeConfig::default()`].

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::ports::StoreKey;

/// Default sensor device.
#[cfg(target_os = "windows")]
pub const DEFAULT_SERIAL_PORT: &str = "COM7";
/// Default sensor device.
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_SERIAL_PORT: &str = "/dev/ttyACM0";

/// Baud rate the sensor firmware talks at.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Namespace in the remote JSON store that holds the four parking keys.
pub const DEFAULT_STORE_BASE_URL: &str =
    "https://proyecto-6c537-default-rtdb.firebaseio.com/parking";

/// Core bridge configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    // --- Serial ---
    /// Device name of the sensor's serial port
    pub serial_port: String,
    /// Serial baud rate
    pub baud_rate: u32,
    /// How long one read may block before the loop re-checks its exit condition (ms)
    pub read_timeout_ms: u64,

    // --- Remote store ---
    /// Base URL of the parking namespace, without trailing `.json`
    pub store_base_url: String,

    // --- Timing ---
    /// Pause after a failed iteration (ms)
    pub error_pause_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            serial_port: DEFAULT_SERIAL_PORT.to_owned(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout_ms: 1000,

            store_base_url: DEFAULT_STORE_BASE_URL.to_owned(),

            error_pause_ms: 1000,
        }
    }
}

impl BridgeConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial_port.trim().is_empty() {
            return Err(ConfigError::Invalid("serial_port must not be empty"));
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::Invalid("baud_rate must be non-zero"));
        }
        if self.read_timeout_ms == 0 {
            return Err(ConfigError::Invalid("read_timeout_ms must be non-zero"));
        }
        let url = self.store_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "store_base_url must start with http:// or https://",
            ));
        }
        Ok(())
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn error_pause(&self) -> Duration {
        Duration::from_millis(self.error_pause_ms)
    }

    /// REST endpoint for `key`: `{base}/{key}.json`.
    pub fn store_url(&self, key: StoreKey) -> String {
        format!(
            "{}/{}.json",
            self.store_base_url.trim_end_matches('/'),
            key.as_str()
        )
    }
}

/// Configuration rejected by [`BridgeConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation; the message names the field.
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
