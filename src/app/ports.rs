//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ OccupancyController (domain)
//! ```
//!
//! Driven adapters (serial reader, remote store, console sink, clock)
//! implement these traits.  The
//! [`OccupancyController`](super::service::OccupancyController) consumes
//! them via generics, so the control loop never touches a device or a
//! socket directly.
//!
//! ## Consistency notes
//!
//! - **RemoteStore** is shared external state with no locking.  The
//!   provided `update` is a plain get-then-set and can lose updates when a
//!   second writer races it.  Backends with conditional writes should
//!   override `update`.
//! - All port errors are typed — callers must handle every variant explicitly.

use core::fmt;
use core::time::Duration;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Event source port (driven adapter: sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller pulls sensor lines through this.
pub trait EventSource {
    /// Read one decoded, whitespace-trimmed line.
    ///
    /// `Ok(None)` means no complete line arrived before the read timeout.
    fn read_line(&mut self) -> Result<Option<String>, SerialError>;
}

// ───────────────────────────────────────────────────────────────
// Remote store port (driven adapter: domain ↔ JSON store)
// ───────────────────────────────────────────────────────────────

/// The four values the bridge keeps in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Cumulative accepted entries.
    Entries,
    /// Cumulative accepted exits.
    Exits,
    /// Capacity ceiling, provisioned by an operator.
    TotalSpots,
    /// Live occupancy gauge.
    CurrentOccupancy,
}

impl StoreKey {
    pub const ALL: [Self; 4] = [
        Self::Entries,
        Self::Exits,
        Self::TotalSpots,
        Self::CurrentOccupancy,
    ];

    /// Path segment under the parking namespace.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entries => "entries",
            Self::Exits => "exits",
            Self::TotalSpots => "total_spots",
            Self::CurrentOccupancy => "current_occupancy",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a read-modify-write through [`RemoteStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The new value was written.
    Applied { previous: u64, current: u64 },
    /// The closure declined; nothing was written.
    Unchanged(u64),
}

/// Path-addressed counter storage.
///
/// Absent, `null` or malformed remote values read as `0`.
pub trait RemoteStore {
    /// Fetch the value at `key`, defaulting to `0`.
    fn get(&mut self, key: StoreKey) -> Result<u64, StoreError>;

    /// Overwrite the value at `key`.
    fn set(&mut self, key: StoreKey, value: u64) -> Result<(), StoreError>;

    /// Read `key`, pass it to `f`, and write back `f`'s result if it
    /// returned `Some`.
    ///
    /// The default is a non-atomic get followed by set.
    fn update<F>(&mut self, key: StoreKey, f: F) -> Result<Update, StoreError>
    where
        F: FnOnce(u64) -> Option<u64>,
    {
        let previous = self.get(key)?;
        match f(previous) {
            Some(current) => {
                self.set(key, current)?;
                Ok(Update::Applied { previous, current })
            }
            None => Ok(Update::Unchanged(previous)),
        }
    }

    /// Add one to the counter at `key` and return the new value.
    fn increment(&mut self, key: StoreKey) -> Result<u64, StoreError> {
        match self.update(key, |v| Some(v.saturating_add(1)))? {
            Update::Applied { current, .. } | Update::Unchanged(current) => Ok(current),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (console log, a test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain → wall time)
// ───────────────────────────────────────────────────────────────

/// Blocking pause used between failed iterations.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`EventSource`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialError {
    /// The device closed the stream (unplugged, EOF).
    Disconnected,
    /// Any other I/O failure on the serial link.
    Io(String),
}

/// Errors from [`RemoteStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Connection, DNS or TLS failure.
    Transport(String),
    /// The store answered with a non-success HTTP status.
    Status(u16),
    /// The response body was not JSON.
    Decode(String),
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "serial device disconnected"),
            Self::Io(msg) => write!(f, "serial I/O error: {}", msg),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "store transport error: {}", msg),
            Self::Status(code) => write!(f, "store returned HTTP {}", code),
            Self::Decode(msg) => write!(f, "store response not JSON: {}", msg),
        }
    }
}

impl std::error::Error for SerialError {}
impl std::error::Error for StoreError {}
