//! Outbound application events.
//!
//! The [`OccupancyController`](super::service::OccupancyController) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them — print a console status
//! line, record them in a test, etc.

use crate::events::Event;
use crate::occupancy::Rejection;

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The run loop is starting (carries the endpoints it is bridging).
    Started { port: String, store: String },

    /// A recognised sensor code was read.
    Detected(Event),

    /// The event was applied and persisted.
    Accepted {
        event: Event,
        occupancy: u64,
        total_spots: u64,
    },

    /// The event would break the capacity bound and was ignored.
    Rejected {
        event: Event,
        reason: Rejection,
        occupancy: u64,
        total_spots: u64,
    },

    /// An iteration failed; the loop pauses and carries on.
    Error(String),

    /// The run loop returned.
    Stopped(LoopStats),
}

/// In-process counters for one `run_while` session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Iterations executed (including idle and failed ones).
    pub iterations: u64,
    pub entries_accepted: u64,
    pub exits_accepted: u64,
    /// Events ignored by the capacity rule.
    pub rejected: u64,
    /// Lines that were not a sensor code.
    pub ignored_lines: u64,
    /// Reads that timed out without a complete line.
    pub idle_reads: u64,
    /// Iterations that ended in an error.
    pub errors: u64,
}
