//! Occupancy controller — the hexagonal core.
//!
//! [`OccupancyController`] owns the injected ports and runs the bridge
//! loop.  It holds no parking state of its own: capacity and occupancy
//! are re-read from the remote store on every event.
//!
//! ```text
//!  EventSource ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │   OccupancyController     │
//!  RemoteStore ◀──▶│  decode · admit · persist │ ──▶ Clock (error pause)
//!                  └──────────────────────────┘
//! ```

use core::time::Duration;

use log::{debug, info};

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::events::Event;
use crate::occupancy::{Rejection, admit};

use super::events::{AppEvent, LoopStats};
use super::ports::{Clock, EventSink, EventSource, RemoteStore, StoreKey, Update};

/// Outcome of a single successful iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The read timed out without a complete line.
    Idle,
    /// A line arrived but was not a sensor code.
    Ignored(String),
    /// The event was applied.
    Accepted {
        event: Event,
        occupancy: u64,
        total_spots: u64,
    },
    /// The event was refused by the capacity rule.
    Rejected {
        event: Event,
        reason: Rejection,
        occupancy: u64,
        total_spots: u64,
    },
}

/// Counter incremented for each accepted event of a kind.
pub const fn counter_for(event: Event) -> StoreKey {
    match event {
        Event::Entry => StoreKey::Entries,
        Event::Exit => StoreKey::Exits,
    }
}

// ───────────────────────────────────────────────────────────────
// OccupancyController
// ───────────────────────────────────────────────────────────────

/// Bridges sensor events to the remote occupancy counters.
pub struct OccupancyController<R, S, E, C> {
    source: R,
    store: S,
    sink: E,
    clock: C,
    error_pause: Duration,
    port: String,
    store_url: String,
    stats: LoopStats,
}

impl<R, S, E, C> OccupancyController<R, S, E, C>
where
    R: EventSource,
    S: RemoteStore,
    E: EventSink,
    C: Clock,
{
    pub fn new(source: R, store: S, sink: E, clock: C, config: &BridgeConfig) -> Self {
        Self {
            source,
            store,
            sink,
            clock,
            error_pause: config.error_pause(),
            port: config.serial_port.clone(),
            store_url: config.store_base_url.clone(),
            stats: LoopStats::default(),
        }
    }

    // ── Per-iteration logic ───────────────────────────────────

    /// Run exactly one iteration: read → decode → admit → persist.
    ///
    /// Never sleeps.  Any port failure is returned as-is; the store may
    /// be left half-updated (occupancy written, counter not) since there
    /// is no transaction to roll back.
    pub fn step(&mut self) -> Result<Step> {
        self.stats.iterations += 1;

        let Some(line) = self.source.read_line()? else {
            self.stats.idle_reads += 1;
            return Ok(Step::Idle);
        };

        let Some(event) = Event::from_code(&line) else {
            debug!("Ignoring sensor line {:?}", line);
            self.stats.ignored_lines += 1;
            return Ok(Step::Ignored(line));
        };

        self.sink.emit(&AppEvent::Detected(event));

        let total_spots = self.store.get(StoreKey::TotalSpots)?;
        let update = self.store.update(StoreKey::CurrentOccupancy, |occupancy| {
            admit(event, occupancy, total_spots).ok()
        })?;

        match update {
            Update::Applied { current, .. } => {
                self.store.increment(counter_for(event))?;
                match event {
                    Event::Entry => self.stats.entries_accepted += 1,
                    Event::Exit => self.stats.exits_accepted += 1,
                }
                self.sink.emit(&AppEvent::Accepted {
                    event,
                    occupancy: current,
                    total_spots,
                });
                Ok(Step::Accepted {
                    event,
                    occupancy: current,
                    total_spots,
                })
            }
            Update::Unchanged(occupancy) => {
                let reason = Rejection::of(event);
                self.stats.rejected += 1;
                self.sink.emit(&AppEvent::Rejected {
                    event,
                    reason,
                    occupancy,
                    total_spots,
                });
                Ok(Step::Rejected {
                    event,
                    reason,
                    occupancy,
                    total_spots,
                })
            }
        }
    }

    // ── Run loop ──────────────────────────────────────────────

    /// Iterate while `keep_going` returns `true`.
    ///
    /// The predicate sees the stats accumulated so far and is checked
    /// before every iteration.  A failed iteration is reported, followed
    /// by the configured pause, and the loop resumes.  Errors are never
    /// fatal and never retried within the same iteration.
    pub fn run_while<P>(&mut self, mut keep_going: P) -> LoopStats
    where
        P: FnMut(&LoopStats) -> bool,
    {
        self.sink.emit(&AppEvent::Started {
            port: self.port.clone(),
            store: self.store_url.clone(),
        });

        while keep_going(&self.stats) {
            if let Err(e) = self.step() {
                self.stats.errors += 1;
                self.sink.emit(&AppEvent::Error(e.to_string()));
                self.clock.sleep(self.error_pause);
            }
        }

        info!("Run loop finished after {} iterations", self.stats.iterations);
        self.sink.emit(&AppEvent::Stopped(self.stats));
        self.stats
    }

    /// Production loop: runs until the process is killed.
    pub fn run_forever(&mut self) {
        self.run_while(|_| true);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Counters accumulated since construction.
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
