//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one human-readable status line per
//! application event through the `log` facade (stderr via `env_logger` in
//! the binary).  A future dashboard or MQTT adapter would implement the
//! same trait.

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::events::Event;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { port, store } => {
                info!("START | sensor={} | store={}", port, store);
            }
            AppEvent::Detected(e) => {
                info!("{} detected", e);
            }
            AppEvent::Accepted {
                event,
                occupancy,
                total_spots,
            } => {
                let verb = match event {
                    Event::Entry => "entered",
                    Event::Exit => "exited",
                };
                info!(
                    "Car {} \u{2192} occupancy = {}/{}",
                    verb, occupancy, total_spots
                );
            }
            AppEvent::Rejected { event, reason, .. } => {
                warn!("{} ignored \u{2192} {}", event, reason);
            }
            AppEvent::Error(msg) => {
                error!("Error: {}", msg);
            }
            AppEvent::Stopped(s) => {
                info!(
                    "STOP | iterations={} | entries={} exits={} | rejected={} \
                     ignored={} idle={} | errors={}",
                    s.iterations,
                    s.entries_accepted,
                    s.exits_accepted,
                    s.rejected,
                    s.ignored_lines,
                    s.idle_reads,
                    s.errors,
                );
            }
        }
    }
}
