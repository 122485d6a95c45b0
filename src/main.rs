//! Parking bridge — main entry point
//!
//! Hexagonal architecture around a single blocking loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SerialEventReader   HttpStore     LogEventSink   SystemClock  │
//! │  (EventSource)       (RemoteStore) (EventSink)    (Clock)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │          OccupancyController (pure logic)              │    │
//! │  │  decode · capacity rule · read-modify-write            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use log::info;

use parkbridge::adapters::http_store::HttpStore;
use parkbridge::adapters::log_sink::LogEventSink;
use parkbridge::adapters::serial::SerialEventReader;
use parkbridge::adapters::time::SystemClock;
use parkbridge::app::service::OccupancyController;
use parkbridge::config::BridgeConfig;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    // Info by default; RUST_LOG overrides.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("parkbridge v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compiled in) ────────────────────────
    let config = BridgeConfig::default();
    config.validate().context("built-in configuration")?;

    // ── 3. Construct adapters ─────────────────────────────────
    let reader = SerialEventReader::open(&config)
        .with_context(|| format!("opening sensor port {}", config.serial_port))?;
    let store = HttpStore::new(&config);

    // ── 4. Run until killed ───────────────────────────────────
    let mut controller =
        OccupancyController::new(reader, store, LogEventSink::new(), SystemClock::new(), &config);

    info!("System ready. Entering event loop.");
    controller.run_forever();
    Ok(())
}
