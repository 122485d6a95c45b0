//! Integration tests for the catch → log → pause → continue error path.

use std::time::Duration;

use parkbridge::adapters::memory_store::MemoryStore;
use parkbridge::app::ports::{SerialError, StoreKey};
use parkbridge::app::service::OccupancyController;
use parkbridge::config::BridgeConfig;

use crate::mock_io::{FlakyStore, RecordingClock, RecordingSink, ScriptedSource};

fn lot(total_spots: u64) -> MemoryStore {
    MemoryStore::new().with(StoreKey::TotalSpots, total_spots)
}

#[test]
fn store_failure_pauses_and_loop_continues() {
    // Call 1 is the first GET total_spots; it fails.
    let store = FlakyStore::new(lot(5)).failing_on(1);
    let mut c = OccupancyController::new(
        ScriptedSource::lines(&["1", "1"]),
        store,
        RecordingSink::new(),
        RecordingClock::new(),
        &BridgeConfig::default(),
    );

    let stats = c.run_while(|s| s.iterations < 2);

    assert_eq!(stats.errors, 1);
    assert_eq!(stats.entries_accepted, 1, "second event still processed");
    assert_eq!(c.clock().sleeps, [Duration::from_secs(1)]);
    assert_eq!(c.sink().errors(), ["store: store transport error: connection reset"]);
    assert_eq!(c.store().inner.value(StoreKey::CurrentOccupancy), Some(1));
}

#[test]
fn failure_after_occupancy_write_is_not_rolled_back() {
    // Per accepted entry: 1 GET total, 2 GET occupancy, 3 SET occupancy,
    // 4 GET entries, 5 SET entries.  Fail the counter write.
    let store = FlakyStore::new(lot(5)).failing_on(5);
    let mut c = OccupancyController::new(
        ScriptedSource::lines(&["1"]),
        store,
        RecordingSink::new(),
        RecordingClock::new(),
        &BridgeConfig::default(),
    );

    assert!(c.step().is_err());
    assert_eq!(c.store().inner.value(StoreKey::CurrentOccupancy), Some(1));
    assert_eq!(c.store().inner.value(StoreKey::Entries), None);
    assert_eq!(c.store().calls(), 5);
}

#[test]
fn serial_errors_are_survived() {
    let source = ScriptedSource::lines(&[])
        .then_error(SerialError::Io("framing error".into()))
        .then_error(SerialError::Disconnected)
        .then_line("1");
    let mut c = OccupancyController::new(
        source,
        lot(1),
        RecordingSink::new(),
        RecordingClock::new(),
        &BridgeConfig::default(),
    );

    let stats = c.run_while(|s| s.iterations < 3);

    assert_eq!(stats.errors, 2);
    assert_eq!(stats.entries_accepted, 1);
    assert_eq!(c.clock().sleeps.len(), 2);
    assert_eq!(
        c.sink().errors(),
        [
            "serial: serial I/O error: framing error",
            "serial: serial device disconnected"
        ]
    );
}

#[test]
fn error_pause_comes_from_config() {
    let config = BridgeConfig {
        error_pause_ms: 250,
        ..Default::default()
    };
    let mut c = OccupancyController::new(
        ScriptedSource::lines(&[]).then_error(SerialError::Disconnected),
        lot(1),
        RecordingSink::new(),
        RecordingClock::new(),
        &config,
    );
    c.run_while(|s| s.iterations < 1);
    assert_eq!(c.clock().sleeps, [Duration::from_millis(250)]);
}

#[test]
fn errors_do_not_grow_the_pause() {
    let source = (0..5).fold(ScriptedSource::lines(&[]), |s, _| {
        s.then_error(SerialError::Disconnected)
    });
    let mut c = OccupancyController::new(
        source,
        lot(1),
        RecordingSink::new(),
        RecordingClock::new(),
        &BridgeConfig::default(),
    );
    let stats = c.run_while(|s| s.iterations < 5);
    assert_eq!(stats.errors, 5);
    assert!(c.clock().sleeps.iter().all(|d| *d == Duration::from_secs(1)));
}
