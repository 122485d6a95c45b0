//! End-to-end: raw sensor bytes → `SerialEventReader` → controller → store.

use std::io::Cursor;

use parkbridge::adapters::memory_store::MemoryStore;
use parkbridge::adapters::serial::SerialEventReader;
use parkbridge::app::ports::StoreKey;
use parkbridge::app::service::OccupancyController;
use parkbridge::config::BridgeConfig;

use crate::mock_io::{RecordingClock, RecordingSink};

#[test]
fn raw_byte_stream_drives_the_store() {
    let bytes: &[u8] = b"boot v1.2\r\n1\r\n1\r\n\xff2\r\n\r\n3\r\n1\r\n1\r\n";
    let store = MemoryStore::new().with(StoreKey::TotalSpots, 2);
    let mut c = OccupancyController::new(
        SerialEventReader::new(Cursor::new(bytes)),
        store,
        RecordingSink::new(),
        RecordingClock::new(),
        &BridgeConfig::default(),
    );

    // Eight lines, then one disconnect error at end of stream.
    let stats = c.run_while(|s| s.iterations < 9);

    assert_eq!(stats.ignored_lines, 3);
    assert_eq!(stats.entries_accepted, 3);
    assert_eq!(stats.exits_accepted, 1);
    assert_eq!(stats.rejected, 1, "last entry finds the lot full");
    assert_eq!(stats.errors, 1);

    assert_eq!(c.store().value(StoreKey::CurrentOccupancy), Some(2));
    assert_eq!(c.store().value(StoreKey::Entries), Some(3));
    assert_eq!(c.store().value(StoreKey::Exits), Some(1));
}
