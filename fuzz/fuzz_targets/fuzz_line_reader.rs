//! Fuzz target: `SerialEventReader::read_line` + `Event::from_code`
//!
//! Drives arbitrary byte sequences through the sensor line reader and
//! asserts that it never panics, always terminates with `Disconnected`,
//! and only yields trimmed lines.
//!
//! cargo fuzz run fuzz_line_reader

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use parkbridge::adapters::serial::SerialEventReader;
use parkbridge::app::ports::{EventSource, SerialError};
use parkbridge::events::Event;

fuzz_target!(|data: &[u8]| {
    let mut reader = SerialEventReader::new(Cursor::new(data));

    // One read per newline, one for the tail, one for end of stream.
    let budget = data.iter().filter(|b| **b == b'\n').count() + 2;
    for _ in 0..budget {
        match reader.read_line() {
            Ok(Some(line)) => {
                assert_eq!(line.trim(), line, "lines must be trimmed");
                if let Some(event) = Event::from_code(&line) {
                    assert_eq!(line, event.code().to_string());
                }
            }
            Ok(None) => unreachable!("an in-memory cursor never times out"),
            Err(SerialError::Disconnected) => return,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    panic!("reader did not reach end of stream");
});
