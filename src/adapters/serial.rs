//! Serial event reader.
//!
//! Implements [`EventSource`] on top of any [`BufRead`] byte stream.  In
//! production that stream is the sensor's serial port opened through the
//! `serialport` crate; tests drive it from an in-memory cursor.
//!
//! Lines are `\n`-terminated.  A line cut short by a read timeout stays
//! buffered and is completed by the next read, so a slow sensor never
//! loses a code.

use std::io::{self, BufRead, BufReader};

use log::info;
use serialport::SerialPort;

use crate::app::ports::{EventSource, SerialError};
use crate::config::BridgeConfig;
use crate::events::decode_line;

/// Line reader for the entry/exit sensor.
pub struct SerialEventReader<R> {
    inner: R,
    /// Bytes of the line currently being received.
    pending: Vec<u8>,
}

impl SerialEventReader<BufReader<Box<dyn SerialPort>>> {
    /// Open the sensor device for the lifetime of the process.
    pub fn open(config: &BridgeConfig) -> Result<Self, SerialError> {
        let port_name = device_path(&config.serial_port);
        let port = serialport::new(port_name.as_str(), config.baud_rate)
            .timeout(config.read_timeout())
            .flow_control(serialport::FlowControl::None)
            .open()
            .map_err(|e| SerialError::Io(format!("{}: {}", port_name, e)))?;

        info!(
            "Serial: opened {} at {} baud",
            port_name, config.baud_rate
        );
        Ok(Self::new(BufReader::new(port)))
    }
}

impl<R: BufRead> SerialEventReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: Vec::new(),
        }
    }

    /// Take the buffered line, decoded and trimmed.
    fn take_line(&mut self) -> String {
        let line = decode_line(&self.pending);
        self.pending.clear();
        line
    }
}

impl<R: BufRead> EventSource for SerialEventReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, SerialError> {
        match self.inner.read_until(b'\n', &mut self.pending) {
            Ok(0) if self.pending.is_empty() => Err(SerialError::Disconnected),
            // Either a full line or the unterminated tail before EOF.
            Ok(_) => Ok(Some(self.take_line())),
            Err(e) if is_timeout(&e) => Ok(None),
            Err(e) => Err(SerialError::Io(e.to_string())),
        }
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

/// On Windows, COM ports >= 10 need the `\\.\COMxx` form.
fn device_path(name: &str) -> String {
    if cfg!(target_os = "windows") && name.starts_with("COM") && !name.starts_with(r"\\") {
        format!(r"\\.\{}", name)
    } else {
        name.to_owned()
    }
}
