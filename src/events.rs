//! Sensor events.
//!
//! The entry/exit sensor reports one ASCII code per line over the serial
//! link.  Only two codes carry meaning; everything else on the wire is
//! noise (boot banners, partial garbage after a reset, stray whitespace).
//!
//! ```text
//!   "1"  ──▶ Event::Entry
//!   "2"  ──▶ Event::Exit
//!   *    ──▶ None (ignored)
//! ```

use core::fmt;

/// A discrete vehicle notification decoded from one sensor line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Event {
    /// A car passed the entry gate.
    Entry = 1,
    /// A car passed the exit gate.
    Exit = 2,
}

impl Event {
    /// Map an already-trimmed sensor line to an event.
    ///
    /// Only the exact strings `"1"` and `"2"` are recognised; `"01"`,
    /// `"1 "` or `"+1"` are noise.
    pub fn from_code(line: &str) -> Option<Self> {
        match line {
            "1" => Some(Self::Entry),
            "2" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The wire code for this event.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case label used in console status lines.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Entry => "ENTRY",
            Self::Exit => "EXIT",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decode raw serial bytes into a trimmed line.
///
/// Invalid UTF-8 sequences are dropped rather than replaced, so a line
/// such as `b"\xff1\r\n"` still decodes to `"1"`.
pub fn decode_line(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len());
    for chunk in raw.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_owned()
    }
}
