//! Capacity rule.
//!
//! The lot keeps `0 <= occupancy <= total_spots` after every write.  The
//! rule never clamps: an event that would break the bound is rejected and
//! nothing is written.
//!
//! | Event | Precondition             | New occupancy   |
//! |-------|--------------------------|-----------------|
//! | Entry | `occupancy < total`      | `occupancy + 1` |
//! | Exit  | `occupancy > 0`          | `occupancy - 1` |
//!
//! A stored occupancy above capacity (e.g. `total_spots` was lowered by an
//! operator) rejects entries but still admits exits, so the lot drains
//! back into range.

use core::fmt;

use crate::events::Event;

/// Why an event was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Entry while every spot is taken.
    Full,
    /// Exit while the lot is already empty.
    Empty,
}

impl Rejection {
    /// The only way `event` can be refused.
    pub const fn of(event: Event) -> Self {
        match event {
            Event::Entry => Self::Full,
            Event::Exit => Self::Empty,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "parking FULL"),
            Self::Empty => write!(f, "occupancy already 0"),
        }
    }
}

/// Apply `event` to the current occupancy.
///
/// Returns the occupancy to persist, or the reason the event is ignored.
pub fn admit(event: Event, occupancy: u64, total_spots: u64) -> Result<u64, Rejection> {
    match event {
        Event::Entry if occupancy < total_spots => Ok(occupancy + 1),
        Event::Exit if occupancy > 0 => Ok(occupancy - 1),
        _ => Err(Rejection::of(event)),
    }
}
