//! Application core — pure bridge logic, zero I/O.
//!
//! This module contains the control loop that turns sensor lines into
//! remote counter updates.  All interaction with the serial device, the
//! remote store and the console happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real devices.

pub mod events;
pub mod ports;
pub mod service;
