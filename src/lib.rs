//! Parking occupancy bridge library.
//!
//! Exposes the pure-logic modules and the host adapters for integration
//! testing.  The binary in `main.rs` only wires adapters together and
//! starts the loop.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod occupancy;
