//! Procedural ocean surface and floating ship simulation.
//!
//! A fixed pool of circular waves is superposed into a displacement field.
//! The field is mirrored every frame to a render parameter sink for the
//! surface shader, and sampled at five hull points to float the ship.

pub mod buoyancy;
pub mod constants;
pub mod sets;
pub mod sink;
pub mod waves;

pub use constants::*;
