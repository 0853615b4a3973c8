//! Domain types for the diagram layout engine.
//!
//! Station identifiers are opaque; trips are sequences of them. The only
//! structure the engine imposes is the repeat-free [`Segment`], produced
//! by decomposing a trip.

mod station;
mod trip;

pub use station::{InvalidStationId, StationId};
pub use trip::{Segment, Segments, Trip, decompose};
