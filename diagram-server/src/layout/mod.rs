//! Station ordering engine.
//!
//! Given a set of trips, computes a single left-to-right station order in
//! which as many trips as possible run monotonically without crossing.
//!
//! The pipeline:
//! 1. decompose trips into repeat-free segments,
//! 2. weigh station pairs by how many segments travel them ([`LocationGraph`]),
//! 3. sort segments by total weight ([`prioritize`]),
//! 4. thread segments into an acyclic [`PlacementGraph`], best first,
//! 5. topologically sort the result ([`topological_order`]).

mod error;
mod location;
mod placement;
mod priority;
mod sequence;


pub use error::LayoutError;
pub use location::LocationGraph;
pub use placement::{AbsorbStats, Arc, PlacementGraph};
pub use priority::{prioritize, score};
pub use sequence::topological_order;

use tracing::debug;

use crate::domain::{StationId, Trip, decompose};

/// A station order together with what it took to compute it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Every distinct input station, left to right.
    pub order: Vec<StationId>,

    /// Number of repeat-free segments the trips decomposed into.
    pub segments: usize,

    /// Arcs threaded into the placement graph.
    pub arcs_inserted: usize,

    /// Redundant two-station arcs between placed stations.
    pub arcs_skipped: usize,

    /// Edges reversed to resolve conflicts, in their final direction.
    pub flipped_edges: Vec<(StationId, StationId)>,
}

/// Compute the left-to-right order of every station in `trips`.
///
/// # Examples
///
/// ```
/// use diagram_server::domain::{StationId, Trip};
/// use diagram_server::layout::layout_stations;
///
/// let trip: Trip = ["A", "B", "C", "D"].into_iter().map(StationId::from).collect();
/// let order = layout_stations(&[trip]).unwrap();
///
/// let names: Vec<&str> = order.iter().map(|s| s.as_str()).collect();
/// assert_eq!(names, vec!["A", "B", "C", "D"]);
/// ```
pub fn layout_stations(trips: &[Trip]) -> Result<Vec<StationId>, LayoutError> {
    layout_with_report(trips).map(|report| report.order)
}

/// Compute the station order and report on the work done.
pub fn layout_with_report(trips: &[Trip]) -> Result<LayoutReport, LayoutError> {
    let segments = decompose(trips);
    let location = LocationGraph::build(&segments);
    let sorted = prioritize(&segments, &location)?;

    let mut placement = PlacementGraph::new();
    let stats = placement.absorb_all(&sorted, &location)?;

    // Stations from trips too short to yield a segment.
    for station in trips.iter().flat_map(Trip::stations) {
        placement.add_station(station);
    }

    let order = topological_order(&placement)?;

    debug!(
        trips = trips.len(),
        segments = segments.len(),
        stations = order.len(),
        arcs_inserted = stats.arcs_inserted,
        arcs_skipped = stats.arcs_skipped,
        flipped = stats.flipped.len(),
        "station layout complete"
    );

    Ok(LayoutReport {
        order,
        segments: segments.len(),
        arcs_inserted: stats.arcs_inserted,
        arcs_skipped: stats.arcs_skipped,
        flipped_edges: stats.flipped,
    })
}
