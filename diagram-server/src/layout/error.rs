//! Layout error types.
//!
//! Every variant is an invariant violation: either a caller broke the
//! contract between the graphs, or the algorithm has a bug. Degenerate input
//! (no trips, trips of zero or one station) is never an error.

use crate::domain::StationId;

/// Errors from computing a station order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A consecutive station pair has no entry in the location graph
    #[error("no location weight between {from} and {to}")]
    MissingWeight { from: StationId, to: StationId },

    /// Flipping the weakest edge of an arc did not break the cycle it closed
    #[error("placement graph still cyclic after flipping {from} -> {to}")]
    UnresolvedCycle { from: StationId, to: StationId },

    /// The placement graph could not be fully ordered
    #[error("placement graph is cyclic: ordered {placed} of {total} stations")]
    CyclicPlacement { placed: usize, total: usize },
}
