//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::diagram::DiagramLayout;

/// Request to lay out the station axis of a diagram.
#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    /// Trips to draw, each a sequence of stop ids in visiting order
    pub trips: Vec<TripRequest>,

    /// Optional stop clusters drawn as one place
    #[serde(default)]
    pub clusters: Vec<ClusterRequest>,
}

/// A trip in a layout request.
#[derive(Debug, Deserialize)]
pub struct TripRequest {
    /// Caller's identifier for the trip, echoed in error messages
    #[serde(default)]
    pub id: Option<String>,

    /// Stop ids in visiting order
    pub stops: Vec<String>,
}

/// A stop cluster in a layout request.
#[derive(Debug, Deserialize)]
pub struct ClusterRequest {
    /// Key the cluster is laid out under
    pub key: String,

    /// Member stop ids
    pub members: Vec<String>,
}

/// Result of a layout request.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    /// Station order, using cluster keys for clustered stops
    pub order: Vec<String>,

    /// Horizontal coordinate of every stop
    pub positions: Vec<PositionResult>,

    /// Number of repeat-free segments the trips split into
    pub segments: usize,

    /// Edges reversed to resolve conflicting trips
    pub flipped_edges: Vec<FlippedEdge>,
}

/// A stop's position on the station axis.
#[derive(Debug, Serialize)]
pub struct PositionResult {
    pub station: String,
    pub x: f64,
}

/// An ordering constraint reversed during layout.
#[derive(Debug, Serialize)]
pub struct FlippedEdge {
    pub from: String,
    pub to: String,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl LayoutResponse {
    /// Build a response from a computed layout.
    pub fn from_layout(layout: &DiagramLayout) -> Self {
        Self {
            order: layout.order.iter().map(|s| s.to_string()).collect(),
            positions: layout
                .positions
                .iter()
                .map(|p| PositionResult {
                    station: p.station.to_string(),
                    x: p.x,
                })
                .collect(),
            segments: layout.report.segments,
            flipped_edges: layout
                .report
                .flipped_edges
                .iter()
                .map(|(from, to)| FlippedEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        }
    }
}
