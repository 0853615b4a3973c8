//! Complete horizontal layout for a time–space diagram.

use std::collections::HashSet;

use crate::clusters::{StopClusters, StopPosition};
use crate::domain::{StationId, Trip};
use crate::layout::{LayoutError, LayoutReport, layout_with_report};

/// The station axis of a diagram: order, coordinates, and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    /// Station order over cluster keys and unclustered stops.
    pub order: Vec<StationId>,

    /// Coordinate of every stop present in the input trips.
    pub positions: Vec<StopPosition>,

    /// Work done by the ordering engine.
    pub report: LayoutReport,
}

impl DiagramLayout {
    /// Lay out the stops of `trips`, drawing each cluster as one place.
    pub fn compute(trips: &[Trip], clusters: &StopClusters) -> Result<Self, LayoutError> {
        let present: HashSet<StationId> = trips
            .iter()
            .flat_map(Trip::stations)
            .cloned()
            .collect();

        let canonical: Vec<Trip> = trips.iter().map(|t| clusters.canonicalize(t)).collect();
        let report = layout_with_report(&canonical)?;
        let positions = clusters.positions(&report.order, &present);

        Ok(Self {
            order: report.order.clone(),
            positions,
            report,
        })
    }
}
