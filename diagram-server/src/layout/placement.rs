//! The placement graph: accumulated left-to-right constraints.
//!
//! Segments are absorbed one at a time in priority order. Each segment is
//! cut into arcs at stations the graph already knows (anchors), and every
//! arc is threaded in as a chain of edges. When an arc contradicts the
//! order implied by earlier, better-evidenced segments, the arc concedes on
//! its single weakest edge, which is reversed. The graph stays acyclic after
//! every arc.

use petgraph::Direction;
use petgraph::algo::{has_path_connecting, is_cyclic_directed};
use petgraph::graphmap::DiGraphMap;
use tracing::trace;

use crate::domain::{Segment, StationId};

use super::error::LayoutError;
use super::location::LocationGraph;

/// A run of a segment to be threaded into the placement graph.
///
/// Arcs hold at least two stations. Every arc except possibly the last of a
/// segment ends at an anchor; consecutive arcs of a segment share exactly
/// that anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc<'a> {
    stations: &'a [StationId],
}

impl<'a> Arc<'a> {
    pub fn stations(&self) -> &'a [StationId] {
        self.stations
    }

    /// Consecutive station pairs, in travel order.
    pub fn pairs(self) -> impl Iterator<Item = (&'a StationId, &'a StationId)> + 'a {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }

    fn begin(&self) -> &'a StationId {
        &self.stations[0]
    }

    fn end(&self) -> &'a StationId {
        &self.stations[self.stations.len() - 1]
    }
}

/// Counters for one or more absorbed segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsorbStats {
    /// Arcs whose edges were added to the graph.
    pub arcs_inserted: usize,

    /// Two-station arcs between stations that were both already placed.
    pub arcs_skipped: usize,

    /// Edges reversed to break a cycle, in their final direction.
    pub flipped: Vec<(StationId, StationId)>,
}

impl AbsorbStats {
    fn merge(&mut self, other: AbsorbStats) {
        self.arcs_inserted += other.arcs_inserted;
        self.arcs_skipped += other.arcs_skipped;
        self.flipped.extend(other.flipped);
    }
}

/// Directed graph whose edges mean "render to the left of".
#[derive(Debug, Clone, Default)]
pub struct PlacementGraph<'a> {
    pub(super) graph: DiGraphMap<&'a StationId, ()>,
}

impl<'a> PlacementGraph<'a> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the station is already placed (an anchor).
    pub fn contains(&self, station: &StationId) -> bool {
        self.graph.contains_node(station)
    }

    pub fn has_edge(&self, from: &StationId, to: &StationId) -> bool {
        self.graph.contains_edge(from, to)
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Stations in the order they were first placed.
    pub fn stations(&self) -> impl Iterator<Item = &'a StationId> + '_ {
        self.graph.nodes()
    }

    /// Every constraint as a `(left, right)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&'a StationId, &'a StationId)> + '_ {
        self.graph.all_edges().map(|(u, v, _)| (u, v))
    }

    /// Stations that must render immediately to the right of `station`.
    pub(super) fn successors(
        &self,
        station: &'a StationId,
    ) -> impl Iterator<Item = &'a StationId> + '_ {
        self.graph.neighbors_directed(station, Direction::Outgoing)
    }

    /// Number of stations constrained to render left of `station`.
    pub(super) fn in_degree(&self, station: &'a StationId) -> usize {
        self.graph
            .neighbors_directed(station, Direction::Incoming)
            .count()
    }

    pub fn is_acyclic(&self) -> bool {
        !is_cyclic_directed(&self.graph)
    }

    /// Place a station with no ordering constraints.
    ///
    /// No-op if the station is already placed.
    pub fn add_station(&mut self, station: &'a StationId) {
        self.graph.add_node(station);
    }

    /// Cut a segment into arcs against the current set of anchors.
    ///
    /// An arc closes at the first station after its start that is already
    /// placed; the next arc starts at that anchor. A two-station arc whose
    /// stations are both placed is skipped, as is any single-station
    /// leftover. Returns the arcs and the number skipped.
    pub fn split_into_arcs(&self, segment: Segment<'a>) -> (Vec<Arc<'a>>, usize) {
        let stations = segment.stations();
        let mut arcs = Vec::new();
        let mut skipped = 0;
        let mut start = 0;

        for (i, station) in stations.iter().enumerate() {
            if i > start && self.contains(station) {
                self.push_arc(&stations[start..=i], &mut arcs, &mut skipped);
                start = i;
            }
        }

        if stations.len() - start > 1 {
            self.push_arc(&stations[start..], &mut arcs, &mut skipped);
        }

        (arcs, skipped)
    }

    fn push_arc(
        &self,
        stations: &'a [StationId],
        arcs: &mut Vec<Arc<'a>>,
        skipped: &mut usize,
    ) {
        if stations.len() == 2 && self.contains(&stations[0]) && self.contains(&stations[1]) {
            *skipped += 1;
            return;
        }
        arcs.push(Arc { stations });
    }

    /// Add an arc's edges, reversing its weakest edge if that closes a cycle.
    ///
    /// Returns the flipped edge in its new direction, if any.
    pub fn insert_arc(
        &mut self,
        arc: Arc<'a>,
        location: &LocationGraph<'_>,
    ) -> Result<Option<(StationId, StationId)>, LayoutError> {
        for (u, v) in arc.pairs() {
            self.graph.add_edge(u, v, ());
        }

        let (begin, end) = (arc.begin(), arc.end());
        trace!(%begin, %end, stations = arc.stations.len(), "inserted arc");

        if !has_path_connecting(&self.graph, end, begin, None) {
            return Ok(None);
        }

        let weighted = arc
            .pairs()
            .map(|(u, v)| location.edge_weight(u, v).map(|w| (u, v, w)))
            .collect::<Result<Vec<_>, _>>()?;
        let Some((u, v, weight)) = weighted.into_iter().min_by_key(|&(_, _, w)| w) else {
            return Ok(None);
        };

        self.graph.remove_edge(u, v);
        self.graph.add_edge(v, u, ());
        trace!(from = %v, to = %u, weight, "flipped weakest edge");

        if !self.is_acyclic() {
            return Err(LayoutError::UnresolvedCycle {
                from: v.clone(),
                to: u.clone(),
            });
        }

        Ok(Some((v.clone(), u.clone())))
    }

    /// Thread one segment into the graph.
    pub fn absorb(
        &mut self,
        segment: Segment<'a>,
        location: &LocationGraph<'_>,
    ) -> Result<AbsorbStats, LayoutError> {
        let (arcs, skipped) = self.split_into_arcs(segment);
        let mut stats = AbsorbStats {
            arcs_skipped: skipped,
            ..AbsorbStats::default()
        };

        for arc in arcs {
            if let Some(flipped) = self.insert_arc(arc, location)? {
                stats.flipped.push(flipped);
            }
            stats.arcs_inserted += 1;
        }

        Ok(stats)
    }

    /// Thread every segment into the graph, in the given order.
    pub fn absorb_all(
        &mut self,
        segments: &[Segment<'a>],
        location: &LocationGraph<'_>,
    ) -> Result<AbsorbStats, LayoutError> {
        let mut stats = AbsorbStats::default();
        for &segment in segments {
            stats.merge(self.absorb(segment, location)?);
        }
        Ok(stats)
    }
}
