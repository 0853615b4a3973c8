//! Undirected location graph used to weigh trip segments.

use petgraph::graphmap::UnGraphMap;

use crate::domain::{Segment, StationId};

use super::error::LayoutError;

/// How often each pair of stations is travelled consecutively.
///
/// Nodes are every station of every segment; the weight of edge `{u, v}`
/// counts the segments that visit `u` and `v` back to back, in either
/// direction. The graph is built once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph<'a> {
    graph: UnGraphMap<&'a StationId, u32>,
}

impl<'a> LocationGraph<'a> {
    /// Build the graph from decomposed segments.
    pub fn build(segments: &[Segment<'a>]) -> Self {
        let mut graph = UnGraphMap::new();

        for segment in segments {
            for station in segment.stations() {
                graph.add_node(station);
            }
            for (u, v) in segment.pairs() {
                match graph.edge_weight_mut(u, v) {
                    Some(weight) => *weight += 1,
                    None => {
                        graph.add_edge(u, v, 1);
                    }
                }
            }
        }

        Self { graph }
    }

    /// The weight between two stations, if they are ever adjacent.
    pub fn weight(&self, u: &StationId, v: &StationId) -> Option<u32> {
        self.graph.edge_weight(u, v).copied()
    }

    /// The weight between two stations that must be adjacent somewhere.
    pub fn edge_weight(&self, u: &StationId, v: &StationId) -> Result<u32, LayoutError> {
        self.weight(u, v).ok_or_else(|| LayoutError::MissingWeight {
            from: u.clone(),
            to: v.clone(),
        })
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
