//! Topological ordering of the placement graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::domain::StationId;

use super::error::LayoutError;
use super::placement::PlacementGraph;

/// Order every placed station so that all edges point rightwards.
///
/// Uses Kahn's algorithm. Among stations with no remaining constraint, the
/// one placed earliest is released first, so the result is deterministic
/// and unconstrained stations keep their discovery order.
pub fn topological_order(placement: &PlacementGraph<'_>) -> Result<Vec<StationId>, LayoutError> {
    let stations: Vec<&StationId> = placement.stations().collect();
    let position: HashMap<&StationId, usize> = stations
        .iter()
        .enumerate()
        .map(|(i, &station)| (station, i))
        .collect();

    let mut in_degree: Vec<usize> = stations
        .iter()
        .map(|&station| placement.in_degree(station))
        .collect();

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(i, _)| Reverse(i))
        .collect();

    let mut order = Vec::with_capacity(stations.len());
    while let Some(Reverse(i)) = ready.pop() {
        let station = stations[i];
        order.push(station.clone());

        for next in placement.successors(station) {
            let j = position[next];
            in_degree[j] -= 1;
            if in_degree[j] == 0 {
                ready.push(Reverse(j));
            }
        }
    }

    if order.len() != stations.len() {
        return Err(LayoutError::CyclicPlacement {
            placed: order.len(),
            total: stations.len(),
        });
    }

    Ok(order)
}
