//! Stop clusters and horizontal positions.
//!
//! Several stops of one interchange (platforms of a main station, opposite
//! sides of a street) are usually best drawn as one place. A cluster gives
//! them a shared key: trips are laid out on cluster keys, and each member
//! stop is then placed half a unit apart inside its cluster's slot.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::{StationId, Trip};

/// Horizontal distance between consecutive stations.
const STATION_SPACING: f64 = 1.0;

/// Horizontal distance between stops within a cluster.
const MEMBER_SPACING: f64 = 0.5;

/// A stop and its horizontal coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopPosition {
    pub station: StationId,
    pub x: f64,
}

#[derive(Debug, Clone)]
struct Cluster {
    key: StationId,
    members: Vec<StationId>,
}

/// A set of named stop clusters.
///
/// A stop listed in several clusters belongs to the one registered first.
#[derive(Debug, Clone, Default)]
pub struct StopClusters {
    clusters: Vec<Cluster>,
    by_key: HashMap<StationId, usize>,
    membership: HashMap<StationId, usize>,
}

impl StopClusters {
    /// Create an empty set of clusters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cluster.
    ///
    /// Duplicate members are dropped, keeping the first occurrence.
    /// Registering the same key again appends to its members.
    pub fn insert(&mut self, key: StationId, members: impl IntoIterator<Item = StationId>) {
        let idx = match self.by_key.get(&key) {
            Some(&idx) => idx,
            None => {
                self.clusters.push(Cluster {
                    key: key.clone(),
                    members: Vec::new(),
                });
                self.by_key.insert(key, self.clusters.len() - 1);
                self.clusters.len() - 1
            }
        };

        for member in members {
            let cluster = &mut self.clusters[idx];
            if cluster.members.contains(&member) {
                continue;
            }
            self.membership.entry(member.clone()).or_insert(idx);
            cluster.members.push(member);
        }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Members of the cluster with the given key.
    pub fn members(&self, key: &StationId) -> Option<&[StationId]> {
        self.by_key
            .get(key)
            .map(|&idx| self.clusters[idx].members.as_slice())
    }

    /// The cluster key for a stop, or the stop itself if unclustered.
    pub fn canonical<'a>(&'a self, stop: &'a StationId) -> &'a StationId {
        match self.membership.get(stop) {
            Some(&idx) => &self.clusters[idx].key,
            None => stop,
        }
    }

    /// Replace every stop of a trip by its cluster key.
    pub fn canonicalize(&self, trip: &Trip) -> Trip {
        trip.stations()
            .iter()
            .map(|stop| self.canonical(stop).clone())
            .collect()
    }

    /// Horizontal coordinates for an ordered list of stations.
    ///
    /// Plain stations take one unit each. A cluster key expands into those
    /// of its members contained in `present`, half a unit apart, and the
    /// cluster's slot closes with another half unit.
    pub fn positions(&self, order: &[StationId], present: &HashSet<StationId>) -> Vec<StopPosition> {
        let mut positions = Vec::with_capacity(order.len());
        let mut x = 0.0;

        for station in order {
            match self.members(station) {
                Some(members) => {
                    for member in members.iter().filter(|m| present.contains(*m)) {
                        positions.push(StopPosition {
                            station: member.clone(),
                            x,
                        });
                        x += MEMBER_SPACING;
                    }
                    x += MEMBER_SPACING;
                }
                None => {
                    positions.push(StopPosition {
                        station: station.clone(),
                        x,
                    });
                    x += STATION_SPACING;
                }
            }
        }

        positions
    }
}
