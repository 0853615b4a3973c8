//! Trips and their repeat-free segments.

use super::StationId;

/// A time-ordered sequence of station visits.
///
/// A trip may revisit a station (loop and out-and-back services). The layout
/// engine never reasons about a trip directly; it works on the repeat-free
/// [`Segment`]s returned by [`Trip::segments`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    stations: Vec<StationId>,
}

impl Trip {
    /// Create a trip from its stations in visiting order.
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    /// The stations in visiting order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Split the trip into maximal repeat-free segments.
    ///
    /// The trip is scanned left to right. When a station already occurs in
    /// the segment being accumulated, that segment ends and a new one starts
    /// at the repeated station. Segments shorter than two stations are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use diagram_server::domain::Trip;
    ///
    /// let trip: Trip = ["A", "B", "C", "B", "D"].into_iter().map(Into::into).collect();
    /// let segments: Vec<Vec<&str>> = trip
    ///     .segments()
    ///     .map(|s| s.stations().iter().map(|id| id.as_str()).collect())
    ///     .collect();
    ///
    /// assert_eq!(segments, vec![vec!["A", "B", "C"], vec!["B", "D"]]);
    /// ```
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            stations: &self.stations,
            start: 0,
            pos: 0,
        }
    }
}

impl FromIterator<StationId> for Trip {
    fn from_iter<I: IntoIterator<Item = StationId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A contiguous run of a trip in which no station repeats.
///
/// Segments are only produced by [`Trip::segments`], which guarantees they
/// hold at least two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    stations: &'a [StationId],
}

impl<'a> Segment<'a> {
    pub fn stations(&self) -> &'a [StationId] {
        self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Consecutive station pairs, in travel order.
    pub fn pairs(self) -> impl Iterator<Item = (&'a StationId, &'a StationId)> + 'a {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// Iterator over the segments of a trip, returned by [`Trip::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    stations: &'a [StationId],
    start: usize,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        while self.pos < self.stations.len() {
            let station = &self.stations[self.pos];
            let current = &self.stations[self.start..self.pos];

            if current.contains(station) {
                self.start = self.pos;
                self.pos += 1;
                if current.len() > 1 {
                    return Some(Segment { stations: current });
                }
            } else {
                self.pos += 1;
            }
        }

        let trailing = &self.stations[self.start..];
        self.start = self.stations.len();
        (trailing.len() > 1).then_some(Segment { stations: trailing })
    }
}

/// Decompose every trip, keeping segments in trip order.
pub fn decompose(trips: &[Trip]) -> Vec<Segment<'_>> {
    trips.iter().flat_map(Trip::segments).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(ids: &[&str]) -> Trip {
        ids.iter().map(|s| StationId::from(*s)).collect()
    }

    fn ids<'a>(segment: &Segment<'a>) -> Vec<&'a str> {
        segment.stations().iter().map(StationId::as_str).collect()
    }

    #[test]
    fn distinct_trip_is_one_segment() {
        let t = trip(&["A", "B", "C", "D"]);
        let segments: Vec<_> = t.segments().collect();
        assert_eq!(segments.len(), 1);
        assert_eq!(ids(&segments[0]), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn loop_splits_at_repeated_station() {
        let t = trip(&["A", "B", "C", "B", "D"]);
        let segments: Vec<_> = t.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(ids(&segments[0]), vec!["A", "B", "C"]);
        assert_eq!(ids(&segments[1]), vec!["B", "D"]);
    }

    #[test]
    fn out_and_back() {
        let t = trip(&["A", "B", "C", "B", "A"]);
        let segments: Vec<Vec<&str>> = t.segments().map(|s| ids(&s)).collect();
        assert_eq!(segments, vec![vec!["A", "B", "C"], vec!["B", "A"]]);
    }

    #[test]
    fn short_trips_yield_nothing() {
        assert_eq!(trip(&[]).segments().count(), 0);
        assert_eq!(trip(&["A"]).segments().count(), 0);
    }

    #[test]
    fn immediate_repeat_drops_single_station_runs() {
        assert_eq!(trip(&["A", "A"]).segments().count(), 0);

        let t = trip(&["A", "A", "B"]);
        let segments: Vec<Vec<&str>> = t.segments().map(|s| ids(&s)).collect();
        assert_eq!(segments, vec![vec!["A", "B"]]);
    }

    #[test]
    fn segments_is_restartable() {
        let t = trip(&["A", "B", "A", "C"]);
        let first: Vec<_> = t.segments().collect();
        let second: Vec<_> = t.segments().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn exhausted_iterator_stays_exhausted() {
        let t = trip(&["A", "B"]);
        let mut segments = t.segments();
        assert!(segments.next().is_some());
        assert!(segments.next().is_none());
        assert!(segments.next().is_none());
    }

    #[test]
    fn pairs_follow_travel_order() {
        let t = trip(&["A", "B", "C"]);
        let segment = t.segments().next().unwrap();
        let pairs: Vec<(&str, &str)> = segment
            .pairs()
            .map(|(u, v)| (u.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn decompose_keeps_trip_order() {
        let trips = vec![trip(&["A", "B"]), trip(&["X"]), trip(&["C", "D", "C"])];
        let segments: Vec<Vec<&str>> = decompose(&trips).iter().map(ids).collect();
        assert_eq!(segments, vec![vec!["A", "B"], vec!["C", "D"]]);
    }
}
