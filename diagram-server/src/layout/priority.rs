//! Segment scoring and ordering.
//!
//! Segments whose station pairs are shared by many trips form the trunk of
//! the network and are absorbed first; idiosyncratic branches and
//! reversed-direction runs come later and yield to the order already
//! established.

use crate::domain::Segment;

use super::error::LayoutError;
use super::location::LocationGraph;

/// Sum of the location weights of a segment's consecutive pairs.
pub fn score(segment: Segment<'_>, location: &LocationGraph<'_>) -> Result<u64, LayoutError> {
    segment
        .pairs()
        .map(|(u, v)| location.edge_weight(u, v).map(u64::from))
        .sum()
}

/// Order segments from highest to lowest score.
///
/// The sort is stable: segments with equal scores keep their input order.
pub fn prioritize<'a>(
    segments: &[Segment<'a>],
    location: &LocationGraph<'_>,
) -> Result<Vec<Segment<'a>>, LayoutError> {
    let mut scored = segments
        .iter()
        .map(|&segment| score(segment, location).map(|s| (s, segment)))
        .collect::<Result<Vec<_>, _>>()?;

    scored.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(scored.into_iter().map(|(_, segment)| segment).collect())
}
