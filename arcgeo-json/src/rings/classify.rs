use arcgeo_types::cartesian::{CartesianClosedContour, Winding};
use arcgeo_types::{Coord, LinearRing};
use geojson::Position;

use crate::error::ArcGisError;
use crate::rings::OuterRingGroup;

/// Splits raw rings into exterior rings and holes.
///
/// Every ring is closed if needed, rings with less than [`LinearRing::MIN_POINTS`] points after closing are
/// dropped. Clockwise rings (and rings with zero area) are exteriors, the rest are holes. Both are returned with
/// their winding reversed, in input order. Each exterior starts a group of its own.
pub fn classify_rings(
    rings: Vec<Vec<Position>>,
) -> Result<(Vec<OuterRingGroup>, Vec<LinearRing<Coord>>), ArcGisError> {
    let mut groups = vec![];
    let mut holes = vec![];

    for (index, positions) in rings.into_iter().enumerate() {
        let points = positions
            .into_iter()
            .map(Coord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut ring = LinearRing::new(points);
        ring.close();

        if ring.is_degenerate() {
            log::debug!(
                "Skipping ring {index}: {} points after closing",
                ring.len()
            );
            continue;
        }

        match ring.winding() {
            Winding::Clockwise => groups.push(OuterRingGroup::new(ring.reversed())),
            Winding::CounterClockwise => holes.push(ring.reversed()),
        }
    }

    Ok((groups, holes))
}
