use arcgeo_types::cartesian::{CartesianClosedContour, CartesianContour};
use arcgeo_types::{Coord, LinearRing};

use crate::rings::OuterRingGroup;

/// Attaches holes to the groups of exterior rings.
///
/// Holes are taken from the end of the list. A hole goes to the last group whose exterior contains the first
/// point of the hole without touching it. Holes that are not contained by any exterior are then tried, again
/// from the last one, against exteriors they intersect. A hole that neither fits nor touches any exterior is
/// reversed back and appended as a new group, so the holes tried after it can be attached to it.
pub fn assign_holes(groups: &mut Vec<OuterRingGroup>, mut holes: Vec<LinearRing<Coord>>) {
    let mut uncontained = vec![];
    while let Some(hole) = holes.pop() {
        let found = find_group(groups, |exterior| {
            !exterior.intersects(&hole)
                && hole
                    .first()
                    .is_some_and(|point| exterior.contains_point(point))
        });

        match found {
            Some(index) => groups[index].push_hole(hole),
            None => uncontained.push(hole),
        }
    }

    while let Some(hole) = uncontained.pop() {
        match find_group(groups, |exterior| exterior.intersects(&hole)) {
            Some(index) => groups[index].push_hole(hole),
            None => {
                log::debug!("Hole does not match any exterior ring, adding it as a polygon");
                groups.push(OuterRingGroup::new(hole.reversed()));
            }
        }
    }
}

fn find_group(
    groups: &[OuterRingGroup],
    matches: impl Fn(&LinearRing<Coord>) -> bool,
) -> Option<usize> {
    (0..groups.len())
        .rev()
        .find(|&index| matches(groups[index].exterior()))
}
