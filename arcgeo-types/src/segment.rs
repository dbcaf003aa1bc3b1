//! Straight line segment between two points.

use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true, if the segment has at least one common point with the `other` segment.
    ///
    /// Touching endpoints and collinear overlapping segments count as intersecting.
    pub fn intersects<Point: CartesianPoint2d<Num = P::Num>>(
        &self,
        other: &Segment<Point>,
    ) -> bool {
        let o1 = Orientation::triplet(self.0, self.1, other.0);
        let o2 = Orientation::triplet(self.0, self.1, other.1);
        let o3 = Orientation::triplet(other.0, other.1, self.0);
        let o4 = Orientation::triplet(other.0, other.1, self.1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o1 == Orientation::Collinear && within_bounds(self.0, other.0, self.1))
            || (o2 == Orientation::Collinear && within_bounds(self.0, other.1, self.1))
            || (o3 == Orientation::Collinear && within_bounds(other.0, self.0, other.1))
            || (o4 == Orientation::Collinear && within_bounds(other.0, self.1, other.1))
    }

    /// Returns true if the `point` lies on the segment.
    pub fn contains_point<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        Orientation::triplet(self.0, self.1, point) == Orientation::Collinear
            && within_bounds(self.0, point, self.1)
    }
}

/// Whether `q` lies inside the bounding box of `p` and `r`.
fn within_bounds<Num: num_traits::Num + PartialOrd + Copy>(
    p: &impl CartesianPoint2d<Num = Num>,
    q: &impl CartesianPoint2d<Num = Num>,
    r: &impl CartesianPoint2d<Num = Num>,
) -> bool {
    let (x_min, x_max) = min_max(p.x(), r.x());
    let (y_min, y_max) = min_max(p.y(), r.y());

    q.x() <= x_max && q.x() >= x_min && q.y() <= y_max && q.y() >= y_min
}

fn min_max<Num: PartialOrd + Copy>(a: Num, b: Num) -> (Num, Num) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
