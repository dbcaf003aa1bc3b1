use nalgebra::{Point2, Scalar};
use num_traits::{Bounded, FromPrimitive};

use crate::cartesian::traits::{CartesianPoint2d, NewCartesianPoint2d};

/// 2d cartesian point with `f64` coordinates.
pub type Point2d = Point2<f64>;

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}
