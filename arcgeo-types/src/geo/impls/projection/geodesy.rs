use std::marker::PhantomData;

use geodesy::prelude::*;

use crate::cartesian::NewCartesianPoint2d;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Projection defined by a `geodesy` operator pipeline, e.g. `utm zone=33`.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Creates a new projection, or returns `None` if the definition is not valid.
    pub fn new(definition: &str) -> Option<Self> {
        let mut context = Minimal::new();
        let op = context.op(definition).ok()?;
        Some(Self {
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Out::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(In::latlon(
            data[0].0[1].to_degrees(),
            data[0].0[0].to_degrees(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::cartesian::CartesianPoint2d;
    use crate::Coord;

    #[test]
    fn utm_central_meridian() {
        let projection = GeodesyProjection::<Coord, Coord>::new("utm zone=33").unwrap();
        let projected = projection.project(&Coord::xy(15.0, 0.0)).unwrap();

        assert_abs_diff_eq!(projected.x(), 500_000.0, epsilon = 1e-3);
        assert_abs_diff_eq!(projected.y(), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn utm_round_trip() {
        let projection = GeodesyProjection::<Coord, Coord>::new("utm zone=32").unwrap();
        let geo = Coord::xy(10.5, 52.25);
        let projected = projection.project(&geo).unwrap();
        let back = projection.unproject(&projected).unwrap();

        assert_abs_diff_eq!(back.x(), geo.x(), epsilon = 1e-7);
        assert_abs_diff_eq!(back.y(), geo.y(), epsilon = 1e-7);
    }
}
