/// Conversion of points from one coordinate reference system into another.
///
/// Both methods return `None` if the point cannot be represented in the target system.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the output points.
    type OutPoint;

    /// Converts a point from the input system into the output one.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point from the output system back into the input one.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

impl<In, Out> Projection for Box<dyn Projection<InPoint = In, OutPoint = Out>> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        self.as_ref().project(input)
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        self.as_ref().unproject(input)
    }
}
