use crate::geo::traits::projection::Projection;

/// Applies two projections one after another.
pub struct ChainProjection<In, Mid, Out> {
    first: Box<dyn Projection<InPoint = In, OutPoint = Mid>>,
    second: Box<dyn Projection<InPoint = Mid, OutPoint = Out>>,
}

impl<In, Mid, Out> ChainProjection<In, Mid, Out> {
    /// Creates a projection equivalent to `first` followed by `second`.
    pub fn new(
        first: Box<dyn Projection<InPoint = In, OutPoint = Mid>>,
        second: Box<dyn Projection<InPoint = Mid, OutPoint = Out>>,
    ) -> Self {
        Self { first, second }
    }
}

impl<In, Mid, Out> Projection for ChainProjection<In, Mid, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        self.second.project(&self.first.project(input)?)
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        self.first.unproject(&self.second.unproject(input)?)
    }
}

/// Swaps `project` and `unproject` of the inner projection.
pub struct InvertedProjection<In, Out> {
    inner: Box<dyn Projection<InPoint = Out, OutPoint = In>>,
}

impl<In, Out> InvertedProjection<In, Out> {
    /// Creates the inverse of `inner`.
    pub fn new(inner: Box<dyn Projection<InPoint = Out, OutPoint = In>>) -> Self {
        Self { inner }
    }
}

impl<In, Out> Projection for InvertedProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &In) -> Option<Out> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Out) -> Option<In> {
        self.inner.project(input)
    }
}
