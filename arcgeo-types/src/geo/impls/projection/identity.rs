use std::marker::PhantomData;

use crate::geo::traits::projection::Projection;

/// Projection that returns the input points unchanged.
#[derive(Debug, Default)]
pub struct IdentityProjection<P> {
    phantom: PhantomData<P>,
}

impl<P> IdentityProjection<P> {
    /// Creates a new instance.
    pub fn new() -> Self {
        Self {
            phantom: Default::default(),
        }
    }
}

impl<P: Clone> Projection for IdentityProjection<P> {
    type InPoint = P;
    type OutPoint = P;

    fn project(&self, input: &P) -> Option<P> {
        Some(input.clone())
    }

    fn unproject(&self, input: &P) -> Option<P> {
        Some(input.clone())
    }
}
