//! Implementations of the [`Projection`](super::Projection) trait.

mod projection;

pub use projection::*;
