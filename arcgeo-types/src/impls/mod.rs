//! Implementations of geometry traits.

mod ring;

pub use ring::LinearRing;
