mod point;

pub use point::Point2d;
