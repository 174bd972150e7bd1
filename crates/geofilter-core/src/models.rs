pub mod distance;
pub mod point;

pub use distance::{Distance, DistanceUnit, UnitTable};
pub use point::{GeoPoint, ValidationMode};
