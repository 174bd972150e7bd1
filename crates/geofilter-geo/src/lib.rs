//! geofilter Geo - Coordinate normalization and geodetic predicates
//!
//! This crate decides whether a candidate point satisfies a bounding box or a
//! distance query, including antimeridian-crossing, degenerate and coerced
//! boxes.

pub mod bbox;
pub mod distance;
pub mod normalize;
pub mod spatial;

pub use bbox::BoundingBox;
pub use distance::DistanceQuery;
pub use spatial::{GeoFilter, GeoShape};
