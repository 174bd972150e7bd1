//! geofilter Core - Domain models, errors, and configuration
//!
//! This crate contains the value types shared by the predicate evaluator and
//! the harness: points, validation modes, distance units and the layered
//! configuration that selects them.

pub mod config;
pub mod error;
pub mod models;

pub use error::{GeoFilterError, Result};
