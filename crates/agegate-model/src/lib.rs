//! Package metadata types for the agegate filter
//!
//! This crate defines the data the filter inspects and rewrites:
//! - The package manifest document as served by an npm-compatible registry
//! - The fixed-shape rejection body returned when no version qualifies

mod manifest;
mod response;

pub use manifest::*;
pub use response::*;
