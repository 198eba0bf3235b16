//! Two-dimensional points ordered by their distance from the origin.
//!
//! [`Point`] is the base type. [`ColorPoint`] adds a free-form color and
//! rejects non-numeric coordinates. [`AdvancedPoint`] restricts colors to a
//! shared, append-only allow-list kept in [`palette`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod number;
pub mod output;
pub mod palette;

pub use error::{Axis, PointError, Result};
pub use geometry::{
    AdvancedPoint, ColorPoint, OriginDistance, Point, Render, compare_by_distance,
    sort_by_distance,
};
pub use number::{Number, Value};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_INPUT: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
