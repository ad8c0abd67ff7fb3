//! Mathematical building blocks shared by the engines.
//!
//! This module provides:
//! - `statistics`: Sample moments and range helpers over slices
//! - `grid`: Evenly spaced axis construction (`linspace`, `arange`)

pub mod grid;
pub mod statistics;

pub use grid::{arange, linspace};
pub use statistics::{range, sample_mean, sample_std_dev};
