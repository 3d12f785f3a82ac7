#![forbid(unsafe_code)]
//! fast_poisson_disk: 2D Poisson-disk sampling with a uniform acceleration grid.
//!
//! Modules:
//! - sampler: the incremental dart-throwing generator (`next`, `fill`, `reset`)
//! - grid: the cell grid that bounds each neighbourhood query to 21 cells
//! - config: sampler configuration and validation
//! - sampling: one-shot [`sampling::PositionSampling`] strategy and random-source helpers
pub mod config;
pub mod error;
pub mod grid;
pub mod sampler;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use fast_poisson_disk::prelude::*;`.
pub mod prelude {
    pub use crate::config::{SamplerConfig, DEFAULT_TRIES, MIN_TRIES};
    pub use crate::error::{Error, Result};
    pub use crate::grid::SpatialGrid;
    pub use crate::sampler::{RandomSource, Sampler};
    pub use crate::sampling::{rand01, PoissonDiskSampling, PositionSampling};
}
