//! Incremental Poisson-disk sampler.
//!
//! [`Sampler`] implements dart throwing around active points: each step picks a
//! random active point and sweeps candidate directions around it at a fixed
//! distance of just over `radius`, accepting the first candidate that lies inside
//! the domain and clears every neighbour found through the [`SpatialGrid`]. An
//! active point that runs out of directions leaves the process list, and sampling
//! ends once the list is empty.
//!
//! Angles are never wrapped into `[0, 2π)`. Keeping the arithmetic as is makes
//! the output bit-identical for a given random stream.
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;

use glam::DVec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::config::SamplerConfig;
use crate::error::Result;
use crate::grid::SpatialGrid;
use crate::sampling::rand01;

const PI_DIV_3: f64 = PI / 3.0;
const EPSILON_ANGLE: f64 = 2e-14;

/// Random source returning values in `[0, 1)`.
pub type RandomSource = Box<dyn FnMut() -> f64 + Send>;

/// Process-list entry: an accepted point that may still spawn neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePoint {
    position: DVec2,
    /// Direction of the next dart.
    angle: f64,
    /// Directions already spent, capped by `max_tries`.
    tries: usize,
}

/// Poisson-disk sampler over the rectangle `[0, width) x [0, height)`.
///
/// Points produced by [`Sampler::next`] and [`Sampler::fill`] are never closer
/// than the configured radius to any point already present. Points seeded with
/// [`Sampler::add_point`] or [`Sampler::add_random_point`] skip that check.
///
/// ```
/// use fast_poisson_disk::prelude::*;
/// use glam::DVec2;
///
/// let config = SamplerConfig::new(DVec2::new(100.0, 100.0), 5.0);
/// let mut sampler = Sampler::with_seed(config, 42)?;
/// let points = sampler.fill();
/// assert!(!points.is_empty());
/// # Ok::<(), fast_poisson_disk::error::Error>(())
/// ```
pub struct Sampler {
    config: SamplerConfig,
    width: f64,
    height: f64,
    max_tries: usize,
    squared_radius: f64,
    radius_plus_epsilon: f64,
    angle_increment: f64,
    angle_increment_on_success: f64,
    tries_increment_on_success: usize,
    points: Vec<DVec2>,
    process_list: Vec<ActivePoint>,
    grid: SpatialGrid,
    rng: RandomSource,
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampler")
            .field("config", &self.config)
            .field("max_tries", &self.max_tries)
            .field("points", &self.points.len())
            .field("active", &self.process_list.len())
            .finish_non_exhaustive()
    }
}

impl Sampler {
    /// Creates a sampler drawing from a [`StdRng`] seeded with fresh entropy.
    pub fn try_new(config: SamplerConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    /// Creates a sampler drawing from a [`StdRng`] seeded with `seed`.
    pub fn with_seed(config: SamplerConfig, seed: u64) -> Result<Self> {
        Self::with_rng_core(config, StdRng::seed_from_u64(seed))
    }

    /// Creates a sampler drawing from any `rand` generator.
    pub fn with_rng_core<R: RngCore + Send + 'static>(
        config: SamplerConfig,
        mut rng: R,
    ) -> Result<Self> {
        Self::with_rng(config, move || rand01(&mut rng))
    }

    /// Creates a sampler drawing from `rng`, which must return values in `[0, 1)`.
    ///
    /// Identical configurations fed identical streams produce identical points.
    pub fn with_rng<F>(config: SamplerConfig, rng: F) -> Result<Self>
    where
        F: FnMut() -> f64 + Send + 'static,
    {
        config.validate()?;

        let extent = config.domain_extent;
        let radius = config.radius;
        let max_tries = config.max_tries();

        // Scale the distance epsilon with the domain to keep relative precision.
        let float_precision_mitigation = (extent.x.max(extent.y) / 64.0).floor().max(1.0);
        let epsilon_radius = 1e-14 * float_precision_mitigation;

        let angle_increment = PI * 2.0 / max_tries as f64;
        let angle_increment_on_success = PI_DIV_3 + EPSILON_ANGLE;
        let tries_increment_on_success =
            (angle_increment_on_success / angle_increment).ceil() as usize;

        let grid = SpatialGrid::try_new(extent, radius * FRAC_1_SQRT_2)?;

        Ok(Self {
            config,
            width: extent.x,
            height: extent.y,
            max_tries,
            squared_radius: radius * radius,
            radius_plus_epsilon: radius + epsilon_radius,
            angle_increment,
            angle_increment_on_success,
            tries_increment_on_success,
            points: Vec::new(),
            process_list: Vec::new(),
            grid,
            rng: Box::new(rng),
        })
    }

    /// Configuration this sampler was built from.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Effective number of directions tried per active point.
    pub fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Side length of an acceleration grid cell.
    pub fn cell_size(&self) -> f64 {
        self.grid.cell_size()
    }

    /// Acceleration grid indexing the accepted points.
    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    /// Number of points that can still spawn neighbours.
    pub fn active_len(&self) -> usize {
        self.process_list.len()
    }

    /// Number of accepted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Accepted points in generation order.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Consumes the sampler, returning the accepted points.
    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }

    /// Adds a uniformly random point without a distance check.
    pub fn add_random_point(&mut self) -> DVec2 {
        let x = (self.rng)() * self.width;
        let y = (self.rng)() * self.height;
        let angle = (self.rng)() * PI * 2.0;
        self.push_point(ActivePoint {
            position: DVec2::new(x, y),
            angle,
            tries: 0,
        })
    }

    /// Adds `point` without a distance check if it lies inside the domain.
    ///
    /// Returns `None` for points outside `[0, width) x [0, height)`.
    pub fn add_point(&mut self, point: impl Into<DVec2>) -> Option<DVec2> {
        let point = point.into();
        if !self.in_domain(point) {
            debug!(x = point.x, y = point.y, "Point outside of the domain; not added.");
            return None;
        }

        let angle = (self.rng)() * PI * 2.0;
        Some(self.push_point(ActivePoint {
            position: point,
            angle,
            tries: 0,
        }))
    }

    /// Seeds with a random point if empty, then generates until exhaustion.
    ///
    /// Blocks until the domain is packed; run it on a worker thread when that matters.
    pub fn fill(&mut self) -> &[DVec2] {
        if self.points.is_empty() {
            self.add_random_point();
        }

        while self.next().is_some() {}

        debug!(
            points = self.points.len(),
            width = self.width,
            height = self.height,
            radius = self.config.radius,
            "Poisson disk fill complete."
        );
        &self.points
    }

    /// Clears all points, keeping the configuration and grid allocation.
    pub fn reset(&mut self) {
        debug!(points = self.points.len(), "Resetting sampler.");
        self.grid.clear();
        self.points.clear();
        self.process_list.clear();
    }

    #[inline]
    fn in_domain(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    fn in_neighbourhood(&self, candidate: DVec2) -> bool {
        self.grid.neighbours(candidate).any(|i| {
            let d = candidate - self.points[i];
            d.x * d.x + d.y * d.y < self.squared_radius
        })
    }

    fn push_point(&mut self, active: ActivePoint) -> DVec2 {
        let position = active.position;
        self.process_list.push(active);
        self.points.push(position);
        self.grid.insert(position, self.points.len() - 1);
        position
    }
}

impl Iterator for Sampler {
    type Item = DVec2;

    /// Generates one more point, or `None` once no active point can spawn.
    fn next(&mut self) -> Option<DVec2> {
        while !self.process_list.is_empty() {
            let len = self.process_list.len();
            let index = ((len as f64 * (self.rng)()) as usize).min(len - 1);

            let origin = self.process_list[index].position;
            let mut angle = self.process_list[index].angle;
            let mut tries = self.process_list[index].tries;

            if tries == 0 {
                angle += ((self.rng)() - 0.5) * PI_DIV_3 * 4.0;
            }

            while tries < self.max_tries {
                let candidate = DVec2::new(
                    origin.x + angle.cos() * self.radius_plus_epsilon,
                    origin.y + angle.sin() * self.radius_plus_epsilon,
                );

                if self.in_domain(candidate) && !self.in_neighbourhood(candidate) {
                    let jitter = (self.rng)() * self.angle_increment;
                    let source = &mut self.process_list[index];
                    source.angle = angle + self.angle_increment_on_success + jitter;
                    source.tries = tries + self.tries_increment_on_success;

                    return Some(self.push_point(ActivePoint {
                        position: candidate,
                        angle,
                        tries: 0,
                    }));
                }

                angle += self.angle_increment;
                tries += 1;
            }

            trace!(x = origin.x, y = origin.y, "Active point exhausted.");
            self.process_list.swap_remove(index);
        }

        None
    }
}
