//! Poisson disk position sampling strategy.
use glam::DVec2;
use mint::Vector2;
use rand::RngCore;
use tracing::warn;

use crate::config::{SamplerConfig, DEFAULT_TRIES};
use crate::sampler::Sampler;
use crate::sampling::PositionSampling;

/// Poisson disk sampling strategy.
///
/// Fills the whole domain in one call. The sampler's own random stream is seeded
/// from one `u64` drawn from the generator passed to [`PositionSampling::generate`].
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub radius: f64,
    /// Requested directions tried around each active point.
    pub tries: f64,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified radius.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            tries: DEFAULT_TRIES,
        }
    }

    /// Sets the requested number of tries per active point.
    pub fn with_tries(mut self, tries: f64) -> Self {
        self.tries = tries;
        self
    }
}

impl PositionSampling for PoissonDiskSampling {
    fn generate(&self, domain_extent: Vector2<f64>, rng: &mut dyn RngCore) -> Vec<Vector2<f64>> {
        let config =
            SamplerConfig::new(DVec2::from(domain_extent), self.radius).with_tries(self.tries);

        let mut sampler = match Sampler::with_seed(config, rng.next_u64()) {
            Ok(sampler) => sampler,
            Err(err) => {
                warn!("Poisson disk sampling skipped: {}", err);
                return Vec::new();
            }
        };

        sampler.fill();
        sampler.into_points().into_iter().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pairwise_min_distance(points: &[Vector2<f64>]) -> f64 {
        let mut min = f64::MAX;
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let a = DVec2::from(points[i]);
                let b = DVec2::from(points[j]);
                let dist = (a - b).length();
                if dist < min {
                    min = dist;
                }
            }
        }
        min
    }

    #[test]
    fn generated_points_respect_radius_constraint() {
        let mut rng = StdRng::seed_from_u64(123);
        let sampling = PoissonDiskSampling::new(0.3);
        let points = sampling.generate(DVec2::new(4.0, 3.0).into(), &mut rng);

        assert!(points.len() > 1);
        for p in &points {
            assert!(p.x >= 0.0 && p.x < 4.0);
            assert!(p.y >= 0.0 && p.y < 3.0);
        }
        assert!(pairwise_min_distance(&points) >= 0.3 - 1e-9);
    }

    #[test]
    fn determinism_for_same_seed() {
        let sampling = PoissonDiskSampling::new(1.0).with_tries(10.0);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let pa = sampling.generate(DVec2::new(20.0, 20.0).into(), &mut rng_a);
        let pb = sampling.generate(DVec2::new(20.0, 20.0).into(), &mut rng_b);
        assert_eq!(pa, pb);
    }

    #[test]
    fn invalid_parameters_return_no_points() {
        let mut rng = StdRng::seed_from_u64(1);
        let extent = DVec2::new(1.0, 1.0);

        assert!(PoissonDiskSampling::new(0.0)
            .generate(extent.into(), &mut rng)
            .is_empty());
        assert!(PoissonDiskSampling::new(f64::NAN)
            .generate(extent.into(), &mut rng)
            .is_empty());
        assert!(PoissonDiskSampling::new(0.1)
            .generate(DVec2::new(0.0, 1.0).into(), &mut rng)
            .is_empty());
        assert!(PoissonDiskSampling::new(0.1)
            .with_tries(f64::INFINITY)
            .generate(extent.into(), &mut rng)
            .is_empty());
    }

    #[test]
    fn zero_tries_still_samples() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = PoissonDiskSampling::new(1.0)
            .with_tries(0.0)
            .generate(DVec2::new(10.0, 10.0).into(), &mut rng);
        assert!(points.len() > 1);
        assert!(pairwise_min_distance(&points) >= 1.0 - 1e-9);
    }

    #[test]
    fn usable_as_trait_object() {
        let strategy: Box<dyn PositionSampling> = Box::new(PoissonDiskSampling::new(2.0));
        let mut rng = StdRng::seed_from_u64(99);
        assert!(!strategy
            .generate(DVec2::new(30.0, 30.0).into(), &mut rng)
            .is_empty());
    }
}
