//! Position sampling strategies and random-source helpers.
//!
//! [`PositionSampling`] is the one-shot interface: hand it a domain extent and a
//! random number generator and get the finished point set back. Use
//! [`crate::sampler::Sampler`] directly to step the generator point by point.
use mint::Vector2;
use rand::RngCore;

pub mod poisson_disk;

pub use poisson_disk::PoissonDiskSampling;

/// Trait for position sampling over the domain `[0, x) x [0, y)`.
pub trait PositionSampling: Send + Sync {
    fn generate(&self, domain_extent: Vector2<f64>, rng: &mut dyn RngCore) -> Vec<Vector2<f64>>;
}

/// Generate a random float in the range [0, 1) with 53 bits of precision.
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRng {
        value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert_eq!(result, 1.0 - f64::EPSILON / 2.0);
    }

    #[test]
    fn rand01_values_in_range() {
        let test_values = [0, 1, 1 << 11, u64::MAX / 2, u64::MAX - 1, u64::MAX];

        for value in test_values {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..1.0).contains(&result),
                "rand01({}) = {} is out of range [0,1)",
                value,
                result
            );
        }
    }

    #[test]
    fn rand01_midpoint() {
        let mut rng = FixedRng {
            value: 1 << 63,
        };
        assert_eq!(rand01(&mut rng), 0.5);
    }
}
