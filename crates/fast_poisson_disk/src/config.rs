//! Sampler configuration.
use glam::DVec2;

use crate::error::{Error, Result};

/// Directions tried around each active point when the caller does not ask for a count.
pub const DEFAULT_TRIES: f64 = 30.0;

/// Fewer directions than this per active point makes the sweep degenerate.
pub const MIN_TRIES: usize = 3;

/// Configuration for a [`crate::sampler::Sampler`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Size of the sampled rectangle `[0, x) x [0, y)` in domain units.
    pub domain_extent: DVec2,
    /// Minimum distance between two accepted points.
    pub radius: f64,
    /// Requested number of directions tried around each active point.
    /// Rounded up and floored to [`MIN_TRIES`], see [`SamplerConfig::max_tries`];
    /// zero or negative counts therefore mean three directions.
    pub tries: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            domain_extent: DVec2::ZERO,
            radius: 1.0,
            tries: DEFAULT_TRIES,
        }
    }
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] for the given domain extent and radius.
    pub fn new(domain_extent: DVec2, radius: f64) -> Self {
        Self {
            domain_extent,
            radius,
            ..Default::default()
        }
    }

    /// Sets the domain extent.
    pub fn with_domain_extent(mut self, domain_extent: DVec2) -> Self {
        self.domain_extent = domain_extent;
        self
    }

    /// Sets the minimum distance between points.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the requested number of tries per active point.
    pub fn with_tries(mut self, tries: f64) -> Self {
        self.tries = tries;
        self
    }

    /// Effective number of directions tried per active point: `max(3, ceil(tries))`.
    pub fn max_tries(&self) -> usize {
        (self.tries.ceil() as usize).max(MIN_TRIES)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let extent = self.domain_extent;
        if !extent.is_finite() || extent.x <= 0.0 || extent.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "domain_extent must be finite and > 0 in both components".into(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "radius must be finite and > 0".into(),
            ));
        }
        if !self.tries.is_finite() {
            return Err(Error::InvalidConfig("tries must be finite".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = SamplerConfig::new(DVec2::new(100.0, 50.0), 5.0).with_tries(12.0);
        assert_eq!(config.domain_extent, DVec2::new(100.0, 50.0));
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.tries, 12.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_uses_thirty_tries() {
        let config = SamplerConfig::default();
        assert_eq!(config.max_tries(), 30);
        assert!(config.validate().is_err());
    }

    #[test]
    fn max_tries_rounds_up_with_floor_of_three() {
        let config = SamplerConfig::new(DVec2::ONE, 0.1);
        assert_eq!(config.with_tries(0.0).max_tries(), 3);
        assert_eq!(config.with_tries(1.0).max_tries(), 3);
        assert_eq!(config.with_tries(2.5).max_tries(), 3);
        assert_eq!(config.with_tries(3.2).max_tries(), 4);
        assert_eq!(config.with_tries(30.0).max_tries(), 30);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let base = SamplerConfig::new(DVec2::new(10.0, 10.0), 1.0);

        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                base.with_radius(radius).validate(),
                Err(Error::InvalidConfig(_))
            ));
        }
        for extent in [
            DVec2::new(0.0, 10.0),
            DVec2::new(10.0, -1.0),
            DVec2::new(f64::INFINITY, 10.0),
            DVec2::new(10.0, f64::NAN),
        ] {
            assert!(base.with_domain_extent(extent).validate().is_err());
        }
        for tries in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(base.with_tries(tries).validate().is_err());
        }
    }

    #[test]
    fn non_positive_tries_floor_to_three() {
        let base = SamplerConfig::new(DVec2::new(10.0, 10.0), 1.0);
        for tries in [0.0, -0.5, -3.0] {
            let config = base.with_tries(tries);
            assert!(config.validate().is_ok());
            assert_eq!(config.max_tries(), MIN_TRIES);
        }
    }
}
