//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Sampling itself never fails; errors are reported when a sampler is configured
//! with a radius, domain or try count it cannot work with.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = Error::InvalidConfig("radius must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: radius must be > 0");
    }
}
