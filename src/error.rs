use thiserror::Error;

/// Rejected sampling parameters.
///
/// The generator draws from half-open integer ranges derived from the
/// minimum distance and the domain size, so both must be positive.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("minimum distance must be positive, got {0}")]
    NonPositiveDistance(i32),
    #[error("domain size must be positive, got {0}")]
    NonPositiveSize(i32),
}
