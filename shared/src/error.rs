//! Errors raised when parsing domain keys coming from the page or the API

use thiserror::Error;

/// Domain parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Rotation cycle must be 2, 3 or 4 years, got {0}")]
    InvalidRotationCycle(u32),

    #[error("Unknown weather kind: {0}")]
    UnknownWeather(String),

    #[error("Unknown growth stage: {0}")]
    UnknownGrowthStage(String),

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),
}
