//! Configuration validation

use crate::schema::RawConfig;
use thiserror::Error;

/// Upper bound on the configurable age threshold (ten years)
pub const MAX_MAX_AGE_DAYS: u64 = 3650;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("filter.max_age_days must be at least 1; a zero threshold never triggers the filter")]
    ZeroMaxAge,

    #[error("filter.max_age_days is {0}, which exceeds the supported maximum of {MAX_MAX_AGE_DAYS}")]
    MaxAgeTooLarge(u64),
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(days) = config.filter.max_age_days {
        if days == 0 {
            errors.push(ValidationError::ZeroMaxAge);
        } else if days > MAX_MAX_AGE_DAYS {
            errors.push(ValidationError::MaxAgeTooLarge(days));
        }
    }

    errors
}
