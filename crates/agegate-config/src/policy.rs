//! Validated policy structure

use crate::schema::RawConfig;
use std::time::Duration;

/// Age threshold applied when no configuration is provided
pub const DEFAULT_MAX_AGE_DAYS: u64 = 7;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Validated age policy, immutable for the life of the service.
///
/// A single threshold applied uniformly to all packages: versions younger
/// than `max_age` are not allowed to be advertised as `latest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Minimum age a version must have to be advertised as `latest`
    pub max_age: Duration,
}

impl Policy {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let days = raw.filter.max_age_days.unwrap_or(DEFAULT_MAX_AGE_DAYS);
        Self::from_days(days)
    }

    /// Policy with a threshold of the given number of days
    pub fn from_days(days: u64) -> Self {
        Self {
            max_age: Duration::from_secs(days * SECS_PER_DAY),
        }
    }

    /// The threshold in whole days, as used in user-facing messages
    pub fn max_age_days(&self) -> u64 {
        self.max_age.as_secs() / SECS_PER_DAY
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::from_days(DEFAULT_MAX_AGE_DAYS)
    }
}
