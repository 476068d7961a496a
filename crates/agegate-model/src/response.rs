//! Rejection response body

use serde::{Deserialize, Serialize};

/// Error body returned with a 403 when no version satisfies the age floor.
///
/// The shape is fixed; npm clients surface `error` and `message` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionBody {
    pub error: String,
    pub message: String,
}

impl RejectionBody {
    /// Build the standard "no acceptable version" rejection for a package
    pub fn no_acceptable_version(package: &str, threshold_days: u64) -> Self {
        Self {
            error: "No acceptable version".to_string(),
            message: format!(
                "All versions of {} are newer than {} days.",
                package, threshold_days
            ),
        }
    }
}
