//! Decision application for package metadata requests

use agegate_config::Policy;
use agegate_core::{Decision, age_of, select_version};
use agegate_model::{PackageManifest, RejectionBody};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::MetadataStore;

/// What the owning request handler must send back for one metadata request
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// Forward the registry's original response unchanged
    Passthrough,
    /// Respond directly with this status and JSON body
    Respond { status: u16, body: ResponseBody },
}

/// Body of a direct response produced by the filter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Full manifest with `dist-tags.latest` rewritten
    Manifest(Box<PackageManifest>),
    /// 403 error body when no version qualifies
    Rejection(RejectionBody),
}

/// The age filter: evaluates one package-metadata request at a time.
///
/// Holds only shared immutable state, so a single instance serves any
/// number of concurrent requests without locking.
pub struct AgeFilter {
    store: Arc<dyn MetadataStore>,
    policy: Policy,
}

impl AgeFilter {
    pub fn new(store: Arc<dyn MetadataStore>, policy: Policy) -> Self {
        info!(max_age_days = policy.max_age_days(), "Age filter initialized");
        Self { store, policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Evaluate a metadata request for `package` at instant `now`.
    ///
    /// Scoped packages (names starting with `@`) are never filtered, and
    /// any difficulty evaluating age resolves to pass-through so the
    /// filter cannot block an install on its own account.
    pub async fn handle_metadata_request(&self, package: &str, now: DateTime<Utc>) -> FilterOutcome {
        if package.starts_with('@') {
            return FilterOutcome::Passthrough;
        }

        let mut manifest = match self.store.get_package(package).await {
            Ok(m) => m,
            Err(e) => {
                debug!(package, error = %e, "Could not check package age");
                return FilterOutcome::Passthrough;
            }
        };

        match select_version(&manifest, &self.policy, now) {
            Decision::Pass => FilterOutcome::Passthrough,

            Decision::Rewrite { version } => {
                let Some(original) = manifest.latest().map(str::to_owned) else {
                    return FilterOutcome::Passthrough;
                };
                let latest_age_days = self.age_in_days(&manifest, &original, now);
                let downgraded_age_days = self.age_in_days(&manifest, &version, now);

                warn!(
                    package,
                    latest_version = %original,
                    downgrade_version = %version,
                    latest_age_days,
                    downgraded_age_days,
                    "Downgrading latest to an older release"
                );

                manifest.set_latest(&version);

                FilterOutcome::Respond {
                    status: 200,
                    body: ResponseBody::Manifest(Box::new(manifest)),
                }
            }

            Decision::Reject { threshold_days } => {
                let latest_version = manifest.latest().unwrap_or("").to_string();
                let latest_age_days = self.age_in_days(&manifest, &latest_version, now);

                error!(
                    package,
                    latest_version = %latest_version,
                    latest_age_days,
                    "No acceptable version found, all versions are too new"
                );

                FilterOutcome::Respond {
                    status: 403,
                    body: ResponseBody::Rejection(RejectionBody::no_acceptable_version(
                        package,
                        threshold_days,
                    )),
                }
            }
        }
    }

    fn age_in_days(&self, manifest: &PackageManifest, version: &str, now: DateTime<Utc>) -> u64 {
        manifest
            .published_at(version)
            .map(|published| whole_days(age_of(now, published)))
            .unwrap_or(0)
    }
}

fn whole_days(age: Duration) -> u64 {
    age.as_secs() / (24 * 60 * 60)
}
