//! Age-gated version selection

use agegate_config::Policy;
use agegate_model::{PackageManifest, TIME_CREATED, TIME_MODIFIED};
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::is_stable;

/// Selection decision for a package metadata request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Forward the original metadata unchanged
    Pass,
    /// Rewrite `dist-tags.latest` to this version before responding
    Rewrite { version: String },
    /// No stable version satisfies the age floor; reject with a client
    /// error naming the threshold
    Reject { threshold_days: u64 },
}

/// Decide what to do with a package's metadata at instant `now`.
///
/// Incomplete metadata never raises an error: a manifest missing its time
/// map, versions map, `latest` tag, or the timestamp for `latest` resolves
/// to [`Decision::Pass`] so delivery is never blocked by our own inability
/// to evaluate age.
///
/// When the advertised `latest` is younger than `policy.max_age`, the
/// publish history is scanned for the most recently published version that
/// is stable, present in the versions map, and at least `max_age` old.
/// Versions with identical publish timestamps tie-break to the
/// lexicographically greatest version string.
pub fn select_version(manifest: &PackageManifest, policy: &Policy, now: DateTime<Utc>) -> Decision {
    let (Some(time), Some(_)) = (manifest.time.as_ref(), manifest.versions.as_ref()) else {
        return Decision::Pass;
    };
    let Some(latest) = manifest.latest() else {
        return Decision::Pass;
    };
    let Some(latest_published) = time.get(latest) else {
        return Decision::Pass;
    };

    // The filter triggers only when latest is too new; an already-old
    // latest needs no rewrite.
    if age_of(now, *latest_published) >= policy.max_age {
        return Decision::Pass;
    }

    let mut best: Option<(&str, DateTime<Utc>)> = None;
    for (version, published_at) in time {
        if version == TIME_CREATED || version == TIME_MODIFIED {
            continue;
        }
        // Timestamp-only entries carry no release metadata
        if !manifest.has_version(version) {
            continue;
        }
        if !is_stable(version) {
            continue;
        }
        if age_of(now, *published_at) < policy.max_age {
            continue;
        }

        let better = match best {
            None => true,
            Some((best_version, best_published)) => {
                *published_at > best_published
                    || (*published_at == best_published && version.as_str() > best_version)
            }
        };
        if better {
            best = Some((version.as_str(), *published_at));
        }
    }

    match best {
        Some((version, _)) => Decision::Rewrite {
            version: version.to_string(),
        },
        None => Decision::Reject {
            threshold_days: policy.max_age_days(),
        },
    }
}

/// Age of a publish instant at `now`, saturating at zero for timestamps
/// in the future
pub fn age_of(now: DateTime<Utc>, published: DateTime<Utc>) -> Duration {
    (now - published).to_std().unwrap_or(Duration::ZERO)
}
