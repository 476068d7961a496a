//! Package manifest document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The dist-tag the filter inspects and may rewrite
pub const LATEST_TAG: &str = "latest";

/// Sentinel keys in the `time` map that are not version identifiers
pub const TIME_CREATED: &str = "created";
pub const TIME_MODIFIED: &str = "modified";

/// A package metadata document as served by an npm-compatible registry.
///
/// Only the fields the filter needs are modeled; everything else is kept
/// in `extra` so a rewritten response carries the full original document.
/// `versions` and `time` are `Option` because their absence must be
/// distinguishable from an empty map: a document without them cannot be
/// age-evaluated at all and is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Distribution tags (tag name -> version)
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: BTreeMap<String, String>,

    /// Versions with real release metadata, keyed by version identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<BTreeMap<String, serde_json::Value>>,

    /// Publish timestamps keyed by version, plus the `created` and
    /// `modified` sentinel entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<BTreeMap<String, DateTime<Utc>>>,

    /// All other manifest fields, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    /// The version currently advertised as `latest`, if any
    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.get(LATEST_TAG).map(String::as_str)
    }

    /// Point the `latest` dist-tag at a different version
    pub fn set_latest(&mut self, version: impl Into<String>) {
        self.dist_tags.insert(LATEST_TAG.to_string(), version.into());
    }

    /// Publish timestamp for a version, if the time map has one
    pub fn published_at(&self, version: &str) -> Option<DateTime<Utc>> {
        self.time.as_ref()?.get(version).copied()
    }

    /// Whether the version has real release metadata (guards against
    /// timestamp-only entries in the time map)
    pub fn has_version(&self, version: &str) -> bool {
        self.versions
            .as_ref()
            .is_some_and(|v| v.contains_key(version))
    }
}
