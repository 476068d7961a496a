//! Integration tests for the age filter
//!
//! These drive AgeFilter end to end through the mock store and check the
//! exact responses the owning request handler would send.

use agegate_config::Policy;
use agegate_filter::{AgeFilter, FilterOutcome, MockStore, ResponseBody};
use agegate_model::PackageManifest;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn days_ago(days: i64) -> DateTime<Utc> {
    now() - chrono::Duration::days(days)
}

fn manifest(name: &str, latest: &str, history: &[(&str, DateTime<Utc>)]) -> PackageManifest {
    let mut versions = serde_json::Map::new();
    let mut time = json!({
        "created": days_ago(500).to_rfc3339(),
        "modified": days_ago(1).to_rfc3339(),
    });
    for (version, published) in history {
        versions.insert(version.to_string(), json!({ "version": version }));
        time[version] = json!(published.to_rfc3339());
    }

    serde_json::from_value(json!({
        "name": name,
        "dist-tags": { "latest": latest },
        "versions": versions,
        "time": time,
        "readme": "sample package",
    }))
    .unwrap()
}

fn filter_with(manifests: Vec<PackageManifest>) -> (AgeFilter, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());
    for m in manifests {
        store.insert(m);
    }
    let filter = AgeFilter::new(store.clone(), Policy::from_days(7));
    (filter, store)
}

#[tokio::test]
async fn too_new_latest_is_downgraded() {
    let (filter, _) = filter_with(vec![manifest(
        "widget",
        "2.0.0",
        &[("2.0.0", days_ago(1)), ("1.9.0", days_ago(30))],
    )]);

    let outcome = filter.handle_metadata_request("widget", now()).await;

    let FilterOutcome::Respond { status, body } = outcome else {
        panic!("expected a direct response, got {:?}", outcome);
    };
    assert_eq!(status, 200);

    let ResponseBody::Manifest(m) = body else {
        panic!("expected a manifest body");
    };
    assert_eq!(m.latest(), Some("1.9.0"));

    // The rest of the document must survive the rewrite
    let serialized = serde_json::to_value(&*m).unwrap();
    assert_eq!(serialized["readme"], "sample package");
    assert!(serialized["versions"].get("2.0.0").is_some());
}

#[tokio::test]
async fn old_enough_latest_passes_through() {
    let (filter, _) = filter_with(vec![manifest(
        "widget",
        "2.0.0",
        &[("2.0.0", days_ago(10))],
    )]);

    let outcome = filter.handle_metadata_request("widget", now()).await;
    assert_eq!(outcome, FilterOutcome::Passthrough);
}

#[tokio::test]
async fn no_qualifying_version_is_rejected_with_fixed_body() {
    let (filter, _) = filter_with(vec![manifest(
        "widget",
        "2.0.0",
        &[("2.0.0", days_ago(1)), ("2.0.0-beta", days_ago(30))],
    )]);

    let outcome = filter.handle_metadata_request("widget", now()).await;

    let FilterOutcome::Respond { status, body } = outcome else {
        panic!("expected a direct response");
    };
    assert_eq!(status, 403);

    let serialized = serde_json::to_value(&body).unwrap();
    assert_eq!(serialized["error"], "No acceptable version");
    assert_eq!(
        serialized["message"],
        "All versions of widget are newer than 7 days."
    );
}

#[tokio::test]
async fn scoped_packages_are_never_filtered() {
    // The store would fail the lookup; a scoped name must not reach it.
    let (filter, store) = filter_with(vec![]);
    store.set_fail_lookup(true);

    let outcome = filter.handle_metadata_request("@scope/widget", now()).await;
    assert_eq!(outcome, FilterOutcome::Passthrough);
}

#[tokio::test]
async fn store_failure_fails_open() {
    let (filter, store) = filter_with(vec![manifest(
        "widget",
        "2.0.0",
        &[("2.0.0", days_ago(1)), ("1.9.0", days_ago(30))],
    )]);
    store.set_fail_lookup(true);

    let outcome = filter.handle_metadata_request("widget", now()).await;
    assert_eq!(outcome, FilterOutcome::Passthrough);
}

#[tokio::test]
async fn unknown_package_fails_open() {
    let (filter, _) = filter_with(vec![]);

    let outcome = filter.handle_metadata_request("widget", now()).await;
    assert_eq!(outcome, FilterOutcome::Passthrough);
}

#[tokio::test]
async fn manifest_without_time_field_passes_through() {
    let m: PackageManifest = serde_json::from_value(json!({
        "name": "widget",
        "dist-tags": { "latest": "2.0.0" },
        "versions": { "2.0.0": { "version": "2.0.0" } },
    }))
    .unwrap();
    let (filter, _) = filter_with(vec![m]);

    let outcome = filter.handle_metadata_request("widget", now()).await;
    assert_eq!(outcome, FilterOutcome::Passthrough);
}

#[tokio::test]
async fn newest_qualifying_candidate_wins() {
    let (filter, _) = filter_with(vec![manifest(
        "widget",
        "2.0.0",
        &[
            ("2.0.0", days_ago(1)),
            ("1.8.0", days_ago(40)),
            ("1.9.0", days_ago(30)),
        ],
    )]);

    let outcome = filter.handle_metadata_request("widget", now()).await;

    let FilterOutcome::Respond { body: ResponseBody::Manifest(m), .. } = outcome else {
        panic!("expected a rewritten manifest");
    };
    assert_eq!(m.latest(), Some("1.9.0"));
}
