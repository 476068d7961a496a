//! Mock metadata store for testing

use agegate_model::PackageManifest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{MetadataStore, StoreError, StoreResult};

/// In-memory metadata store for unit/integration testing
#[derive(Default)]
pub struct MockStore {
    manifests: Mutex<HashMap<String, PackageManifest>>,
    fail_lookup: Mutex<bool>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manifest under its package name
    pub fn insert(&self, manifest: PackageManifest) {
        self.manifests
            .lock()
            .unwrap()
            .insert(manifest.name.clone(), manifest);
    }

    /// Configure every lookup to fail with a backend error
    pub fn set_fail_lookup(&self, fail: bool) {
        *self.fail_lookup.lock().unwrap() = fail;
    }
}

#[async_trait]
impl MetadataStore for MockStore {
    async fn get_package(&self, name: &str) -> StoreResult<PackageManifest> {
        if *self.fail_lookup.lock().unwrap() {
            return Err(StoreError::Backend("Mock lookup failure".into()));
        }

        self.manifests
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}
