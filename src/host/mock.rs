//! host::mock
//!
//! Mock host implementation for deterministic testing.
//!
//! # Design
//!
//! The mock host provides a deterministic implementation of the
//! `AssetHost` trait for use in tests. It stores assets in memory and
//! allows configuring failure scenarios.
//!
//! # Example
//!
//! ```
//! use prefixer::host::mock::MockHost;
//! use prefixer::host::AssetHost;
//! use prefixer::core::types::{AssetName, AssetRef, ClassName, PackagePath};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let host = MockHost::with_assets(vec![AssetRef {
//!     path: PackagePath::new("/Game/Props").unwrap(),
//!     name: AssetName::new("Door").unwrap(),
//!     class: ClassName::new("Blueprint").unwrap(),
//! }]);
//!
//! host.rename_asset("/Game/Props/Door", "/Game/Props/BP_Door")
//!     .await
//!     .unwrap();
//!
//! let renamed = host.get_asset("/Game/Props/BP_Door").await.unwrap();
//! assert!(renamed.is_some());
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{AssetHost, HostError};
use crate::core::types::{AssetName, AssetRef, PackagePath};

/// Mock host for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockHost {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockHostInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockHostInner {
    /// Stored assets keyed by object path.
    assets: HashMap<String, AssetRef>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_assets with the given error.
    ListAssets(HostError),
    /// Fail get_asset with the given error.
    GetAsset(HostError),
    /// Fail rename_asset with the given error.
    RenameAsset(HostError),
    /// Fail rename_asset only for the given object path.
    RenameAssetAt(String, HostError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone)]
pub enum MockOperation {
    ListAssets { root: String },
    GetAsset { object_path: String },
    RenameAsset { old_path: String, new_path: String },
}

impl MockHost {
    /// Create a new empty mock host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock host with pre-existing assets.
    pub fn with_assets(assets: Vec<AssetRef>) -> Self {
        let assets_map = assets
            .into_iter()
            .map(|a| (a.object_path(), a))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(MockHostInner {
                assets: assets_map,
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use prefixer::host::mock::{FailOn, MockHost};
    /// use prefixer::host::HostError;
    ///
    /// let host = MockHost::new()
    ///     .fail_on(FailOn::RenameAsset(HostError::RenameDenied("locked".into())));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_on = Some(fail_on);
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_on = None;
    }

    /// Add an asset after construction (simulates asset creation).
    pub fn add_asset(&self, asset: AssetRef) {
        let mut inner = self.inner.lock().unwrap();
        inner.assets.insert(asset.object_path(), asset);
    }

    /// Get all recorded operations.
    ///
    /// Useful for verifying the mock was called correctly.
    pub fn operations(&self) -> Vec<MockOperation> {
        let inner = self.inner.lock().unwrap();
        inner.operations.clone()
    }

    /// Clear recorded operations.
    pub fn clear_operations(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.clear();
    }

    /// Get an asset by object path (for test verification).
    pub fn get_asset_sync(&self, object_path: &str) -> Option<AssetRef> {
        let inner = self.inner.lock().unwrap();
        inner.assets.get(object_path).cloned()
    }

    /// Get the count of assets.
    pub fn asset_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.assets.len()
    }

    /// Record an operation.
    fn record(&self, op: MockOperation) {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
    }

    /// Check if we should fail and return the error if so.
    fn check_fail<T>(&self, expected: &str, path: Option<&str>) -> Option<Result<T, HostError>> {
        let inner = self.inner.lock().unwrap();
        match &inner.fail_on {
            Some(FailOn::ListAssets(e)) if expected == "list_assets" => Some(Err(e.clone())),
            Some(FailOn::GetAsset(e)) if expected == "get_asset" => Some(Err(e.clone())),
            Some(FailOn::RenameAsset(e)) if expected == "rename_asset" => Some(Err(e.clone())),
            Some(FailOn::RenameAssetAt(at, e))
                if expected == "rename_asset" && path == Some(at.as_str()) =>
            {
                Some(Err(e.clone()))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl AssetHost for MockHost {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_assets(&self, root: &PackagePath) -> Result<Vec<AssetRef>, HostError> {
        self.record(MockOperation::ListAssets {
            root: root.as_str().to_string(),
        });

        if let Some(result) = self.check_fail("list_assets", None) {
            return result;
        }

        let inner = self.inner.lock().unwrap();
        let mut assets: Vec<AssetRef> = inner
            .assets
            .values()
            .filter(|a| a.path.is_under(root))
            .cloned()
            .collect();
        // Deterministic ordering for tests
        assets.sort_by_key(|a| a.object_path());
        Ok(assets)
    }

    async fn get_asset(&self, object_path: &str) -> Result<Option<AssetRef>, HostError> {
        self.record(MockOperation::GetAsset {
            object_path: object_path.to_string(),
        });

        if let Some(result) = self.check_fail("get_asset", None) {
            return result;
        }

        let inner = self.inner.lock().unwrap();
        Ok(inner.assets.get(object_path).cloned())
    }

    async fn rename_asset(&self, old_path: &str, new_path: &str) -> Result<(), HostError> {
        self.record(MockOperation::RenameAsset {
            old_path: old_path.to_string(),
            new_path: new_path.to_string(),
        });

        if let Some(result) = self.check_fail::<()>("rename_asset", Some(old_path)) {
            return result;
        }

        let mut inner = self.inner.lock().unwrap();
        if inner.assets.contains_key(new_path) {
            return Err(HostError::RenameDenied(format!(
                "an asset already exists at {}",
                new_path
            )));
        }
        let Some(mut asset) = inner.assets.remove(old_path) else {
            return Err(HostError::NotFound(old_path.to_string()));
        };

        let (package, name) = new_path
            .rsplit_once('/')
            .ok_or_else(|| HostError::RenameDenied(format!("invalid target path {}", new_path)))?;
        let package = if package.is_empty() { "/" } else { package };

        asset.path = PackagePath::new(package)
            .map_err(|e| HostError::RenameDenied(e.to_string()))?;
        asset.name = AssetName::new(name).map_err(|e| HostError::RenameDenied(e.to_string()))?;

        inner.assets.insert(asset.object_path(), asset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ClassName;

    fn asset(path: &str, name: &str, class: &str) -> AssetRef {
        AssetRef {
            path: PackagePath::new(path).unwrap(),
            name: AssetName::new(name).unwrap(),
            class: ClassName::new(class).unwrap(),
        }
    }

    #[tokio::test]
    async fn list_assets_filters_by_root() {
        let host = MockHost::with_assets(vec![
            asset("/Game/Props", "Door", "Blueprint"),
            asset("/Game/Materials", "Brick", "Material"),
            asset("/Engine", "Cube", "StaticMesh"),
        ]);

        let root = PackagePath::new("/Game").unwrap();
        let listed = host.list_assets(&root).await.unwrap();
        assert_eq!(listed.len(), 2);

        let everything = host
            .list_assets(&PackagePath::new("/").unwrap())
            .await
            .unwrap();
        assert_eq!(everything.len(), 3);
    }

    #[tokio::test]
    async fn list_assets_is_sorted() {
        let host = MockHost::with_assets(vec![
            asset("/Game", "Zebra", "Texture2D"),
            asset("/Game", "Apple", "Texture2D"),
        ]);

        let listed = host
            .list_assets(&PackagePath::new("/Game").unwrap())
            .await
            .unwrap();
        assert_eq!(listed[0].name.as_str(), "Apple");
        assert_eq!(listed[1].name.as_str(), "Zebra");
    }

    #[tokio::test]
    async fn get_asset_found_and_missing() {
        let host = MockHost::with_assets(vec![asset("/Game/Props", "Door", "Blueprint")]);

        let found = host.get_asset("/Game/Props/Door").await.unwrap();
        assert!(found.is_some());

        let missing = host.get_asset("/Game/Props/Window").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn rename_moves_asset() {
        let host = MockHost::with_assets(vec![asset("/Game/Props", "Door", "Blueprint")]);

        host.rename_asset("/Game/Props/Door", "/Game/Props/BP_Door")
            .await
            .unwrap();

        assert!(host.get_asset_sync("/Game/Props/Door").is_none());
        let renamed = host.get_asset_sync("/Game/Props/BP_Door").unwrap();
        assert_eq!(renamed.name.as_str(), "BP_Door");
        assert_eq!(renamed.class.as_str(), "Blueprint");
    }

    #[tokio::test]
    async fn rename_missing_asset_is_not_found() {
        let host = MockHost::new();
        let result = host.rename_asset("/Game/Nope", "/Game/BP_Nope").await;
        assert!(matches!(result, Err(HostError::NotFound(_))));
    }

    #[tokio::test]
    async fn rename_onto_existing_is_denied() {
        let host = MockHost::with_assets(vec![
            asset("/Game", "Door", "Blueprint"),
            asset("/Game", "BP_Door", "Blueprint"),
        ]);

        let result = host.rename_asset("/Game/Door", "/Game/BP_Door").await;
        assert!(matches!(result, Err(HostError::RenameDenied(_))));
        // Source untouched
        assert!(host.get_asset_sync("/Game/Door").is_some());
    }

    #[tokio::test]
    async fn fail_on_rename() {
        let host = MockHost::with_assets(vec![asset("/Game", "Door", "Blueprint")])
            .fail_on(FailOn::RenameAsset(HostError::RenameDenied("locked".into())));

        let result = host.rename_asset("/Game/Door", "/Game/BP_Door").await;
        assert!(matches!(result, Err(HostError::RenameDenied(_))));

        host.clear_fail_on();
        host.rename_asset("/Game/Door", "/Game/BP_Door")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn fail_on_rename_at_specific_path() {
        let host = MockHost::with_assets(vec![
            asset("/Game", "Door", "Blueprint"),
            asset("/Game", "Window", "Blueprint"),
        ])
        .fail_on(FailOn::RenameAssetAt(
            "/Game/Door".into(),
            HostError::RenameDenied("locked".into()),
        ));

        assert!(host.rename_asset("/Game/Door", "/Game/BP_Door").await.is_err());
        assert!(host
            .rename_asset("/Game/Window", "/Game/BP_Window")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn operations_recorded() {
        let host = MockHost::with_assets(vec![asset("/Game", "Door", "Blueprint")]);

        host.get_asset("/Game/Door").await.unwrap();
        host.rename_asset("/Game/Door", "/Game/BP_Door")
            .await
            .unwrap();

        let ops = host.operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], MockOperation::GetAsset { .. }));
        assert!(matches!(ops[1], MockOperation::RenameAsset { .. }));
    }

    #[test]
    fn host_name() {
        assert_eq!(MockHost::new().name(), "mock");
    }
}
