//! engine::prefixer
//!
//! Batch rename/undo operations and the asset-added handler.
//!
//! # Design
//!
//! A [`Prefixer`] borrows the conventions table (constructed once at
//! startup) and a host. For each asset it resolves the class prefix,
//! runs the presence check, and either requests a rename or records why
//! it skipped. Nothing is retried and partial failure never halts the
//! batch; callers render the [`BatchReport`] and decide the exit code.
//!
//! # Example
//!
//! ```
//! use prefixer::core::conventions::NamingConventions;
//! use prefixer::core::types::{AssetName, AssetRef, ClassName, PackagePath};
//! use prefixer::engine::Prefixer;
//! use prefixer::host::mock::MockHost;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let (conventions, _) = NamingConventions::parse("Blueprint,BP_");
//! let door = AssetRef {
//!     path: PackagePath::new("/Game/Props").unwrap(),
//!     name: AssetName::new("Door").unwrap(),
//!     class: ClassName::new("Blueprint").unwrap(),
//! };
//! let host = MockHost::with_assets(vec![door.clone()]);
//!
//! let prefixer = Prefixer::new(&conventions, vec![], &host);
//! let report = prefixer.apply(&[door]).await;
//! assert_eq!(report.renamed.len(), 1);
//! assert_eq!(report.renamed[0].new_name.as_str(), "BP_Door");
//! # });
//! ```

use crate::core::conventions::NamingConventions;
use crate::core::prefix;
use crate::core::types::{AssetName, AssetRef, ClassName};
use crate::host::{AssetHost, HostError};

/// Why an asset was skipped rather than renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The asset's class is on the configured skip list.
    SkippedClass,
    /// No prefix is configured for the asset's class.
    NoConvention,
    /// The name already carries the configured prefix.
    AlreadyPrefixed,
    /// Undo only: the name does not carry the configured prefix.
    NotPrefixed,
    /// The prefixed (or stripped) name would be invalid.
    InvalidResult(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::SkippedClass => write!(f, "class is excluded"),
            SkipReason::NoConvention => write!(f, "no prefix configured for class"),
            SkipReason::AlreadyPrefixed => write!(f, "already prefixed"),
            SkipReason::NotPrefixed => write!(f, "does not carry the prefix"),
            SkipReason::InvalidResult(msg) => write!(f, "resulting name invalid: {}", msg),
        }
    }
}

/// A successful (or previewed) rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    /// The asset as it was before the rename.
    pub asset: AssetRef,
    /// The name the asset now carries.
    pub new_name: AssetName,
}

impl RenameRecord {
    /// Object path the asset lives at after the rename.
    pub fn new_path(&self) -> String {
        self.asset.path.object_path(self.new_name.as_str())
    }
}

/// Per-asset outcomes of a batch operation.
///
/// Every input asset lands in exactly one bucket.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Assets that were renamed (or would be, in dry-run mode).
    pub renamed: Vec<RenameRecord>,
    /// Assets that were skipped, with the reason.
    pub skipped: Vec<(AssetRef, SkipReason)>,
    /// Assets whose rename the host failed or denied.
    pub failed: Vec<(AssetRef, HostError)>,
}

impl BatchReport {
    /// Whether any host operation failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Total number of assets accounted for.
    pub fn total(&self) -> usize {
        self.renamed.len() + self.skipped.len() + self.failed.len()
    }
}

/// Outcome of handling a single asset-added event.
#[derive(Debug)]
pub enum EventOutcome {
    /// The asset was renamed to carry its prefix.
    Renamed(RenameRecord),
    /// The asset was left alone.
    Skipped(SkipReason),
    /// The host refused or failed the rename.
    Failed(HostError),
}

/// Applies and undoes naming-convention prefixes through a host.
pub struct Prefixer<'a> {
    conventions: &'a NamingConventions,
    skip_classes: Vec<ClassName>,
    host: &'a dyn AssetHost,
    dry_run: bool,
}

impl<'a> Prefixer<'a> {
    /// Create a prefixer over a conventions table and a host.
    ///
    /// # Arguments
    ///
    /// * `conventions` - The class-to-prefix table, loaded at startup
    /// * `skip_classes` - Classes never touched (derived/generated types)
    /// * `host` - The host that owns the assets
    pub fn new(
        conventions: &'a NamingConventions,
        skip_classes: Vec<ClassName>,
        host: &'a dyn AssetHost,
    ) -> Self {
        Self {
            conventions,
            skip_classes,
            host,
            dry_run: false,
        }
    }

    /// Preview mode: record what would be renamed without calling the host.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Decide what applying the convention to one asset means.
    ///
    /// Returns the new name, or the reason nothing should happen.
    fn decide_apply(&self, asset: &AssetRef) -> Result<AssetName, SkipReason> {
        if self.skip_classes.contains(&asset.class) {
            return Err(SkipReason::SkippedClass);
        }
        let Some(prefix) = self.conventions.prefix_for(&asset.class) else {
            return Err(SkipReason::NoConvention);
        };
        if prefix.is_empty() {
            // An empty prefix is "no convention", not "already satisfied".
            return Err(SkipReason::NoConvention);
        }
        if prefix::has_prefix(asset.name.as_str(), prefix) {
            return Err(SkipReason::AlreadyPrefixed);
        }
        AssetName::new(prefix::apply_prefix(asset.name.as_str(), prefix))
            .map_err(|e| SkipReason::InvalidResult(e.to_string()))
    }

    /// Decide what undoing the convention on one asset means.
    fn decide_undo(&self, asset: &AssetRef) -> Result<AssetName, SkipReason> {
        if self.skip_classes.contains(&asset.class) {
            return Err(SkipReason::SkippedClass);
        }
        let Some(prefix) = self.conventions.prefix_for(&asset.class) else {
            return Err(SkipReason::NoConvention);
        };
        let Some(stripped) = prefix::strip_prefix(asset.name.as_str(), prefix) else {
            return Err(SkipReason::NotPrefixed);
        };
        AssetName::new(stripped).map_err(|e| SkipReason::InvalidResult(e.to_string()))
    }

    /// Execute one decided rename against the host.
    async fn execute(&self, asset: &AssetRef, new_name: AssetName) -> Result<RenameRecord, HostError> {
        let record = RenameRecord {
            asset: asset.clone(),
            new_name,
        };
        if !self.dry_run {
            self.host
                .rename_asset(&asset.object_path(), &record.new_path())
                .await?;
        }
        Ok(record)
    }

    /// Apply prefixes to a batch of assets.
    ///
    /// Assets are processed in order; a failure on one never halts the
    /// rest. One application is idempotent: assets renamed by a previous
    /// apply land in the skipped bucket as [`SkipReason::AlreadyPrefixed`].
    pub async fn apply(&self, assets: &[AssetRef]) -> BatchReport {
        let mut report = BatchReport::default();
        for asset in assets {
            match self.decide_apply(asset) {
                Ok(new_name) => match self.execute(asset, new_name).await {
                    Ok(record) => report.renamed.push(record),
                    Err(e) => report.failed.push((asset.clone(), e)),
                },
                Err(reason) => report.skipped.push((asset.clone(), reason)),
            }
        }
        report
    }

    /// Strip previously applied prefixes from a batch of assets.
    ///
    /// Strips exactly the configured prefix for each asset's class.
    /// Assets that do not carry their prefix are skipped.
    pub async fn undo(&self, assets: &[AssetRef]) -> BatchReport {
        let mut report = BatchReport::default();
        for asset in assets {
            match self.decide_undo(asset) {
                Ok(new_name) => match self.execute(asset, new_name).await {
                    Ok(record) => report.renamed.push(record),
                    Err(e) => report.failed.push((asset.clone(), e)),
                },
                Err(reason) => report.skipped.push((asset.clone(), reason)),
            }
        }
        report
    }

    /// Handle one asset-added event.
    ///
    /// Called by the watch loop for every newly discovered asset; tests
    /// call it directly with synthetic events.
    pub async fn on_asset_added(&self, asset: &AssetRef) -> EventOutcome {
        match self.decide_apply(asset) {
            Ok(new_name) => match self.execute(asset, new_name).await {
                Ok(record) => EventOutcome::Renamed(record),
                Err(e) => EventOutcome::Failed(e),
            },
            Err(reason) => EventOutcome::Skipped(reason),
        }
    }
}
