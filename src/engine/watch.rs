//! engine::watch
//!
//! Polling event source for newly added assets.
//!
//! # Design
//!
//! The Remote Control API is request/response, so asset-added events are
//! synthesized by diffing successive listings against a known set. The
//! initial listing seeds the set without firing events; only assets that
//! appear afterwards count as added. This mirrors the editor plugin's
//! behavior of ignoring the flood of registry events during editor load.
//!
//! Renames performed by the handler insert the new path into the known
//! set before the next poll, so the tool never reacts to its own work.

use std::collections::HashSet;

use crate::core::types::{AssetRef, PackagePath};
use crate::host::{AssetHost, HostError};

/// Known-asset state for the polling loop.
#[derive(Debug, Default)]
pub struct WatchState {
    known: HashSet<String>,
    seeded: bool,
}

impl WatchState {
    /// Create an empty state. The first poll will seed it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the state has been seeded by an initial listing.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Mark an object path as known (e.g. the target of a rename we
    /// just performed).
    pub fn note(&mut self, object_path: String) {
        self.known.insert(object_path);
    }

    /// Number of known object paths.
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Whether no paths are known yet.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

/// Poll the host once, returning assets added since the previous poll.
///
/// The first call seeds the state and returns no events. Removed assets
/// are forgotten, so a delete-and-recreate counts as added again.
pub async fn poll_once(
    host: &dyn AssetHost,
    root: &PackagePath,
    state: &mut WatchState,
) -> Result<Vec<AssetRef>, HostError> {
    let assets = host.list_assets(root).await?;

    let added = if state.seeded {
        assets
            .iter()
            .filter(|a| !state.known.contains(&a.object_path()))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    state.known = assets.iter().map(|a| a.object_path()).collect();
    state.seeded = true;
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AssetName, ClassName};
    use crate::host::mock::MockHost;

    fn asset(path: &str, name: &str, class: &str) -> AssetRef {
        AssetRef {
            path: PackagePath::new(path).unwrap(),
            name: AssetName::new(name).unwrap(),
            class: ClassName::new(class).unwrap(),
        }
    }

    #[tokio::test]
    async fn first_poll_seeds_without_events() {
        let host = MockHost::with_assets(vec![asset("/Game", "Door", "Blueprint")]);
        let root = PackagePath::new("/Game").unwrap();
        let mut state = WatchState::new();

        let added = poll_once(&host, &root, &mut state).await.unwrap();
        assert!(added.is_empty());
        assert!(state.is_seeded());
        assert_eq!(state.len(), 1);
    }

    #[tokio::test]
    async fn second_poll_reports_new_assets() {
        let host = MockHost::with_assets(vec![asset("/Game", "Door", "Blueprint")]);
        let root = PackagePath::new("/Game").unwrap();
        let mut state = WatchState::new();

        poll_once(&host, &root, &mut state).await.unwrap();
        host.add_asset(asset("/Game", "Window", "Blueprint"));

        let added = poll_once(&host, &root, &mut state).await.unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name.as_str(), "Window");
    }

    #[tokio::test]
    async fn noted_paths_do_not_fire() {
        // A rename we performed shows up in the next listing; noting the
        // target path keeps it from being reported as added.
        let host = MockHost::with_assets(vec![asset("/Game", "Door", "Blueprint")]);
        let root = PackagePath::new("/Game").unwrap();
        let mut state = WatchState::new();

        poll_once(&host, &root, &mut state).await.unwrap();

        host.rename_asset("/Game/Door", "/Game/BP_Door").await.unwrap();
        state.note("/Game/BP_Door".to_string());

        let added = poll_once(&host, &root, &mut state).await.unwrap();
        assert!(added.is_empty());
    }

    #[tokio::test]
    async fn seeded_empty_listing_still_counts_as_seeded() {
        let host = MockHost::new();
        let root = PackagePath::new("/Game").unwrap();
        let mut state = WatchState::new();

        let added = poll_once(&host, &root, &mut state).await.unwrap();
        assert!(added.is_empty());
        assert!(state.is_seeded());
        assert!(state.is_empty());

        host.add_asset(asset("/Game", "Door", "Blueprint"));
        let added = poll_once(&host, &root, &mut state).await.unwrap();
        assert_eq!(added.len(), 1);
    }
}
