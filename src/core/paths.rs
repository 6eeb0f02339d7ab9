//! core::paths
//!
//! Centralized path routing for project-scoped files.
//!
//! # Storage Layout
//!
//! Prefixer reads two files from the project's `Config/` directory:
//! - `NamingConventions.csv` - the class-to-prefix table
//! - `Prefixer.toml` - project-scope configuration overrides
//!
//! No code outside this module should compute `<project>/Config/...`
//! paths directly.
//!
//! # Example
//!
//! ```
//! use prefixer::core::paths::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new(PathBuf::from("/work/MyGame"));
//! assert_eq!(
//!     paths.conventions_path(),
//!     PathBuf::from("/work/MyGame/Config/NamingConventions.csv")
//! );
//! ```

use std::path::{Path, PathBuf};

/// Name of the conventions file inside the project config directory.
const CONVENTIONS_FILE: &str = "NamingConventions.csv";

/// Name of the project config file inside the project config directory.
const PROJECT_CONFIG_FILE: &str = "Prefixer.toml";

/// Path routing for a project's prefixer files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Root directory of the project (the directory holding the `.uproject`).
    pub root: PathBuf,
}

impl ProjectPaths {
    /// Create paths rooted at a known project directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project's configuration directory.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join("Config")
    }

    /// Path to the naming-conventions CSV file.
    pub fn conventions_path(&self) -> PathBuf {
        self.config_dir().join(CONVENTIONS_FILE)
    }

    /// Path to the project-scope config file.
    pub fn project_config_path(&self) -> PathBuf {
        self.config_dir().join(PROJECT_CONFIG_FILE)
    }
}

/// Discover the project root by walking up from `start`.
///
/// The project root is the nearest ancestor directory (including `start`
/// itself) that contains a `.uproject` file. Returns `None` if no
/// ancestor qualifies.
pub fn discover_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        if has_uproject(current) {
            return Some(current.to_path_buf());
        }
        dir = current.parent();
    }
    None
}

/// Check whether a directory contains a `.uproject` file.
fn has_uproject(dir: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return false;
    };
    entries.flatten().any(|entry| {
        entry.path().extension().is_some_and(|ext| ext == "uproject") && entry.path().is_file()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn paths_route_through_config_dir() {
        let paths = ProjectPaths::new(PathBuf::from("/work/MyGame"));
        assert_eq!(paths.config_dir(), PathBuf::from("/work/MyGame/Config"));
        assert_eq!(
            paths.conventions_path(),
            PathBuf::from("/work/MyGame/Config/NamingConventions.csv")
        );
        assert_eq!(
            paths.project_config_path(),
            PathBuf::from("/work/MyGame/Config/Prefixer.toml")
        );
    }

    #[test]
    fn discover_finds_uproject_in_start() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("MyGame.uproject"), "{}").unwrap();

        let found = discover_project_root(dir.path()).unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("MyGame.uproject"), "{}").unwrap();
        let nested = dir.path().join("Content/Props");
        fs::create_dir_all(&nested).unwrap();

        let found = discover_project_root(&nested).unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn discover_returns_none_without_uproject() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_project_root(dir.path()).is_none());
    }
}
