//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`AssetName`] - Validated asset display name
//! - [`ClassName`] - Validated asset class name
//! - [`PackagePath`] - Validated virtual package path (`/Game/...`)
//! - [`AssetRef`] - A reference to a host-managed asset
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use prefixer::core::types::{AssetName, ClassName, PackagePath};
//!
//! // Valid constructions
//! let name = AssetName::new("Door").unwrap();
//! let class = ClassName::new("Blueprint").unwrap();
//! let path = PackagePath::new("/Game/Props").unwrap();
//!
//! // Invalid constructions fail at creation time
//! assert!(AssetName::new("").is_err());
//! assert!(AssetName::new("has/slash").is_err());
//! assert!(PackagePath::new("Game/Props").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid asset name: {0}")]
    InvalidAssetName(String),

    #[error("invalid class name: {0}")]
    InvalidClassName(String),

    #[error("invalid package path: {0}")]
    InvalidPackagePath(String),
}

/// A validated asset display name.
///
/// Asset names are single path segments:
/// - Cannot be empty
/// - Cannot contain `/` or `\`
/// - Cannot contain whitespace or ASCII control characters
/// - Cannot contain `.` or `:` (reserved for object path notation)
///
/// # Example
///
/// ```
/// use prefixer::core::types::AssetName;
///
/// let name = AssetName::new("BP_Door").unwrap();
/// assert_eq!(name.as_str(), "BP_Door");
///
/// assert!(AssetName::new("").is_err());
/// assert!(AssetName::new("a b").is_err());
/// assert!(AssetName::new("a.b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetName(String);

impl AssetName {
    /// Create a new validated asset name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidAssetName` if the name violates the rules above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidAssetName(
                "asset name cannot be empty".into(),
            ));
        }
        for c in name.chars() {
            if c == '/' || c == '\\' {
                return Err(TypeError::InvalidAssetName(format!(
                    "asset name cannot contain '{}'",
                    c
                )));
            }
            if c == '.' || c == ':' {
                return Err(TypeError::InvalidAssetName(format!(
                    "asset name cannot contain '{}' (reserved for object paths)",
                    c
                )));
            }
            if c.is_whitespace() || c.is_control() {
                return Err(TypeError::InvalidAssetName(
                    "asset name cannot contain whitespace or control characters".into(),
                ));
            }
        }
        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AssetName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AssetName> for String {
    fn from(name: AssetName) -> String {
        name.0
    }
}

/// A validated asset class name (e.g. `Blueprint`, `Material`).
///
/// Class names follow the same single-segment rules as [`AssetName`],
/// except `.` is allowed because scripted classes can carry qualified
/// names (`Engine.Material`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    /// Create a new validated class name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidClassName` if the name is empty or
    /// contains separators, whitespace, or control characters.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidClassName(
                "class name cannot be empty".into(),
            ));
        }
        for c in name.chars() {
            if c == '/' || c == '\\' {
                return Err(TypeError::InvalidClassName(format!(
                    "class name cannot contain '{}'",
                    c
                )));
            }
            if c.is_whitespace() || c.is_control() {
                return Err(TypeError::InvalidClassName(
                    "class name cannot contain whitespace or control characters".into(),
                ));
            }
        }
        Ok(Self(name))
    }

    /// Get the class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ClassName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> String {
        name.0
    }
}

/// A validated virtual package path (e.g. `/Game/Props/Doors`).
///
/// Package paths name the folder an asset lives in:
/// - Must start with `/`
/// - Cannot contain `//`, `\`, whitespace, or control characters
/// - Cannot end with `/` (except the root `/`)
///
/// # Example
///
/// ```
/// use prefixer::core::types::PackagePath;
///
/// let path = PackagePath::new("/Game/Props").unwrap();
/// assert_eq!(path.as_str(), "/Game/Props");
/// assert_eq!(path.object_path("Door"), "/Game/Props/Door");
///
/// assert!(PackagePath::new("Game/Props").is_err());
/// assert!(PackagePath::new("/Game//Props").is_err());
/// assert!(PackagePath::new("/Game/Props/").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackagePath(String);

impl PackagePath {
    /// Create a new validated package path.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPackagePath` if the path violates the rules above.
    pub fn new(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        Self::validate(&path)?;
        Ok(Self(path))
    }

    fn validate(path: &str) -> Result<(), TypeError> {
        if path.is_empty() {
            return Err(TypeError::InvalidPackagePath(
                "package path cannot be empty".into(),
            ));
        }
        if !path.starts_with('/') {
            return Err(TypeError::InvalidPackagePath(
                "package path must start with '/'".into(),
            ));
        }
        if path.len() > 1 && path.ends_with('/') {
            return Err(TypeError::InvalidPackagePath(
                "package path cannot end with '/'".into(),
            ));
        }
        if path.contains("//") {
            return Err(TypeError::InvalidPackagePath(
                "package path cannot contain '//'".into(),
            ));
        }
        for c in path.chars() {
            if c == '\\' {
                return Err(TypeError::InvalidPackagePath(
                    "package path cannot contain '\\'".into(),
                ));
            }
            if c.is_whitespace() || c.is_control() {
                return Err(TypeError::InvalidPackagePath(
                    "package path cannot contain whitespace or control characters".into(),
                ));
            }
        }
        Ok(())
    }

    /// Get the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the full object path for an asset name under this package.
    pub fn object_path(&self, name: &str) -> String {
        if self.0 == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", self.0, name)
        }
    }

    /// Check whether this path is equal to or nested under `root`.
    pub fn is_under(&self, root: &PackagePath) -> bool {
        self == root
            || root.0 == "/"
            || self
                .0
                .strip_prefix(&root.0)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl std::fmt::Display for PackagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PackagePath {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PackagePath> for String {
    fn from(path: PackagePath) -> String {
        path.0
    }
}

/// A reference to a host-managed asset.
///
/// The host engine owns the asset; prefixer only reads these fields and
/// requests renames through the host API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    /// Package path of the folder containing the asset.
    pub path: PackagePath,
    /// Current display name of the asset.
    pub name: AssetName,
    /// Class of the asset (e.g. `Blueprint`).
    pub class: ClassName,
}

impl AssetRef {
    /// Full virtual path of the asset (`<package>/<name>`).
    pub fn object_path(&self) -> String {
        self.path.object_path(self.name.as_str())
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.object_path(), self.class)
    }
}
