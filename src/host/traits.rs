//! host::traits
//!
//! Host trait definition for interacting with the editor's content system.
//!
//! # Design
//!
//! The `AssetHost` trait is async because host operations involve network
//! I/O. All methods return `Result` to handle host errors gracefully.
//!
//! The host owns every asset. Prefixer never creates or destroys asset
//! records; it reads them and requests renames, and a denied rename never
//! compromises local state.
//!
//! # Example
//!
//! ```ignore
//! use prefixer::host::{AssetHost, HostError};
//! use prefixer::core::types::PackagePath;
//!
//! async fn count_assets(host: &dyn AssetHost) -> Result<usize, HostError> {
//!     let root = PackagePath::new("/Game").unwrap();
//!     let assets = host.list_assets(&root).await?;
//!     Ok(assets.len())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::core::types::{AssetRef, PackagePath};

/// Errors from host operations.
///
/// These error types map to common failure modes when talking to a
/// running editor over its remote API.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The editor could not be reached at all.
    #[error("editor not reachable at {0}")]
    ConnectionFailed(String),

    /// The requested asset was not found.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The host refused to perform a rename.
    #[error("rename denied: {0}")]
    RenameDenied(String),

    /// The remote API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error mid-request.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// The AssetHost trait for interacting with the editor's content system.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, HostError>`. Callers should handle:
/// - `ConnectionFailed` / `NetworkError`: Check the editor is running
///   with Remote Control enabled
/// - `NotFound`: Asset was deleted or moved since it was listed
/// - `RenameDenied`: The host vetoed the rename (asset locked, name
///   collision); log and continue with the rest of the batch
/// - `ApiError`: Display error message to user
#[async_trait]
pub trait AssetHost: Send + Sync {
    /// Get the host name (e.g., "remote", "mock").
    fn name(&self) -> &'static str;

    /// List all assets at or below a package path.
    ///
    /// # Errors
    ///
    /// - `ConnectionFailed` / `NetworkError` on transport problems
    /// - `ApiError` if the host rejects the query
    async fn list_assets(&self, root: &PackagePath) -> Result<Vec<AssetRef>, HostError>;

    /// Look up a single asset by object path.
    ///
    /// Returns `Ok(None)` if no asset exists at that path; reserve
    /// `NotFound` errors for operations where the asset must exist.
    async fn get_asset(&self, object_path: &str) -> Result<Option<AssetRef>, HostError>;

    /// Request a rename from one object path to another.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no asset exists at `old_path`
    /// - `RenameDenied` if the host refuses (e.g. target name taken)
    async fn rename_asset(&self, old_path: &str, new_path: &str) -> Result<(), HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_display() {
        assert_eq!(
            format!("{}", HostError::ConnectionFailed("http://127.0.0.1:30010".into())),
            "editor not reachable at http://127.0.0.1:30010"
        );
        assert_eq!(
            format!("{}", HostError::NotFound("/Game/Door".into())),
            "asset not found: /Game/Door"
        );
        assert_eq!(
            format!("{}", HostError::RenameDenied("target exists".into())),
            "rename denied: target exists"
        );
        assert_eq!(
            format!(
                "{}",
                HostError::ApiError {
                    status: 500,
                    message: "internal error".into()
                }
            ),
            "API error: 500 - internal error"
        );
        assert_eq!(
            format!("{}", HostError::NetworkError("connection reset".into())),
            "network error: connection reset"
        );
    }
}
