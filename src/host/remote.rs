//! host::remote
//!
//! Remote Control host implementation.
//!
//! # Design
//!
//! This module implements the `AssetHost` trait against a running Unreal
//! editor through its Remote Control HTTP API. Every operation is a
//! `PUT /remote/object/call` invoking an `EditorAssetLibrary` function:
//!
//! - `ListAssets` for enumeration
//! - `DoesAssetExist` + `FindAssetData` for lookups
//! - `RenameAsset` for renames
//!
//! # Endpoint
//!
//! The editor serves the API on `http://127.0.0.1:30010` by default
//! (configurable via `host_url`). Remote Control must be enabled in the
//! project for any of this to answer.
//!
//! # Example
//!
//! ```ignore
//! use prefixer::host::remote::RemoteHost;
//! use prefixer::host::AssetHost;
//!
//! let host = RemoteHost::new("http://127.0.0.1:30010");
//! host.rename_asset("/Game/Props/Door", "/Game/Props/BP_Door").await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::traits::{AssetHost, HostError};
use crate::core::types::{AssetName, AssetRef, ClassName, PackagePath};

/// Object path of the editor scripting library all calls go through.
const EDITOR_ASSET_LIBRARY: &str =
    "/Script/EditorScriptingUtilities.Default__EditorAssetLibrary";

/// Remote Control host implementation.
///
/// Holds a reqwest [`Client`]; cheap to clone per command invocation.
#[derive(Debug, Clone)]
pub struct RemoteHost {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the Remote Control server
    base_url: String,
}

/// Request body for `/remote/object/call`.
#[derive(Debug, Serialize)]
struct RemoteCall<'a, P: Serialize> {
    #[serde(rename = "objectPath")]
    object_path: &'a str,
    #[serde(rename = "functionName")]
    function_name: &'a str,
    parameters: P,
}

/// Response envelope for `/remote/object/call`.
#[derive(Debug, Deserialize)]
struct CallResult<T> {
    #[serde(rename = "ReturnValue")]
    return_value: T,
}

#[derive(Debug, Serialize)]
struct ListAssetsParams<'a> {
    #[serde(rename = "DirectoryPath")]
    directory_path: &'a str,
    #[serde(rename = "bRecursive")]
    recursive: bool,
    #[serde(rename = "bIncludeFolder")]
    include_folder: bool,
}

#[derive(Debug, Serialize)]
struct AssetPathParams<'a> {
    #[serde(rename = "AssetPath")]
    asset_path: &'a str,
}

#[derive(Debug, Serialize)]
struct RenameAssetParams<'a> {
    #[serde(rename = "SourceAssetPath")]
    source_asset_path: &'a str,
    #[serde(rename = "DestinationAssetPath")]
    destination_asset_path: &'a str,
}

/// `FAssetData` as serialized by Remote Control (the fields we read).
#[derive(Debug, Deserialize)]
struct AssetData {
    #[serde(rename = "PackagePath")]
    package_path: String,
    #[serde(rename = "AssetName")]
    asset_name: String,
    #[serde(rename = "AssetClassPath")]
    asset_class_path: AssetClassPath,
}

#[derive(Debug, Deserialize)]
struct AssetClassPath {
    #[serde(rename = "AssetName")]
    asset_name: String,
}

impl RemoteHost {
    /// Create a new Remote Control host.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the Remote Control server, without a
    ///   trailing slash (e.g. `http://127.0.0.1:30010`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the object-call endpoint.
    fn call_url(&self) -> String {
        format!("{}/remote/object/call", self.base_url)
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Invoke an `EditorAssetLibrary` function and decode its return value.
    async fn call<P, R>(&self, function: &str, parameters: P) -> Result<R, HostError>
    where
        P: Serialize + Send + Sync,
        R: DeserializeOwned,
    {
        let body = RemoteCall {
            object_path: EDITOR_ASSET_LIBRARY,
            function_name: function,
            parameters,
        };

        let response = self
            .client
            .put(self.call_url())
            .headers(Self::headers())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let result: CallResult<R> = self.handle_response(response).await?;
        Ok(result.return_value)
    }

    /// Map a reqwest transport error to a `HostError`.
    fn map_transport_error(&self, e: reqwest::Error) -> HostError {
        if e.is_connect() || e.is_timeout() {
            HostError::ConnectionFailed(self.base_url.clone())
        } else {
            HostError::NetworkError(e.to_string())
        }
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, HostError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| HostError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {}", e),
            })
        } else {
            self.handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        &self,
        response: Response,
        status: StatusCode,
    ) -> Result<T, HostError> {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(HostError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch and convert asset data for one object path.
    async fn fetch_asset_data(&self, object_path: &str) -> Result<AssetRef, HostError> {
        let data: AssetData = self
            .call(
                "FindAssetData",
                AssetPathParams {
                    asset_path: object_path,
                },
            )
            .await?;
        convert_asset_data(data)
    }
}

/// Convert Remote Control asset data into a validated [`AssetRef`].
fn convert_asset_data(data: AssetData) -> Result<AssetRef, HostError> {
    let path = PackagePath::new(&data.package_path).map_err(|e| HostError::ApiError {
        status: 200,
        message: format!("host returned invalid package path: {}", e),
    })?;
    let name = AssetName::new(&data.asset_name).map_err(|e| HostError::ApiError {
        status: 200,
        message: format!("host returned invalid asset name: {}", e),
    })?;
    let class = ClassName::new(&data.asset_class_path.asset_name).map_err(|e| {
        HostError::ApiError {
            status: 200,
            message: format!("host returned invalid class name: {}", e),
        }
    })?;
    Ok(AssetRef { path, name, class })
}

/// Strip the `.ObjectName` suffix from an `Package.Object` path.
///
/// `ListAssets` returns object paths like `/Game/Props/Door.Door`; the
/// package part alone is what the rest of the tooling works with.
fn package_part(object_path: &str) -> &str {
    match object_path.split_once('.') {
        Some((package, _)) => package,
        None => object_path,
    }
}

#[async_trait]
impl AssetHost for RemoteHost {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn list_assets(&self, root: &PackagePath) -> Result<Vec<AssetRef>, HostError> {
        let paths: Vec<String> = self
            .call(
                "ListAssets",
                ListAssetsParams {
                    directory_path: root.as_str(),
                    recursive: true,
                    include_folder: false,
                },
            )
            .await?;

        let mut assets = Vec::with_capacity(paths.len());
        for object_path in &paths {
            assets.push(self.fetch_asset_data(package_part(object_path)).await?);
        }
        Ok(assets)
    }

    async fn get_asset(&self, object_path: &str) -> Result<Option<AssetRef>, HostError> {
        let exists: bool = self
            .call(
                "DoesAssetExist",
                AssetPathParams {
                    asset_path: object_path,
                },
            )
            .await?;
        if !exists {
            return Ok(None);
        }
        self.fetch_asset_data(object_path).await.map(Some)
    }

    async fn rename_asset(&self, old_path: &str, new_path: &str) -> Result<(), HostError> {
        let renamed: bool = self
            .call(
                "RenameAsset",
                RenameAssetParams {
                    source_asset_path: old_path,
                    destination_asset_path: new_path,
                },
            )
            .await?;

        if !renamed {
            return Err(HostError::RenameDenied(format!(
                "host refused to rename {} to {}",
                old_path, new_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let host = RemoteHost::new("http://127.0.0.1:30010/");
        assert_eq!(host.base_url(), "http://127.0.0.1:30010");
        assert_eq!(
            host.call_url(),
            "http://127.0.0.1:30010/remote/object/call"
        );
    }

    #[test]
    fn package_part_strips_object_suffix() {
        assert_eq!(package_part("/Game/Props/Door.Door"), "/Game/Props/Door");
        assert_eq!(package_part("/Game/Props/Door"), "/Game/Props/Door");
    }

    #[test]
    fn convert_asset_data_valid() {
        let data: AssetData = serde_json::from_str(
            r#"{
                "PackagePath": "/Game/Props",
                "AssetName": "Door",
                "AssetClassPath": { "PackageName": "/Script/Engine", "AssetName": "Blueprint" }
            }"#,
        )
        .unwrap();

        let asset = convert_asset_data(data).unwrap();
        assert_eq!(asset.object_path(), "/Game/Props/Door");
        assert_eq!(asset.class.as_str(), "Blueprint");
    }

    #[test]
    fn convert_asset_data_invalid_path() {
        let data: AssetData = serde_json::from_str(
            r#"{
                "PackagePath": "not-a-path",
                "AssetName": "Door",
                "AssetClassPath": { "AssetName": "Blueprint" }
            }"#,
        )
        .unwrap();

        assert!(matches!(
            convert_asset_data(data),
            Err(HostError::ApiError { .. })
        ));
    }

    #[test]
    fn call_body_shape() {
        let body = RemoteCall {
            object_path: EDITOR_ASSET_LIBRARY,
            function_name: "RenameAsset",
            parameters: RenameAssetParams {
                source_asset_path: "/Game/Door",
                destination_asset_path: "/Game/BP_Door",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["functionName"], "RenameAsset");
        assert_eq!(json["parameters"]["SourceAssetPath"], "/Game/Door");
        assert_eq!(json["parameters"]["DestinationAssetPath"], "/Game/BP_Door");
    }
}
