// API client module: a small blocking HTTP client for the Vagrant Cloud
// API. Intentionally synchronous: each command issues at most two
// sequential requests (the upload flow), nothing runs in the background.

pub mod error;
pub mod types;

pub use error::ApiError;

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;

use types::{
    BoxDetails, BoxPatch, BoxRef, ErrorBody, NewBox, NewProvider, NewVersion, ProviderDetails,
    ProviderPatch, ProviderRef, UploadTarget, User, VersionDetails, VersionPatch, VersionRef,
};

/// Production endpoint; overridable through `VAGRANT_CLOUD_API_URL`.
pub const DEFAULT_ENDPOINT: &str = "https://app.vagrantup.com/api/v1";

/// Token lookup order mandated by the CLI contract: `ATLAS_TOKEN` first,
/// then `VAGRANT_CLOUD_TOKEN`. Empty values count as unset.
pub fn token_from_env() -> Option<String> {
    std::env::var("ATLAS_TOKEN")
        .ok()
        .filter(|t| !t.is_empty())
        .or_else(|| std::env::var("VAGRANT_CLOUD_TOKEN").ok().filter(|t| !t.is_empty()))
}

/// Base URL for the API, with an environment override for testing.
pub fn endpoint_from_env() -> String {
    std::env::var("VAGRANT_CLOUD_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

/// Authenticated session against the Vagrant Cloud API. Read-only after
/// construction; handlers borrow it for the lifetime of the process.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the bearer token installed as a default header
    /// and an optional request timeout (none by default).
    pub fn new(
        base_url: impl Into<String>,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("API token contains characters not allowed in a header")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(ApiClient {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and translate non-success statuses into `ApiError`,
    /// draining the error envelope from the body when there is one.
    fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let res = req.send()?;
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let errors = res.json::<ErrorBody>().map(|b| b.errors).unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { errors },
            StatusCode::NOT_FOUND => ApiError::NotFound { errors },
            StatusCode::FORBIDDEN => ApiError::Forbidden { errors },
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation { errors },
            other => ApiError::Status {
                status: other.as_u16(),
                errors,
            },
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self.execute(self.client.get(self.url(path)))?;
        Ok(res.json()?)
    }

    /// `GET /authenticate` — succeeds only for a valid token.
    pub fn validate_token(&self) -> Result<(), ApiError> {
        self.execute(self.client.get(self.url("/authenticate")))
            .map(|_| ())
    }

    /// `GET /user/{username}`.
    pub fn user(&self, username: &str) -> Result<User, ApiError> {
        self.get_json(&format!("/user/{username}"))
    }

    /// `GET /box/{tag}`.
    pub fn box_details(&self, tag: &str) -> Result<BoxDetails, ApiError> {
        self.get_json(&format!("/box/{tag}"))
    }

    /// Preflight existence check: 404 means the box is absent, any other
    /// failure propagates untranslated.
    pub fn box_exists(&self, tag: &str) -> Result<bool, ApiError> {
        match self.execute(self.client.get(self.url(&format!("/box/{tag}")))) {
            Ok(_) => Ok(true),
            Err(ApiError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// `POST /boxes`.
    pub fn create_box(&self, body: &NewBox) -> Result<BoxRef, ApiError> {
        let res = self.execute(
            self.client
                .post(self.url("/boxes"))
                .json(&json!({ "box": body })),
        )?;
        Ok(res.json()?)
    }

    /// `PUT /box/{tag}` with only the supplied fields in the body.
    pub fn update_box(&self, tag: &str, patch: &BoxPatch) -> Result<BoxRef, ApiError> {
        let res = self.execute(
            self.client
                .put(self.url(&format!("/box/{tag}")))
                .json(&json!({ "box": patch })),
        )?;
        Ok(res.json()?)
    }

    /// `DELETE /box/{tag}`.
    pub fn delete_box(&self, tag: &str) -> Result<BoxRef, ApiError> {
        let res = self.execute(self.client.delete(self.url(&format!("/box/{tag}"))))?;
        Ok(res.json()?)
    }

    /// `GET /box/{tag}/version/{version}`.
    pub fn version_details(&self, tag: &str, version: &str) -> Result<VersionDetails, ApiError> {
        self.get_json(&format!("/box/{tag}/version/{version}"))
    }

    /// `POST /box/{tag}/versions`.
    pub fn create_version(&self, tag: &str, body: &NewVersion) -> Result<VersionRef, ApiError> {
        let res = self.execute(
            self.client
                .post(self.url(&format!("/box/{tag}/versions")))
                .json(&json!({ "version": body })),
        )?;
        Ok(res.json()?)
    }

    /// `PUT /box/{tag}/version/{version}` with only the supplied fields.
    pub fn update_version(
        &self,
        tag: &str,
        version: &str,
        patch: &VersionPatch,
    ) -> Result<(), ApiError> {
        self.execute(
            self.client
                .put(self.url(&format!("/box/{tag}/version/{version}")))
                .json(&json!({ "version": patch })),
        )
        .map(|_| ())
    }

    /// `DELETE /box/{tag}/version/{version}`.
    pub fn delete_version(&self, tag: &str, version: &str) -> Result<VersionRef, ApiError> {
        let res = self.execute(
            self.client
                .delete(self.url(&format!("/box/{tag}/version/{version}"))),
        )?;
        Ok(res.json()?)
    }

    /// `PUT /box/{tag}/version/{version}/release`.
    pub fn release_version(&self, tag: &str, version: &str) -> Result<VersionRef, ApiError> {
        let res = self.execute(
            self.client
                .put(self.url(&format!("/box/{tag}/version/{version}/release")))
                .json(&json!({})),
        )?;
        Ok(res.json()?)
    }

    /// `PUT /box/{tag}/version/{version}/revoke`.
    pub fn revoke_version(&self, tag: &str, version: &str) -> Result<VersionRef, ApiError> {
        let res = self.execute(
            self.client
                .put(self.url(&format!("/box/{tag}/version/{version}/revoke")))
                .json(&json!({})),
        )?;
        Ok(res.json()?)
    }

    /// `GET .../provider/{provider}`.
    pub fn provider_details(
        &self,
        tag: &str,
        version: &str,
        provider: &str,
    ) -> Result<ProviderDetails, ApiError> {
        self.get_json(&format!("/box/{tag}/version/{version}/provider/{provider}"))
    }

    /// `POST .../providers`.
    pub fn create_provider(
        &self,
        tag: &str,
        version: &str,
        body: &NewProvider,
    ) -> Result<ProviderRef, ApiError> {
        let res = self.execute(
            self.client
                .post(self.url(&format!("/box/{tag}/version/{version}/providers")))
                .json(&json!({ "provider": body })),
        )?;
        Ok(res.json()?)
    }

    /// `PUT .../provider/{provider}` with only the supplied fields.
    pub fn update_provider(
        &self,
        tag: &str,
        version: &str,
        provider: &str,
        patch: &ProviderPatch,
    ) -> Result<(), ApiError> {
        self.execute(
            self.client
                .put(self.url(&format!(
                    "/box/{tag}/version/{version}/provider/{provider}"
                )))
                .json(&json!({ "provider": patch })),
        )
        .map(|_| ())
    }

    /// `DELETE .../provider/{provider}`.
    pub fn delete_provider(
        &self,
        tag: &str,
        version: &str,
        provider: &str,
    ) -> Result<ProviderRef, ApiError> {
        let res = self.execute(self.client.delete(self.url(&format!(
            "/box/{tag}/version/{version}/provider/{provider}"
        ))))?;
        Ok(res.json()?)
    }

    /// `GET .../provider/{provider}/upload` — returns the server-assigned
    /// URL the box file must be PUT to.
    pub fn upload_target(
        &self,
        tag: &str,
        version: &str,
        provider: &str,
    ) -> Result<UploadTarget, ApiError> {
        self.get_json(&format!(
            "/box/{tag}/version/{version}/provider/{provider}/upload"
        ))
    }

    /// PUT the raw file bytes to a server-assigned upload URL. This is the
    /// one request that bypasses `base_url`: `upload_path` is absolute.
    pub fn upload_file(&self, upload_path: &str, file: &Path) -> Result<(), ApiError> {
        let handle = File::open(file).map_err(|source| ApiError::Io {
            path: file.display().to_string(),
            source,
        })?;
        self.execute(self.client.put(upload_path).body(handle))
            .map(|_| ())
    }
}
