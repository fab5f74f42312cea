// Wire types for the Vagrant Cloud API. Responses only declare the
// fields the CLI actually renders; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// JSON error envelope attached to failure responses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Response to `GET /user/{username}`.
#[derive(Debug, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub boxes: Vec<BoxSummary>,
}

/// One box in a user listing.
#[derive(Debug, Deserialize)]
pub struct BoxSummary {
    pub name: String,
    pub short_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub current_version: Option<CurrentVersion>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentVersion {
    pub version: String,
}

/// Response to `GET /box/{tag}`.
#[derive(Debug, Deserialize)]
pub struct BoxDetails {
    pub tag: String,
    pub short_description: Option<String>,
    #[serde(default)]
    pub versions: Vec<VersionSummary>,
}

/// One version in a box listing.
#[derive(Debug, Deserialize)]
pub struct VersionSummary {
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub providers: Vec<ProviderSummary>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderSummary {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response to `GET /box/{tag}/version/{version}`.
#[derive(Debug, Deserialize)]
pub struct VersionDetails {
    #[serde(default)]
    pub providers: Vec<ProviderSummary>,
}

/// Response to `GET .../provider/{provider}`.
#[derive(Debug, Deserialize)]
pub struct ProviderDetails {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub download_url: Option<String>,
}

/// Minimal slices of mutation responses; success messages only need the
/// identifying field.
#[derive(Debug, Deserialize)]
pub struct BoxRef {
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionRef {
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderRef {
    pub name: String,
}

/// Response to `GET .../provider/{provider}/upload`.
#[derive(Debug, Deserialize)]
pub struct UploadTarget {
    pub upload_path: String,
}

/// Body of `POST /boxes`. All fields are sent, absent ones as null, the
/// way the API documents the call.
#[derive(Debug, Serialize)]
pub struct NewBox<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub short_description: Option<&'a str>,
    pub is_private: bool,
}

/// Body of `POST /box/{tag}/versions`.
#[derive(Debug, Serialize)]
pub struct NewVersion<'a> {
    pub version: &'a str,
    pub description: Option<&'a str>,
}

/// Body of `POST .../providers`.
#[derive(Debug, Serialize)]
pub struct NewProvider<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
}

/// Partial update for `PUT /box/{tag}`. Only supplied fields serialize.
#[derive(Debug, Default, Serialize)]
pub struct BoxPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

impl BoxPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.short_description.is_none() && self.is_private.is_none()
    }
}

/// Partial update for `PUT /box/{tag}/version/{version}`.
#[derive(Debug, Default, Serialize)]
pub struct VersionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VersionPatch {
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.description.is_none()
    }
}

/// Partial update for `PUT .../provider/{provider}`.
#[derive(Debug, Default, Serialize)]
pub struct ProviderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProviderPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none()
    }
}
