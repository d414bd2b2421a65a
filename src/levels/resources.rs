//! Record types shared by both catalogs

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, stable reference to an image asset.
///
/// Either a platform resource reference (local catalog) or a remote URI
/// string (remote catalog). The data layer never interprets it; rendering
/// is the platform layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetUri(String);

impl AssetUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetUri {
    fn from(uri: &str) -> Self {
        Self(uri.to_string())
    }
}

impl From<String> for AssetUri {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

/// Art assets and metadata for one game level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelResources {
    /// Unique human-readable identifier, the lookup key across catalogs
    pub level_name: String,

    /// Ordering hint; the remote catalog is sorted ascending by this
    pub difficulty: i32,

    /// One image per matching card, in presentation order
    pub card_images_uris: Vec<AssetUri>,

    /// Image shown while two flipped cards face off
    pub face_off_image_uri: AssetUri,

    /// Icon shown in the level selection screen
    pub level_icon_image_uri: AssetUri,
}
