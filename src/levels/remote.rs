//! Remote catalog schema and document coercion
//!
//! Field names are the schema contract with the `levels` collection on the
//! server; the document id doubles as the level name.

use serde_json::Value;

use super::error::LevelsError;
use super::resources::{AssetUri, LevelResources};
use crate::store::Document;

/// Remote collection holding one document per level
pub const COLLECTION_PATH: &str = "levels";

/// List of locator strings, one per card
pub const KEY_CARDS_URIS: &str = "cardImagesUris";

/// Numeric difficulty, truncated to an integer on read
pub const KEY_DIFFICULTY: &str = "difficulty";

/// Locator string for the face-off image
pub const KEY_FACE_OFF_URI: &str = "faceOffImageUri";

/// Locator string for the level icon
pub const KEY_ICON_URI: &str = "levelIconImageUri";

/// Coerce one remote document into a level record.
///
/// Fail-fast on malformed data: a missing or wrong-typed field aborts the
/// whole fetch rather than producing a partial record.
pub(crate) fn level_from_document(document: &Document) -> Result<LevelResources, LevelsError> {
    let card_images_uris = require_locator_list(document, KEY_CARDS_URIS)?;
    if card_images_uris.is_empty() {
        return Err(malformed(document, KEY_CARDS_URIS, "must not be empty"));
    }

    Ok(LevelResources {
        level_name: document.id.clone(),
        // The server stores difficulty as a floating value; truncate.
        difficulty: require_number(document, KEY_DIFFICULTY)? as i32,
        card_images_uris,
        face_off_image_uri: require_locator(document, KEY_FACE_OFF_URI)?,
        level_icon_image_uri: require_locator(document, KEY_ICON_URI)?,
    })
}

/// Sort a fetched catalog for presentation: ascending by difficulty.
///
/// The sort is stable, so documents sharing a difficulty keep their
/// server order.
pub(crate) fn sort_by_difficulty(mut levels: Vec<LevelResources>) -> Vec<LevelResources> {
    levels.sort_by_key(|level| level.difficulty);
    levels
}

fn require_field<'a>(document: &'a Document, key: &str) -> Result<&'a Value, LevelsError> {
    document
        .field(key)
        .ok_or_else(|| malformed(document, key, "is missing"))
}

fn require_number(document: &Document, key: &str) -> Result<f64, LevelsError> {
    require_field(document, key)?
        .as_f64()
        .ok_or_else(|| malformed(document, key, "is not a number"))
}

fn require_locator(document: &Document, key: &str) -> Result<AssetUri, LevelsError> {
    let uri = require_field(document, key)?
        .as_str()
        .ok_or_else(|| malformed(document, key, "is not a string"))?;
    Ok(AssetUri::from(uri))
}

fn require_locator_list(document: &Document, key: &str) -> Result<Vec<AssetUri>, LevelsError> {
    require_field(document, key)?
        .as_array()
        .ok_or_else(|| malformed(document, key, "is not a list"))?
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .map(AssetUri::from)
                .ok_or_else(|| malformed(document, key, "contains a non-string entry"))
        })
        .collect()
}

fn malformed(document: &Document, key: &str, problem: &str) -> LevelsError {
    LevelsError::MalformedDocument {
        id: document.id.clone(),
        reason: format!("field '{key}' {problem}"),
    }
}
