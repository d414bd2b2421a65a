//! Unit tests for catalog construction and document coercion

use pretty_assertions::assert_eq;
use serde_json::json;

use super::error::LevelsError;
use super::local::{build_local_catalog, AssetResolver};
use super::remote::{level_from_document, sort_by_difficulty};
use super::resources::{AssetUri, LevelResources};
use crate::store::Document;

/// Resolver that maps asset ids to res:// locators, the way the platform
/// layer maps bundled drawables
struct PrefixResolver;

impl AssetResolver for PrefixResolver {
    fn resolve(&self, asset_id: &str) -> AssetUri {
        AssetUri::new(format!("res://memory/{asset_id}"))
    }
}

fn desert_document() -> Document {
    Document::new("Desert")
        .with_field("difficulty", json!(1.0))
        .with_field("cardImagesUris", json!(["a", "b"]))
        .with_field("faceOffImageUri", json!("c"))
        .with_field("levelIconImageUri", json!("d"))
}

#[test]
fn test_local_catalog_order_and_sizes() {
    let catalog = build_local_catalog(&PrefixResolver);

    let names: Vec<&str> = catalog
        .iter()
        .map(|level| level.level_name.as_str())
        .collect();
    assert_eq!(names, vec!["Sport", "Pets", "Nature"]);

    let card_counts: Vec<usize> = catalog
        .iter()
        .map(|level| level.card_images_uris.len())
        .collect();
    assert_eq!(card_counts, vec![5, 5, 7]);

    let difficulties: Vec<i32> = catalog.iter().map(|level| level.difficulty).collect();
    assert_eq!(difficulties, vec![0, 0, 2]);
}

#[test]
fn test_local_catalog_resolves_every_asset() {
    let catalog = build_local_catalog(&PrefixResolver);

    for level in &catalog {
        for uri in &level.card_images_uris {
            assert!(uri.as_str().starts_with("res://memory/"));
        }
        assert!(level.face_off_image_uri.as_str().starts_with("res://memory/"));
        assert!(level
            .level_icon_image_uri
            .as_str()
            .starts_with("res://memory/"));
    }

    assert_eq!(
        catalog[0].card_images_uris[0],
        AssetUri::new("res://memory/sport_card1")
    );
}

#[test]
fn test_local_catalog_is_deterministic() {
    assert_eq!(
        build_local_catalog(&PrefixResolver),
        build_local_catalog(&PrefixResolver)
    );
}

#[test]
fn test_document_round_trip() {
    let level = level_from_document(&desert_document()).unwrap();

    assert_eq!(
        level,
        LevelResources {
            level_name: "Desert".to_string(),
            difficulty: 1,
            card_images_uris: vec![AssetUri::from("a"), AssetUri::from("b")],
            face_off_image_uri: AssetUri::from("c"),
            level_icon_image_uri: AssetUri::from("d"),
        }
    );
}

#[test]
fn test_difficulty_is_truncated_not_rounded() {
    let mut document = desert_document();
    document.fields.insert("difficulty".to_string(), json!(2.9));

    let level = level_from_document(&document).unwrap();
    assert_eq!(level.difficulty, 2);
}

#[test]
fn test_missing_difficulty_is_malformed() {
    let mut document = desert_document();
    document.fields.remove("difficulty");

    let err = level_from_document(&document).unwrap_err();
    match err {
        LevelsError::MalformedDocument { id, reason } => {
            assert_eq!(id, "Desert");
            assert!(reason.contains("difficulty"));
        }
        other => panic!("expected MalformedDocument, got {other:?}"),
    }
}

#[test]
fn test_wrong_typed_field_is_malformed() {
    let mut document = desert_document();
    document
        .fields
        .insert("faceOffImageUri".to_string(), json!(42));

    assert!(matches!(
        level_from_document(&document),
        Err(LevelsError::MalformedDocument { .. })
    ));
}

#[test]
fn test_non_string_card_entry_is_malformed() {
    let mut document = desert_document();
    document
        .fields
        .insert("cardImagesUris".to_string(), json!(["a", 7]));

    assert!(matches!(
        level_from_document(&document),
        Err(LevelsError::MalformedDocument { .. })
    ));
}

#[test]
fn test_empty_card_list_is_malformed() {
    let mut document = desert_document();
    document
        .fields
        .insert("cardImagesUris".to_string(), json!([]));

    assert!(matches!(
        level_from_document(&document),
        Err(LevelsError::MalformedDocument { .. })
    ));
}

#[test]
fn test_sort_by_difficulty_ascending() {
    let levels: Vec<LevelResources> = [("C", 3), ("A", 1), ("B", 2)]
        .into_iter()
        .map(|(name, difficulty)| LevelResources {
            level_name: name.to_string(),
            difficulty,
            card_images_uris: vec![AssetUri::from("card")],
            face_off_image_uri: AssetUri::from("face"),
            level_icon_image_uri: AssetUri::from("icon"),
        })
        .collect();

    let sorted = sort_by_difficulty(levels);
    let names: Vec<&str> = sorted
        .iter()
        .map(|level| level.level_name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_sort_is_stable_for_equal_difficulties() {
    let levels: Vec<LevelResources> = [("First", 1), ("Second", 1), ("Zero", 0)]
        .into_iter()
        .map(|(name, difficulty)| LevelResources {
            level_name: name.to_string(),
            difficulty,
            card_images_uris: vec![AssetUri::from("card")],
            face_off_image_uri: AssetUri::from("face"),
            level_icon_image_uri: AssetUri::from("icon"),
        })
        .collect();

    let sorted = sort_by_difficulty(levels);
    let names: Vec<&str> = sorted
        .iter()
        .map(|level| level.level_name.as_str())
        .collect();
    assert_eq!(names, vec!["Zero", "First", "Second"]);
}
