//! Local catalog - levels bundled with the application

use super::resources::{AssetUri, LevelResources};

/// Resolves an application-local asset id to a stable locator.
///
/// Implemented by the platform layer on top of its resource system.
/// Deterministic and infallible: an asset id that fails to resolve is a
/// packaging error, not a runtime condition.
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, asset_id: &str) -> AssetUri;
}

/// A bundled level definition, asset ids not yet resolved to locators
struct BundledLevel {
    name: &'static str,
    difficulty: i32,
    card_assets: &'static [&'static str],
    face_off_asset: &'static str,
    icon_asset: &'static str,
}

/// The levels compiled into the application
const BUNDLED_LEVELS: &[BundledLevel] = &[
    BundledLevel {
        name: "Sport",
        difficulty: 0,
        card_assets: &[
            "sport_card1",
            "sport_card2",
            "sport_card3",
            "sport_card4",
            "sport_card5",
        ],
        face_off_asset: "sport_face_off_image",
        icon_asset: "sport_icon",
    },
    BundledLevel {
        name: "Pets",
        difficulty: 0,
        card_assets: &[
            "pets_card1",
            "pets_card2",
            "pets_card3",
            "pets_card4",
            "pets_card5",
        ],
        face_off_asset: "pets_face_off_image",
        icon_asset: "pets_icon",
    },
    BundledLevel {
        name: "Nature",
        difficulty: 2,
        card_assets: &[
            "nature_card1",
            "nature_card2",
            "nature_card3",
            "nature_card4",
            "nature_card5",
            "nature_card6",
            "nature_card7",
        ],
        face_off_asset: "nature_face_off_image",
        icon_asset: "nature_icon",
    },
];

/// Build the fixed local catalog by resolving every bundled asset id.
///
/// Pure and total: given the same resolver, returns the same ordered list
/// every time within a process.
pub fn build_local_catalog(resolver: &dyn AssetResolver) -> Vec<LevelResources> {
    BUNDLED_LEVELS
        .iter()
        .map(|level| LevelResources {
            level_name: level.name.to_string(),
            difficulty: level.difficulty,
            card_images_uris: level
                .card_assets
                .iter()
                .map(|asset_id| resolver.resolve(asset_id))
                .collect(),
            face_off_image_uri: resolver.resolve(level.face_off_asset),
            level_icon_image_uri: resolver.resolve(level.icon_asset),
        })
        .collect()
}
