//! Level resources - per-level game assets from local and remote catalogs
//!
//! This module supplies everything a level screen needs to render a round:
//! card images, the face-off image, the level icon and a difficulty rating.
//!
//! # Overview
//!
//! Two catalogs back the lookup:
//! - The local catalog is built once at construction from asset ids bundled
//!   with the application and never changes.
//! - The remote catalog is fetched on demand from the `levels` collection of
//!   the document store, sorted by difficulty, and cached in memory until the
//!   next successful fetch replaces it wholesale.
//!
//! # Architecture
//!
//! ```text
//! Document store (levels collection)
//!     │  fetch_all, one-shot
//!     ▼
//! LevelsResourcesHolder
//!     ├── local catalog    ← bundled asset ids + AssetResolver
//!     └── remote catalog   ← Option<Vec<LevelResources>> behind RwLock
//!            │
//!            ▼
//! get_level_resources / get_all_levels_resources
//! ```
//!
//! Lookups search the local catalog first and fall back to the remote one;
//! a name that collides across catalogs resolves to the local record.

mod error;
mod holder;
mod local;
mod remote;
mod resources;

pub use error::LevelsError;
pub use holder::LevelsResourcesHolder;
pub use local::{build_local_catalog, AssetResolver};
pub use remote::{
    COLLECTION_PATH, KEY_CARDS_URIS, KEY_DIFFICULTY, KEY_FACE_OFF_URI, KEY_ICON_URI,
};
pub use resources::{AssetUri, LevelResources};

#[cfg(test)]
mod tests;
