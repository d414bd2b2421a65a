//! The resource holder - local-first lookup with a cached remote catalog

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::LevelsError;
use super::local::{build_local_catalog, AssetResolver};
use super::remote::{self, COLLECTION_PATH};
use super::resources::LevelResources;
use crate::store::DocumentStore;

/// Supplies per-level game assets from the bundled local catalog or the
/// remote `levels` collection.
///
/// The local catalog is built once at construction and never changes. The
/// remote catalog starts absent and is replaced wholesale by each successful
/// fetch; a failed fetch leaves whatever was there before. The cached slot
/// sits behind an `RwLock` so concurrent fetches stay safe - the last fetch
/// to complete wins, and each overwrite is atomic under the lock.
pub struct LevelsResourcesHolder {
    local: Vec<LevelResources>,
    remote: RwLock<Option<Vec<LevelResources>>>,
    store: Arc<dyn DocumentStore>,
}

impl LevelsResourcesHolder {
    /// Create a holder, building the local catalog from the resolver.
    pub fn new(resolver: &dyn AssetResolver, store: Arc<dyn DocumentStore>) -> Self {
        let local = build_local_catalog(resolver);
        debug!("Built local catalog with {} levels", local.len());

        Self {
            local,
            remote: RwLock::new(None),
            store,
        }
    }

    /// Look up a single level by name, local catalog first.
    ///
    /// A name that exists in both catalogs resolves to the local record.
    ///
    /// # Errors
    /// `RemoteUninitialized` if the name is absent locally and no remote
    /// fetch has succeeded yet; `NotFound` if the name is in neither catalog.
    pub async fn get_level_resources(
        &self,
        level_name: &str,
    ) -> Result<LevelResources, LevelsError> {
        if let Some(found) = find_by_name(&self.local, level_name) {
            return Ok(found.clone());
        }

        let remote = self.remote.read().await;
        let catalog = remote.as_ref().ok_or(LevelsError::RemoteUninitialized)?;

        find_by_name(catalog, level_name)
            .cloned()
            .ok_or_else(|| LevelsError::NotFound {
                name: level_name.to_string(),
            })
    }

    /// Return every level from one catalog.
    ///
    /// With `remote == false` this is the local catalog, immediately and with
    /// no network access. With `remote == true` it reads the whole `levels`
    /// collection from the authoritative server, sorts it ascending by
    /// difficulty and caches it before returning.
    pub async fn get_all_levels_resources(
        &self,
        remote: bool,
    ) -> Result<Vec<LevelResources>, LevelsError> {
        if !remote {
            return Ok(self.local.clone());
        }

        self.fetch_remote_catalog().await
    }

    /// One-shot fetch-and-cache of the remote catalog.
    async fn fetch_remote_catalog(&self) -> Result<Vec<LevelResources>, LevelsError> {
        debug!(
            "Fetching '{}' collection via {} store",
            COLLECTION_PATH,
            self.store.name()
        );

        let documents = self
            .store
            .fetch_all(COLLECTION_PATH)
            .await
            .map_err(LevelsError::Fetch)?;

        let levels = documents
            .iter()
            .map(remote::level_from_document)
            .collect::<Result<Vec<_>, _>>()?;
        let levels = remote::sort_by_difficulty(levels);

        info!("Fetched {} remote levels", levels.len());

        // Cache only once every document coerced cleanly; a failed fetch
        // must leave the previous catalog untouched.
        *self.remote.write().await = Some(levels.clone());

        Ok(levels)
    }
}

fn find_by_name<'a>(catalog: &'a [LevelResources], name: &str) -> Option<&'a LevelResources> {
    catalog.iter().find(|level| level.level_name == name)
}
