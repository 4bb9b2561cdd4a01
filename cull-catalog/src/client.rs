use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;

use cull_core::config::{CatalogConfig, CatalogKind};
use cull_core::constants::{CATALOG_RETRY_ATTEMPTS, CATALOG_RETRY_BASE_MS};
use cull_core::errors::CatalogError;
use cull_core::library::{ItemKind, Tag, TrackedItem};
use cull_core::traits::{ICatalogClient, IRefreshTrigger};

use crate::models::{ArrMovie, ArrRootFolder, ArrSeries, ArrTag};
use crate::retry::with_retry;

/// Blocking client for an *arr-style v3 REST API, authenticated with the
/// `X-Api-Key` header.
///
/// Deletion granularity follows the evaluation unit: movies are deleted
/// through the API (which owns the `deleteFiles` / `addImportExclusion`
/// flags); a season has no delete endpoint of its own, so season items are
/// pruned by removing the season directory, and the post-run refresh
/// command brings the catalog back in sync with the disk.
pub struct ArrClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    kind: CatalogKind,
}

impl ArrClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            kind: config.kind,
        }
    }

    fn retry_delay() -> Duration {
        Duration::from_millis(CATALOG_RETRY_BASE_MS)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .map_err(|e| CatalogError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json().map_err(|e| CatalogError::Decode {
            reason: e.to_string(),
        })
    }

    fn item_resource(&self) -> &'static str {
        match self.kind {
            CatalogKind::Movies => "movie",
            CatalogKind::Series => "series",
        }
    }

    fn refresh_command(&self) -> &'static str {
        match self.kind {
            CatalogKind::Movies => "RefreshMovie",
            CatalogKind::Series => "RefreshSeries",
        }
    }

    fn delete_movie(
        &self,
        item: &TrackedItem,
        delete_files: bool,
        add_import_exclusion: bool,
    ) -> Result<(), CatalogError> {
        let url = format!(
            "{}/api/v3/movie/{}?deleteFiles={}&addImportExclusion={}",
            self.base_url, item.id, delete_files, add_import_exclusion
        );
        let response = self
            .http
            .delete(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .map_err(|e| CatalogError::Delete {
                label: item.label(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Delete {
                label: item.label(),
                reason: format!("catalog returned HTTP {}", status.as_u16()),
            });
        }
        Ok(())
    }

    fn delete_season(&self, item: &TrackedItem, delete_files: bool) -> Result<(), CatalogError> {
        if !delete_files {
            // A season is only represented by its files; with file deletion
            // off there is nothing to remove.
            tracing::debug!(item = %item.label(), "file deletion disabled, season left in place");
            return Ok(());
        }

        let dir = item.media_dir();
        std::fs::remove_dir_all(&dir).map_err(|e| CatalogError::Delete {
            label: item.label(),
            reason: format!("removing {}: {}", dir.display(), e),
        })
    }
}

impl ICatalogClient for ArrClient {
    fn list_items(&self) -> Result<Vec<TrackedItem>, CatalogError> {
        let path = format!("/api/v3/{}", self.item_resource());
        match self.kind {
            CatalogKind::Movies => {
                let movies: Vec<ArrMovie> =
                    with_retry("list items", CATALOG_RETRY_ATTEMPTS, Self::retry_delay(), || {
                        self.get_json(&path)
                    })?;
                Ok(movies.into_iter().map(TrackedItem::from).collect())
            }
            CatalogKind::Series => {
                let series: Vec<ArrSeries> =
                    with_retry("list items", CATALOG_RETRY_ATTEMPTS, Self::retry_delay(), || {
                        self.get_json(&path)
                    })?;
                Ok(series.into_iter().flat_map(ArrSeries::into_items).collect())
            }
        }
    }

    fn list_tags(&self) -> Result<Vec<Tag>, CatalogError> {
        let tags: Vec<ArrTag> =
            with_retry("list tags", CATALOG_RETRY_ATTEMPTS, Self::retry_delay(), || {
                self.get_json("/api/v3/tag")
            })?;
        Ok(tags.into_iter().map(Tag::from).collect())
    }

    fn root_folders(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let folders: Vec<ArrRootFolder> =
            with_retry("root folders", CATALOG_RETRY_ATTEMPTS, Self::retry_delay(), || {
                self.get_json("/api/v3/rootfolder")
            })?;
        Ok(folders.into_iter().map(|f| PathBuf::from(f.path)).collect())
    }

    fn delete_item(
        &self,
        item: &TrackedItem,
        delete_files: bool,
        add_import_exclusion: bool,
    ) -> Result<(), CatalogError> {
        match item.kind {
            ItemKind::Movie => self.delete_movie(item, delete_files, add_import_exclusion),
            ItemKind::Season { .. } => self.delete_season(item, delete_files),
        }
    }
}

impl IRefreshTrigger for ArrClient {
    fn name(&self) -> &str {
        "catalog"
    }

    /// Ask the catalog to rescan its library after a pass. The v3 command
    /// endpoint acknowledges with 201.
    fn trigger(&self) -> Result<(), CatalogError> {
        let url = format!("{}/api/v3/command", self.base_url);
        let body = serde_json::json!({ "name": self.refresh_command() });
        let response = self
            .http
            .post(&url)
            .header("X-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| CatalogError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 201 {
            return Err(CatalogError::Status { url, status });
        }
        Ok(())
    }
}
