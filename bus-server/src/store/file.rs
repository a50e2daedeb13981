//! JSON snapshot store for development and testing without a database.
//!
//! Reads a document of the form `{ "stops": [...], "routes": [...] }` whose
//! rows have the same shape as the database tables. The file is re-read on
//! every fetch so edits show up without a restart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Route, Stop};

use super::TransitStore;
use super::error::StoreError;
use super::rows::{RouteRow, StopRow};

/// On-disk layout of a network snapshot.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub stops: Vec<StopRow>,
    #[serde(default)]
    pub routes: Vec<RouteRow>,
}

/// Store backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store reading from `path`. The file is not opened yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<NetworkFile, StoreError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|e| StoreError::Json {
            message: format!("{}: {}", self.path.display(), e),
        })
    }
}

impl TransitStore for FileStore {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, StoreError> {
        let file = self.read().await?;
        Ok(file.stops.into_iter().map(Stop::from).collect())
    }

    async fn fetch_routes(&self) -> Result<Vec<Route>, StoreError> {
        let file = self.read().await?;
        Ok(file.routes.into_iter().map(Route::from).collect())
    }
}
