//! Item image storage

use std::{
    fmt::Debug,
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::domain::items::records::ItemUuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("image file name is not usable")]
    InvalidFileName,

    #[error("failed to store image at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reduce an uploaded file name to its final path component.
///
/// Some browsers send the full client path, using either separator.
#[must_use]
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let name = file_name.trim().rsplit(['/', '\\']).next()?.trim();

    (!matches!(name, "" | "." | "..")).then(|| name.to_owned())
}

/// Stores uploaded images keyed by the item they belong to.
#[automock]
#[async_trait]
pub trait ImageStorage: Debug + Send + Sync {
    /// Copy `source` into the storage area for `item`, returning the stored path.
    async fn store(
        &self,
        item: ItemUuid,
        file_name: &str,
        source: &Path,
    ) -> Result<PathBuf, StorageError>;
}

/// Filesystem image storage laid out as `<root>/<item uuid>/<file name>`.
#[derive(Debug, Clone)]
pub struct FsImageStorage {
    root: PathBuf,
}

impl FsImageStorage {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStorage for FsImageStorage {
    async fn store(
        &self,
        item: ItemUuid,
        file_name: &str,
        source: &Path,
    ) -> Result<PathBuf, StorageError> {
        let file_name = sanitize_file_name(file_name).ok_or(StorageError::InvalidFileName)?;
        let dir = self.root.join(item.to_string());

        fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::Io {
                path: dir.clone(),
                source,
            })?;

        let destination = dir.join(file_name);

        fs::copy(source, &destination)
            .await
            .map_err(|source| StorageError::Io {
                path: destination.clone(),
                source,
            })?;

        debug!(item = %item, path = %destination.display(), "stored item image");

        Ok(destination)
    }
}
