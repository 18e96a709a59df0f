//! File-backed record collections.
//!
//! Each collection is one pretty-printed JSON array on disk. Every read loads
//! the whole file and every write replaces it; there is no index. Writers go
//! through [`Collection::update`], which holds a per-collection lock around the
//! load/mutate/save cycle so concurrent requests cannot lose each other's
//! changes.

use std::{
    marker::PhantomData,
    path::{Path, PathBuf},
};

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, info};

use crate::models::{Post, User};

pub const USERS_FILE: &str = "users.json";
pub const POSTS_FILE: &str = "posts.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A stored entity with a time-derived numeric identifier.
pub trait Record {
    fn id(&self) -> i64;
}

/// Milliseconds since the epoch, bumped past the largest existing id so ids
/// stay unique and increasing even when two records land in the same
/// millisecond. Call while holding the collection's write lock.
pub fn next_id<T: Record>(records: &[T]) -> i64 {
    let now = Utc::now().timestamp_millis();
    match records.iter().map(Record::id).max() {
        Some(last) if last >= now => last + 1,
        _ => now,
    }
}

pub struct Collection<T> {
    name: &'static str,
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(name: &'static str, path: PathBuf) -> Self {
        Self {
            name,
            path,
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file holding `[]` if it does not exist yet.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;
        if exists {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        self.save(&[]).await?;
        info!("Initialized {} collection at {}", self.name, self.path.display());
        Ok(())
    }

    /// Reads and parses the whole collection. A missing or corrupt file is an
    /// error; nothing is repaired.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the file with `records`, via a temp file and rename.
    pub async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(records)?;
        atomic_write(&self.path, &data)
            .await
            .map_err(|source| self.io_error(source))?;

        debug!("Saved {} {} records", records.len(), self.name);
        Ok(())
    }

    /// Runs one exclusive load/mutate/save cycle. Nothing is written when
    /// `mutate` fails.
    pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E> + Send,
        R: Send,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let outcome = mutate(&mut records)?;
        self.save(&records).await?;

        Ok(outcome)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

async fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("records"),
        uuid::Uuid::new_v4()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut file = fs::File::create(&temp_path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    drop(file);

    if let Err(err) = fs::rename(&temp_path, path).await {
        let _ = fs::remove_file(&temp_path).await;
        return Err(err);
    }

    Ok(())
}

/// The two collections the board persists.
pub struct RecordStore {
    pub users: Collection<User>,
    pub posts: Collection<Post>,
}

impl RecordStore {
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            users: Collection::new("users", dir.join(USERS_FILE)),
            posts: Collection::new("posts", dir.join(POSTS_FILE)),
        }
    }

    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        self.users.ensure_initialized().await?;
        self.posts.ensure_initialized().await?;
        Ok(())
    }
}
