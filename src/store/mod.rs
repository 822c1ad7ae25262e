//! Flat-file JSON persistence.
//!
//! Each collection is one JSON array on disk, read and written as a whole
//! unit. Every mutation runs read → closure → write while holding that
//! collection's lock, so concurrent writers cannot clobber each other's
//! updates. A closure error aborts before anything is written.

mod repository;

pub use repository::*;

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;

use crate::errors::AppError;

/// Logical collection names, each backed by one JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Pets,
    Applications,
    Favorites,
    Appointments,
    QuizResults,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Users,
        Collection::Pets,
        Collection::Applications,
        Collection::Favorites,
        Collection::Appointments,
        Collection::QuizResults,
    ];

    /// File name backing this collection.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Users => "users.json",
            Collection::Pets => "pets.json",
            Collection::Applications => "applications.json",
            Collection::Favorites => "favorites.json",
            Collection::Appointments => "appointments.json",
            Collection::QuizResults => "quiz_results.json",
        }
    }

    fn index(self) -> usize {
        match self {
            Collection::Users => 0,
            Collection::Pets => 1,
            Collection::Applications => 2,
            Collection::Favorites => 3,
            Collection::Appointments => 4,
            Collection::QuizResults => 5,
        }
    }
}

/// Whole-file JSON store with one async lock per collection.
pub struct FileStore {
    data_dir: PathBuf,
    locks: [Mutex<()>; 6],
}

impl FileStore {
    /// Open the store, creating the data directory and seeding missing
    /// collection files with empty arrays.
    pub async fn open(data_dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(data_dir).await?;

        let store = Self {
            data_dir: data_dir.to_path_buf(),
            locks: std::array::from_fn(|_| Mutex::new(())),
        };

        for collection in Collection::ALL {
            let path = store.path(collection);
            if tokio::fs::metadata(&path).await.is_err() {
                tokio::fs::write(&path, b"[]").await?;
            }
        }

        Ok(store)
    }

    fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    fn lock(&self, collection: Collection) -> &Mutex<()> {
        &self.locks[collection.index()]
    }

    /// Read an entire collection. A missing file reads as empty.
    pub async fn read<T>(&self, collection: Collection) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let _guard = self.lock(collection).lock().await;
        self.load(collection).await
    }

    /// Mutate a collection under its lock: read the whole array, apply the
    /// closure, write the whole array back. The closure's error aborts the
    /// write, so rejected mutations never touch disk.
    pub async fn update<T, R>(
        &self,
        collection: Collection,
        mutate: impl FnOnce(&mut Vec<T>) -> Result<R, AppError>,
    ) -> Result<R, AppError>
    where
        T: Serialize + DeserializeOwned,
    {
        let _guard = self.lock(collection).lock().await;
        let mut records = self.load(collection).await?;
        let out = mutate(&mut records)?;
        self.persist(collection, &records).await?;
        Ok(out)
    }

    async fn load<T>(&self, collection: Collection) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let bytes = match tokio::fs::read(self.path(collection)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn persist<T>(&self, collection: Collection, records: &[T]) -> Result<(), AppError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(self.path(collection), bytes).await?;
        Ok(())
    }
}
