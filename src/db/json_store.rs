// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flat-file JSON store with typed operations.
//!
//! Each collection is one JSON array document on disk, read and rewritten
//! whole on every operation. Appends hold a process-wide mutation gate
//! across the load-push-save cycle, so writers within this process cannot
//! lose each other's updates. Nothing guards against a second process.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Exercise, User};
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Handle to the two collection documents under a data directory.
#[derive(Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
    write_gate: Arc<Mutex<()>>,
}

impl JsonStore {
    /// Open a store rooted at `data_dir`, creating the directory and
    /// seeding missing collection documents with an empty array.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create data directory: {}", e)))?;

        let store = Self {
            data_dir,
            write_gate: Arc::new(Mutex::new(())),
        };

        for collection in [collections::USERS, collections::EXERCISES] {
            let path = store.document_path(collection);
            if !tokio::fs::try_exists(&path)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?
            {
                tracing::info!(collection, "Seeding empty collection document");
                store.write_document(&path, b"[]").await?;
            }
        }

        Ok(store)
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Load the full users sequence in storage order.
    pub async fn load_users(&self) -> Result<Vec<User>, AppError> {
        self.load(collections::USERS).await
    }

    /// Find a user by exact id match.
    pub async fn find_user(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .load_users()
            .await?
            .into_iter()
            .find(|user| user.id == id))
    }

    /// Append a user and persist the full sequence.
    pub async fn append_user(&self, user: User) -> Result<(), AppError> {
        let _gate = self.write_gate.lock().await;
        let mut users: Vec<User> = self.load(collections::USERS).await?;
        users.push(user);
        self.save(collections::USERS, &users).await
    }

    // ─── Exercise Operations ─────────────────────────────────────

    /// Load the full exercises sequence in storage order.
    pub async fn load_exercises(&self) -> Result<Vec<Exercise>, AppError> {
        self.load(collections::EXERCISES).await
    }

    /// Append an exercise and persist the full sequence.
    pub async fn append_exercise(&self, exercise: Exercise) -> Result<(), AppError> {
        let _gate = self.write_gate.lock().await;
        let mut exercises: Vec<Exercise> = self.load(collections::EXERCISES).await?;
        exercises.push(exercise);
        self.save(collections::EXERCISES, &exercises).await
    }

    // ─── Document I/O ────────────────────────────────────────────

    /// Whole-document read and parse.
    async fn load<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, AppError> {
        let path = self.document_path(collection);
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            AppError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Storage(format!("Malformed document {}: {}", path.display(), e))
        })
    }

    /// Whole-document rewrite. Last write wins.
    async fn save<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<(), AppError> {
        let path = self.document_path(collection);
        let bytes = serde_json::to_vec(records)
            .map_err(|e| AppError::Storage(format!("Failed to serialize {}: {}", collection, e)))?;
        self.write_document(&path, &bytes).await
    }

    /// Write via a sibling temp file and rename, so a crash mid-write
    /// never truncates the document.
    async fn write_document(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await.map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, path).await.map_err(|e| {
            AppError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })
    }
}
