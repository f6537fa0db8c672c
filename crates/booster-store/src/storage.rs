use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use booster_core::{ViewStateError, ViewStateStore, reset_viewed};

use crate::error::{Result, StoreError};
use crate::store::{Store, ViewedRecord};

/// Async handle over a [`Store`].
///
/// Cloning shares the same connection. Every call runs on tokio's blocking
/// pool behind a mutex, so operations are serialized and never block the
/// caller's task. Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct BoosterStorage {
    store: Arc<Mutex<Store>>,
}

impl BoosterStorage {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Store::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Store::open_in_memory()?))
    }

    async fn run<T, F>(&self, op: F) -> std::result::Result<T, ViewStateError>
    where
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let joined = tokio::task::spawn_blocking(move || {
            let guard = store.lock().map_err(|_| StoreError::LockPoisoned)?;
            op(&guard)
        })
        .await;

        match joined {
            Ok(result) => result.map_err(|e| {
                tracing::warn!("booster storage failure: {e}");
                ViewStateError::from(e)
            }),
            Err(e) => Err(ViewStateError::StorageUnavailable(format!(
                "storage task failed: {e}"
            ))),
        }
    }

    pub async fn viewed_records(&self) -> std::result::Result<Vec<ViewedRecord>, ViewStateError> {
        self.run(|store| store.viewed_records()).await
    }

    pub async fn dev_mode(&self) -> std::result::Result<bool, ViewStateError> {
        self.run(|store| store.dev_mode()).await
    }

    pub async fn set_dev_mode(&self, enabled: bool) -> std::result::Result<(), ViewStateError> {
        self.run(move |store| store.set_dev_mode(enabled)).await
    }

    /// Remove every viewed record, one id at a time. Returns the count removed.
    pub async fn reset(&self) -> std::result::Result<usize, ViewStateError> {
        let cleared = reset_viewed(self).await?;
        tracing::info!("cleared {cleared} viewed booster records");
        Ok(cleared)
    }
}

impl ViewStateStore for BoosterStorage {
    async fn mark_viewed(&self, booster_id: &str) -> std::result::Result<(), ViewStateError> {
        let id = booster_id.to_string();
        self.run(move |store| store.mark_viewed(&id)).await
    }

    async fn is_viewed(&self, booster_id: &str) -> std::result::Result<bool, ViewStateError> {
        let id = booster_id.to_string();
        self.run(move |store| store.is_viewed(&id)).await
    }

    async fn viewed_ids(&self) -> std::result::Result<HashSet<String>, ViewStateError> {
        self.run(|store| store.viewed_ids()).await
    }

    async fn remove_viewed(&self, booster_id: &str) -> std::result::Result<(), ViewStateError> {
        let id = booster_id.to_string();
        self.run(move |store| store.remove_viewed(&id)).await
    }
}
