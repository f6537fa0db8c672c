use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStateError {
    /// The backing store could not be read or written.
    StorageUnavailable(String),
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStateError::StorageUnavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ViewStateError {}

/// Durable record of which booster ids have been presented.
///
/// `mark_viewed` and `remove_viewed` are idempotent. Implementations must
/// surface I/O failures as [`ViewStateError::StorageUnavailable`] instead of
/// pretending the write happened.
pub trait ViewStateStore: Send + Sync {
    fn mark_viewed(&self, booster_id: &str)
    -> impl Future<Output = Result<(), ViewStateError>> + Send;

    fn is_viewed(&self, booster_id: &str)
    -> impl Future<Output = Result<bool, ViewStateError>> + Send;

    fn viewed_ids(&self) -> impl Future<Output = Result<HashSet<String>, ViewStateError>> + Send;

    fn remove_viewed(&self, booster_id: &str)
    -> impl Future<Output = Result<(), ViewStateError>> + Send;
}

/// Clear every viewed record, one id at a time, in sequence.
///
/// Returns how many records were removed. Stops at the first failure; ids
/// removed before it stay removed.
pub async fn reset_viewed<S: ViewStateStore>(store: &S) -> Result<usize, ViewStateError> {
    let ids = store.viewed_ids().await?;
    let mut ids: Vec<String> = ids.into_iter().collect();
    ids.sort();

    for (cleared, id) in ids.iter().enumerate() {
        if let Err(e) = store.remove_viewed(id).await {
            tracing::warn!(
                cleared,
                remaining = ids.len() - cleared,
                "reset stopped at {id}: {e}"
            );
            return Err(e);
        }
    }
    tracing::debug!(count = ids.len(), "cleared viewed boosters");
    Ok(ids.len())
}

/// Volatile in-process view state.
#[derive(Debug, Default)]
pub struct MemoryViewState {
    viewed: Mutex<HashSet<String>>,
}

impl MemoryViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewed<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            viewed: Mutex::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    fn with_set<R>(&self, f: impl FnOnce(&mut HashSet<String>) -> R) -> Result<R, ViewStateError> {
        let mut guard = self
            .viewed
            .lock()
            .map_err(|_| ViewStateError::StorageUnavailable("view state lock poisoned".into()))?;
        Ok(f(&mut guard))
    }
}

impl ViewStateStore for MemoryViewState {
    async fn mark_viewed(&self, booster_id: &str) -> Result<(), ViewStateError> {
        self.with_set(|set| {
            set.insert(booster_id.to_string());
        })
    }

    async fn is_viewed(&self, booster_id: &str) -> Result<bool, ViewStateError> {
        self.with_set(|set| set.contains(booster_id))
    }

    async fn viewed_ids(&self) -> Result<HashSet<String>, ViewStateError> {
        self.with_set(|set| set.clone())
    }

    async fn remove_viewed(&self, booster_id: &str) -> Result<(), ViewStateError> {
        self.with_set(|set| {
            set.remove(booster_id);
        })
    }
}
