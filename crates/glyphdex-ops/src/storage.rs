//! In-memory cached store for the live dataset.
//!
//! The store owns the single editable [`Dataset`]. Operations read a snapshot
//! with [`CatalogStore::load`], transform it purely, and hand the result back
//! through [`CatalogStore::install`], which swaps it in atomically together
//! with a fresh write timestamp. Concurrent readers therefore observe either
//! the pre- or the post-operation dataset, never an intermediate state.
//!
//! Staleness is advisory: the store never drops data by itself, it only
//! reports whether the last write is older than the configured window so the
//! caller can decide to re-ingest.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use glyphdex_core::Dataset;

/// Configuration for [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Age beyond which the cached dataset counts as stale (default: 7 days).
    pub max_age: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }
}

/// Mutex-guarded snapshot store for the live dataset.
///
/// Snapshots are `Arc<Dataset>`, so handing one to a reader is O(1) and the
/// lock is never held across anything slower than a pointer clone.
#[derive(Debug)]
pub struct CatalogStore {
    state: Mutex<StoreState>,
    config: StoreConfig,
}

#[derive(Debug)]
struct StoreState {
    dataset: Arc<Dataset>,
    written_at: Instant,
}

impl CatalogStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self::with_dataset(Dataset::new(), config)
    }

    /// Creates a store seeded with `dataset`.
    #[must_use]
    pub fn with_dataset(dataset: Dataset, config: StoreConfig) -> Self {
        Self {
            state: Mutex::new(StoreState {
                dataset: Arc::new(dataset),
                written_at: Instant::now(),
            }),
            config,
        }
    }

    /// Atomically replaces the stored dataset and refreshes the write
    /// timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn install(&self, dataset: Dataset) {
        let mut state = self.state.lock().expect("store lock poisoned");
        state.dataset = Arc::new(dataset);
        state.written_at = Instant::now();
    }

    /// A snapshot of the current dataset.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn load(&self) -> Arc<Dataset> {
        let state = self.state.lock().expect("store lock poisoned");
        Arc::clone(&state.dataset)
    }

    /// Time since the last install.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn age(&self) -> Duration {
        let state = self.state.lock().expect("store lock poisoned");
        state.written_at.elapsed()
    }

    /// Whether the last install is older than the configured window.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.age() > self.config.max_age
    }
}
