use std::sync::Arc;
use tracing::debug;

use crate::error::StatsResult;
use crate::source::DataSource;
use crate::stats::game::GameRecord;
use crate::storage::{Games, RecordStore};

/// Reads data files through the record store.
///
/// A hit only takes the store's read lock. On a miss the file is read and
/// parsed without holding any lock, then inserted under the write lock.
/// Two concurrent misses on the same key both load the file and the second
/// insert overwrites the first with an equal value: redundant work, never
/// a wrong answer. Failed loads are not stored and are retried on the next
/// call.
#[derive(Clone)]
pub struct Loader {
    store: RecordStore,
    source: Arc<dyn DataSource>,
}

impl Loader {
    pub fn new(store: RecordStore, source: Arc<dyn DataSource>) -> Self {
        Self { store, source }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    pub fn load(&self, key: &str) -> StatsResult<Games> {
        if let Some(games) = self.store.get(key) {
            return Ok(games);
        }

        debug!("Cache miss for {key}, reading from source");
        let bytes = self.source.read(key)?;
        let games: Vec<GameRecord> = serde_json::from_slice(&bytes)?;
        let games = Arc::new(games);

        self.store.put(key, games.clone());
        debug!("Cached {} games for {key}", games.len());
        Ok(games)
    }
}
