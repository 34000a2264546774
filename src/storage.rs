use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::stats::game::GameRecord;

/// Games of one data file, in file order.
pub type Games = Arc<Vec<GameRecord>>;

type SharedRecords = Arc<RwLock<HashMap<String, Games>>>;

// In-memory table of parsed data files, keyed by storage key.
// Entries are never evicted nor updated in place: a key holds the same
// games for as long as the store lives. Clones share the same table.
#[derive(Clone, Default)]
pub struct RecordStore {
    data: SharedRecords,
}

impl RecordStore {
    pub fn new() -> RecordStore {
        RecordStore {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &str) -> Option<Games> {
        self.data.read().get(key).cloned()
    }

    // Last writer wins when two loads of the same key race. Both parsed the
    // same file, so the value is unchanged either way.
    pub fn put(&self, key: &str, games: Games) {
        self.data.write().insert(key.to_string(), games);
    }

    pub fn clear(&self) {
        self.data.write().clear();
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
