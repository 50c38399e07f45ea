use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

/// Faults surfaced by the grid's atomic invocation path.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key {0} not found in grid")]
    KeyNotFound(u64),
    #[error("atomic invocation failed: {0}")]
    Internal(String),
}

/// Sharded in-memory keyed map with a per-key atomic read-modify-write
/// primitive.
///
/// Each key lives in exactly one shard and every `invoke` holds that shard's
/// lock for the duration of the mutator, so invocations against the same key
/// are serialized: each one observes either the initial value or the fully
/// committed result of a prior invocation, never an intermediate state.
/// Keys mapping to different shards proceed in parallel.
pub struct GridMap<V> {
    shards: Vec<Mutex<HashMap<u64, V>>>,
}

impl<V: Clone> GridMap<V> {
    /// Shard count is fixed at construction. It affects only cross-key
    /// parallelism, never correctness.
    pub fn with_shards(shards: usize) -> Self {
        let shards = shards.max(1);
        Self {
            shards: (0..shards).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    fn shard(&self, key: u64) -> &Mutex<HashMap<u64, V>> {
        let index = (key % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    fn lock_shard(&self, key: u64) -> Result<std::sync::MutexGuard<'_, HashMap<u64, V>>, StoreError> {
        self.shard(key)
            .lock()
            .map_err(|_| StoreError::Internal(format!("shard lock poisoned for key {}", key)))
    }

    /// Population-time write. Replaces any existing value for the key.
    pub fn insert(&self, key: u64, value: V) {
        // Poisoning is unreachable in practice (mutator panics are caught
        // before unwinding through the guard); recover the map regardless.
        let mut shard = self
            .shard(key)
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        shard.insert(key, value);
    }

    /// Snapshot read: a clone of the stored value at some committed state.
    pub fn get(&self, key: u64) -> Option<V> {
        let shard = self
            .shard(key)
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        shard.get(&key).cloned()
    }

    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| {
                shard
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .len()
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Administrative reset before re-population.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clear();
        }
    }

    /// Atomically read-modify-write the entry for `key`.
    ///
    /// The mutator runs against a staged copy of the current value while the
    /// key's shard is locked. On normal return the staged value is committed
    /// and the mutator's result handed back. If the key is absent the call
    /// fails with `KeyNotFound`; if the mutator panics the stored value is
    /// left entirely unchanged and the call fails with `Internal`. The lock
    /// is held only for the duration of this call, never across awaits.
    pub fn invoke<R, F>(&self, key: u64, mutator: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut V) -> R,
    {
        let mut shard = self.lock_shard(key)?;
        let current = shard.get(&key).ok_or(StoreError::KeyNotFound(key))?;

        let mut staged = current.clone();
        match panic::catch_unwind(AssertUnwindSafe(|| mutator(&mut staged))) {
            Ok(result) => {
                shard.insert(key, staged);
                Ok(result)
            }
            Err(_) => Err(StoreError::Internal(format!(
                "mutator panicked for key {}",
                key
            ))),
        }
    }
}
