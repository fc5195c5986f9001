use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Service handing out per-lot locks that serialize occupancy transitions.
///
/// Each parking lot gets its own async mutex, created lazily on first use and
/// kept for the lifetime of the process. Holding a lot's lock while running a
/// check-in or check-out keeps the read-check-write sequence for that lot free
/// of interleaving; transitions against different lots proceed in parallel.
#[derive(Clone)]
pub struct LotLockService {
    locks: Arc<Mutex<HashMap<i32, Arc<Mutex<()>>>>>,
}

impl LotLockService {
    /// Creates a new LotLockService instance with no locks allocated.
    pub fn new() -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Acquires the lock for a parking lot, waiting if another transition
    /// against the same lot currently holds it.
    ///
    /// The returned guard is owned, so it can be held across the awaits of a
    /// database transaction. The lock is released when the guard drops.
    ///
    /// # Arguments
    /// * `parking_id` - Database ID of the parking lot to lock
    ///
    /// # Returns
    /// The guard for the lot's lock.
    pub async fn acquire(&self, parking_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(parking_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        lock.lock_owned().await
    }

    /// Returns how many lots have had a lock allocated.
    #[cfg(test)]
    pub async fn allocated_locks(&self) -> usize {
        self.locks.lock().await.len()
    }
}

impl Default for LotLockService {
    fn default() -> Self {
        Self::new()
    }
}
