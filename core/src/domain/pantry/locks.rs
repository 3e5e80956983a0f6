use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

type LockTable = DashMap<Uuid, Arc<Mutex<()>>>;

/// Per-household advisory locks serializing read-decide-write sequences on pantry rows.
#[derive(Debug, Default)]
pub struct HouseholdLocks {
    locks: Arc<LockTable>,
}

/// Held for the duration of one household's critical section. The household's
/// entry is dropped from the table once no other caller holds or waits on it.
#[derive(Debug)]
pub struct HouseholdGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockTable>,
    household_id: Uuid,
}

impl Drop for HouseholdGuard {
    fn drop(&mut self) {
        self.guard.take();
        self.locks
            .remove_if(&self.household_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl HouseholdLocks {
    pub async fn acquire(&self, household_id: Uuid) -> HouseholdGuard {
        let lock = self.locks.entry(household_id).or_default().clone();
        let guard = lock.lock_owned().await;

        HouseholdGuard {
            guard: Some(guard),
            locks: self.locks.clone(),
            household_id,
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
