//! Bounded-staleness cache of per-household substitution snapshots.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::ingredient::SubstitutionSet;

#[derive(Debug, Clone)]
struct CachedSubstitutions {
    set: Arc<SubstitutionSet>,
    expires_at: Instant,
}

impl CachedSubstitutions {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// A read returns a snapshot at most `ttl` old. Writers call [`invalidate`](Self::invalidate)
/// before returning so the next read goes back to the store.
#[derive(Debug)]
pub struct SubstitutionCache {
    ttl: Duration,
    entries: DashMap<Uuid, CachedSubstitutions>,
    generation: AtomicU64,
}

impl SubstitutionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Token to hand back to [`insert`](Self::insert); a snapshot loaded across an
    /// invalidation is discarded instead of cached.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn get(&self, household_id: Uuid) -> Option<Arc<SubstitutionSet>> {
        if let Some(entry) = self.entries.get(&household_id)
            && !entry.is_expired()
        {
            return Some(entry.set.clone());
        }

        self.entries
            .remove_if(&household_id, |_, cached| cached.is_expired());
        None
    }

    pub fn insert(&self, household_id: Uuid, set: Arc<SubstitutionSet>, generation: u64) {
        if self.ttl.is_zero() || generation != self.generation() {
            return;
        }

        self.entries.retain(|_, cached| !cached.is_expired());
        self.entries.insert(
            household_id,
            CachedSubstitutions {
                set,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub fn invalidate(&self, household_id: Uuid) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.entries.remove(&household_id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
