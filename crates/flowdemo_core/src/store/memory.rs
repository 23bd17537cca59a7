//! Generic mutex-guarded record sequence.

use super::{RepoError, RepoResult};
use crate::model::{now_epoch_ms, Creatable, Flagged, Patchable, Record, RecordId};
use std::sync::{Mutex, MutexGuard};

/// Ordered, exclusively owned sequence of records of one kind.
///
/// All reads hand out clones; no reference into the sequence escapes.
pub struct MemoryStore<T: Record> {
    label: &'static str,
    state: Mutex<StoreState<T>>,
}

struct StoreState<T> {
    records: Vec<T>,
    /// Highest id ever held, including deleted records.
    high_water: RecordId,
}

impl<T: Record> MemoryStore<T> {
    /// Creates an empty store. `label` names the store in error messages.
    pub fn new(label: &'static str) -> Self {
        Self::with_records(label, Vec::new())
    }

    /// Creates a store seeded with `records`, kept in the given order.
    pub fn with_records(label: &'static str, records: Vec<T>) -> Self {
        let high_water = records.iter().map(Record::id).max().unwrap_or(0);
        Self {
            label,
            state: Mutex::new(StoreState {
                records,
                high_water,
            }),
        }
    }

    /// Returns a snapshot copy of every record in insertion order.
    pub fn list_all(&self) -> RepoResult<Vec<T>> {
        Ok(self.lock()?.records.clone())
    }

    /// Returns the first record whose id equals `id`.
    pub fn get_by_id(&self, id: RecordId) -> RepoResult<Option<T>> {
        let state = self.lock()?;
        Ok(state.records.iter().find(|record| record.id() == id).cloned())
    }

    /// Removes the first record with `id`. Returns whether one was removed.
    pub fn delete(&self, id: RecordId) -> RepoResult<bool> {
        let mut state = self.lock()?;
        match state.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                state.records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, StoreState<T>>> {
        self.state
            .lock()
            .map_err(|_| RepoError::LockPoisoned { store: self.label })
    }
}

impl<T: Creatable> MemoryStore<T> {
    /// Appends a new record built from `draft`.
    ///
    /// The id is one above the highest id this store has ever held (1 for a
    /// fresh empty store); the creation timestamp is the current time.
    pub fn create(&self, draft: T::Draft) -> RepoResult<T> {
        let mut state = self.lock()?;
        let current_max = state.records.iter().map(Record::id).max().unwrap_or(0);
        let id = current_max.max(state.high_water) + 1;
        let record = T::from_draft(id, now_epoch_ms(), draft);
        state.records.push(record.clone());
        state.high_water = id;
        Ok(record)
    }
}

impl<T: Patchable> MemoryStore<T> {
    /// Merges `patch` over the record with `id` and returns the result.
    pub fn update(&self, id: RecordId, patch: T::Patch) -> RepoResult<Option<T>> {
        let mut state = self.lock()?;
        let Some(record) = state.records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        record.apply_patch(patch);
        Ok(Some(record.clone()))
    }
}

impl<T: Flagged> MemoryStore<T> {
    /// Flips the boolean flag of the record with `id` in place.
    pub fn toggle_flag(&self, id: RecordId) -> RepoResult<Option<T>> {
        let mut state = self.lock()?;
        let Some(record) = state.records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };
        record.toggle_flag();
        Ok(Some(record.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::model::feature::Feature;
    use crate::model::user::{NewUser, User, UserPatch};
    use crate::store::seed::{seed_features, seed_users};
    use crate::store::RepoError;
    use std::sync::Arc;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            is_active: true,
        }
    }

    #[test]
    fn empty_store_assigns_one() {
        let store: MemoryStore<User> = MemoryStore::new("users");
        assert!(store.list_all().unwrap().is_empty());
        let created = store.create(new_user("First")).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.list_all().unwrap(), vec![created]);
    }

    #[test]
    fn deleting_the_max_id_does_not_recycle_it() {
        let store = MemoryStore::with_records("users", seed_users());
        assert!(store.delete(3).unwrap());

        let created = store.create(new_user("Next")).unwrap();
        assert_eq!(created.id, 4);
    }

    #[test]
    fn listed_snapshot_is_detached_from_store() {
        let store = MemoryStore::with_records("users", seed_users());
        let mut snapshot = store.list_all().unwrap();
        snapshot.clear();
        snapshot.push(User {
            id: 99,
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            created_at: 0,
            is_active: true,
        });

        let ids: Vec<u64> = store.list_all().unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn update_leaves_unknown_id_untouched() {
        let store = MemoryStore::with_records("users", seed_users());
        let before = store.list_all().unwrap();
        let result = store
            .update(
                999,
                UserPatch {
                    name: Some("Nobody".to_string()),
                    ..UserPatch::default()
                },
            )
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn toggle_flips_only_the_flag() {
        let store: MemoryStore<Feature> = MemoryStore::with_records("features", seed_features());
        let before = store.get_by_id(1).unwrap().unwrap();
        let toggled = store.toggle_flag(1).unwrap().unwrap();

        assert_eq!(toggled.is_enabled, !before.is_enabled);
        assert_eq!(toggled.id, before.id);
        assert_eq!(toggled.created_at, before.created_at);
        assert_eq!(toggled.name, before.name);
        assert_eq!(store.get_by_id(1).unwrap().unwrap(), toggled);
    }

    #[test]
    fn poisoned_lock_surfaces_as_fault() {
        let store = Arc::new(MemoryStore::with_records("users", seed_users()));
        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the store");
        })
        .join();

        let err = store.list_all().unwrap_err();
        assert_eq!(err, RepoError::LockPoisoned { store: "users" });
        assert_eq!(err.to_string(), "users store lock poisoned");
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryStore::<User>::new("users"));
        let handles: Vec<_> = (0..8)
            .map(|index| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create(new_user(&format!("U{index}"))).unwrap().id)
            })
            .collect();

        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
    }
}
