//! Persisted set of favorited character ids.
//!
//! # Design
//! The set lives in memory as a `BTreeSet` and crosses the storage boundary as
//! a JSON array of integers under [`FAVORITES_KEY`], written whole on every
//! change. A missing key is the empty set. A value that does not decode as an
//! integer array is logged and treated as the empty set; the next write
//! replaces it.
//!
//! Read-modify-write cycles are serialized by a mutex, so concurrent callers
//! in one process never lose an update. Separate processes sharing the same
//! storage are last-write-wins.

use std::collections::BTreeSet;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::storage::Storage;
use crate::types::Character;

/// Storage key holding the favorites array. Unversioned.
pub const FAVORITES_KEY: &str = "marvel_favorites";

pub struct FavoritesStore<S> {
    storage: S,
    write_lock: Mutex<()>,
}

impl<S: Storage> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_favorite(&self, id: u64) -> Result<bool, StorageError> {
        Ok(self.load()?.contains(&id))
    }

    /// No-op when `id` is already a favorite.
    pub fn add_favorite(&self, id: u64) -> Result<(), StorageError> {
        self.update(|set| set.insert(id))?;
        Ok(())
    }

    /// No-op when `id` is not a favorite.
    pub fn remove_favorite(&self, id: u64) -> Result<(), StorageError> {
        self.update(|set| set.remove(&id))?;
        Ok(())
    }

    /// Flip membership of `id` and return the new state (`true` = favorited).
    pub fn toggle_favorite(&self, id: u64) -> Result<bool, StorageError> {
        let mut now_favorite = false;
        self.update(|set| {
            now_favorite = if set.remove(&id) { false } else { set.insert(id) };
            true
        })?;
        Ok(now_favorite)
    }

    /// Favorited ids in ascending order.
    pub fn get_favorites(&self) -> Result<Vec<u64>, StorageError> {
        Ok(self.load()?.into_iter().collect())
    }

    /// The subset of `all_characters` that is favorited, in input order.
    pub fn get_favorite_characters(
        &self,
        all_characters: &[Character],
    ) -> Result<Vec<Character>, StorageError> {
        let favorites = self.load()?;
        Ok(filter_favorites(all_characters, &favorites))
    }

    fn load(&self) -> Result<BTreeSet<u64>, StorageError> {
        let Some(raw) = self.storage.get(FAVORITES_KEY)? else {
            return Ok(BTreeSet::new());
        };
        match serde_json::from_str::<Vec<u64>>(&raw) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                warn!(key = FAVORITES_KEY, error = %e, "discarding unreadable favorites");
                Ok(BTreeSet::new())
            }
        }
    }

    fn save(&self, set: &BTreeSet<u64>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(set)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }

    /// Apply `change` under the write lock; persist only if it reports a change.
    fn update<F>(&self, change: F) -> Result<bool, StorageError>
    where
        F: FnOnce(&mut BTreeSet<u64>) -> bool,
    {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut set = self.load()?;
        let changed = change(&mut set);
        if changed {
            self.save(&set)?;
            debug!(count = set.len(), "favorites saved");
        }
        Ok(changed)
    }
}

/// Keep the characters whose id is in `favorites`, preserving input order.
pub fn filter_favorites(all_characters: &[Character], favorites: &BTreeSet<u64>) -> Vec<Character> {
    all_characters
        .iter()
        .filter(|c| favorites.contains(&c.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> FavoritesStore<MemoryStorage> {
        FavoritesStore::new(MemoryStorage::new())
    }

    fn character(id: u64, name: &str) -> Character {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn stored(store: &FavoritesStore<MemoryStorage>) -> Option<String> {
        store.storage().get(FAVORITES_KEY).unwrap()
    }

    #[test]
    fn empty_store_has_no_favorites() {
        let store = store();
        assert!(store.get_favorites().unwrap().is_empty());
        assert!(!store.is_favorite(1009368).unwrap());
        assert_eq!(stored(&store), None);
    }

    #[test]
    fn add_is_idempotent() {
        let store = store();
        store.add_favorite(7).unwrap();
        store.add_favorite(7).unwrap();
        assert_eq!(store.get_favorites().unwrap(), vec![7]);
        assert_eq!(stored(&store).as_deref(), Some("[7]"));
    }

    #[test]
    fn remove_absent_leaves_set_unchanged() {
        let store = store();
        store.add_favorite(3).unwrap();
        store.remove_favorite(99).unwrap();
        assert_eq!(store.get_favorites().unwrap(), vec![3]);
    }

    #[test]
    fn remove_present_persists() {
        let store = store();
        store.add_favorite(3).unwrap();
        store.add_favorite(4).unwrap();
        store.remove_favorite(3).unwrap();
        assert!(!store.is_favorite(3).unwrap());
        assert_eq!(stored(&store).as_deref(), Some("[4]"));
    }

    #[test]
    fn toggle_round_trip_reports_new_state() {
        let store = store();
        assert!(store.toggle_favorite(42).unwrap());
        assert!(store.is_favorite(42).unwrap());
        assert!(!store.toggle_favorite(42).unwrap());
        assert!(!store.is_favorite(42).unwrap());
    }

    #[test]
    fn existing_array_with_duplicates_is_read_as_set() {
        let store = store();
        store.storage().set(FAVORITES_KEY, "[5,1,5,3]").unwrap();
        assert_eq!(store.get_favorites().unwrap(), vec![1, 3, 5]);
        store.add_favorite(2).unwrap();
        assert_eq!(stored(&store).as_deref(), Some("[1,2,3,5]"));
    }

    #[test]
    fn corrupt_value_reads_as_empty_and_is_replaced() {
        let store = store();
        store.storage().set(FAVORITES_KEY, "{not json").unwrap();
        assert!(store.get_favorites().unwrap().is_empty());
        assert!(!store.is_favorite(1).unwrap());

        assert!(store.toggle_favorite(1).unwrap());
        assert_eq!(stored(&store).as_deref(), Some("[1]"));
    }

    #[test]
    fn non_integer_array_is_treated_as_corrupt() {
        let store = store();
        store.storage().set(FAVORITES_KEY, r#"["a","b"]"#).unwrap();
        assert!(store.get_favorites().unwrap().is_empty());
    }

    #[test]
    fn favorite_characters_are_the_favorited_subset() {
        let store = store();
        let all: Vec<Character> = [
            (1009220, "Captain America"),
            (1009368, "Iron Man"),
            (1009351, "Hulk"),
            (1009618, "Scarlet Witch"),
            (1009718, "Doctor Strange"),
        ]
        .into_iter()
        .map(|(id, name)| character(id, name))
        .collect();

        store.add_favorite(1009351).unwrap();
        store.add_favorite(1009220).unwrap();
        store.add_favorite(1).unwrap();

        let favorites = store.get_favorite_characters(&all).unwrap();
        let ids: Vec<u64> = favorites.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1009220, 1009351]);
    }

    #[test]
    fn concurrent_toggles_do_not_lose_updates() {
        let store = std::sync::Arc::new(store());
        let handles: Vec<_> = (0..8u64)
            .map(|id| {
                let store = store.clone();
                std::thread::spawn(move || store.toggle_favorite(id).unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(store.get_favorites().unwrap(), (0..8).collect::<Vec<_>>());
    }
}
