//! The enabled-set store: which sets count toward the draft pool.

use super::resolver::SetMembership;
use super::storage::{Storage, StorageError};
use crate::catalog::SetCode;
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Storage key of the persisted enabled sets.
pub const ACTIVE_SETS_KEY: &str = "activeSets";

/// The sets enabled for drafting.
///
/// Persistence is explicit: [`ActiveSets::load`] at session start and
/// [`ActiveSets::save`] after changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSets {
    active: BTreeSet<SetCode>,
}

impl ActiveSets {
    /// Creates a store with every set enabled.
    #[instrument]
    pub fn all() -> Self {
        Self {
            active: SetCode::iter().collect(),
        }
    }

    /// Creates a store with no set enabled.
    #[instrument]
    pub fn none() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    /// Loads the enabled sets from storage.
    ///
    /// Falls back to every set enabled when nothing is stored, the storage
    /// fails, or the stored value is not a JSON list of set codes.
    #[instrument(skip(storage))]
    pub fn load(storage: &impl Storage) -> Self {
        let stored = match storage.get(ACTIVE_SETS_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!("No stored active sets, enabling all");
                return Self::all();
            }
            Err(err) => {
                warn!(%err, "Failed to load active sets, enabling all");
                return Self::all();
            }
        };

        match serde_json::from_str::<Vec<SetCode>>(&stored) {
            Ok(codes) => {
                info!(count = codes.len(), "Active sets loaded");
                Self {
                    active: codes.into_iter().collect(),
                }
            }
            Err(err) => {
                warn!(%err, "Stored active sets are corrupt, enabling all");
                Self::all()
            }
        }
    }

    /// Writes the enabled sets to storage as a JSON list of codes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the storage write fails.
    #[instrument(skip(self, storage), fields(count = self.active.len()))]
    pub fn save(&self, storage: &mut impl Storage) -> Result<(), StorageError> {
        let codes: Vec<SetCode> = self.active.iter().copied().collect();
        let value = serde_json::to_string(&codes)
            .map_err(|e| StorageError::new(format!("Failed to encode active sets: {}", e)))?;
        storage.set(ACTIVE_SETS_KEY, &value)?;
        debug!("Active sets saved");
        Ok(())
    }

    /// Returns true if `set` is enabled.
    pub fn is_active(&self, set: SetCode) -> bool {
        self.active.contains(&set)
    }

    /// Enables a disabled set or disables an enabled one.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, set: SetCode) {
        if !self.active.remove(&set) {
            self.active.insert(set);
        }
        debug!(%set, active = self.is_active(set), "Set toggled");
    }

    /// Enables every set.
    #[instrument(skip(self))]
    pub fn activate_all(&mut self) {
        self.active = SetCode::iter().collect();
    }

    /// Disables every set.
    #[instrument(skip(self))]
    pub fn deactivate_all(&mut self) {
        self.active.clear();
    }

    /// Disables everything if every set is enabled, otherwise enables everything.
    #[instrument(skip(self))]
    pub fn toggle_all(&mut self) {
        if self.all_active() {
            self.deactivate_all();
        } else {
            self.activate_all();
        }
    }

    /// Returns the number of enabled sets.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of sets in the catalog.
    pub fn total_count(&self) -> usize {
        SetCode::iter().count()
    }

    /// Returns true if every set is enabled.
    pub fn all_active(&self) -> bool {
        self.active_count() == self.total_count()
    }

    /// Iterates the enabled sets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = SetCode> + '_ {
        self.active.iter().copied()
    }
}

impl Default for ActiveSets {
    fn default() -> Self {
        Self::all()
    }
}

impl SetMembership for ActiveSets {
    fn is_active(&self, set: SetCode) -> bool {
        ActiveSets::is_active(self, set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::MemoryStorage;

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::new("unavailable"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::new("unavailable"))
        }
    }

    #[test]
    fn test_toggle() {
        let mut sets = ActiveSets::all();
        sets.toggle(SetCode::Buffy);
        assert!(!sets.is_active(SetCode::Buffy));
        assert_eq!(sets.active_count(), sets.total_count() - 1);

        sets.toggle(SetCode::Buffy);
        assert!(sets.all_active());
    }

    #[test]
    fn test_toggle_all() {
        let mut sets = ActiveSets::all();
        sets.toggle_all();
        assert_eq!(sets.active_count(), 0);

        sets.toggle(SetCode::TMNT);
        sets.toggle_all();
        assert!(sets.all_active());
    }

    #[test]
    fn test_load_defaults_to_all_when_missing() {
        assert!(ActiveSets::load(&MemoryStorage::new()).all_active());
    }

    #[test]
    fn test_load_defaults_to_all_when_corrupt() {
        let mut storage = MemoryStorage::new();
        storage.set(ACTIVE_SETS_KEY, "{not json").unwrap();
        assert!(ActiveSets::load(&storage).all_active());

        storage.set(ACTIVE_SETS_KEY, r#"["VOL1","NOPE"]"#).unwrap();
        assert!(ActiveSets::load(&storage).all_active());
    }

    #[test]
    fn test_load_defaults_to_all_when_storage_fails() {
        assert!(ActiveSets::load(&BrokenStorage).all_active());
        assert!(ActiveSets::none().save(&mut BrokenStorage).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let mut sets = ActiveSets::none();
        sets.toggle(SetCode::VolumeTwo);
        sets.toggle(SetCode::VolumeOne);
        sets.save(&mut storage).unwrap();

        assert_eq!(
            storage.get(ACTIVE_SETS_KEY).unwrap().as_deref(),
            Some(r#"["VOL1","VOL2"]"#)
        );
        assert_eq!(ActiveSets::load(&storage), sets);
    }

    #[test]
    fn test_empty_list_is_respected() {
        let mut storage = MemoryStorage::new();
        ActiveSets::none().save(&mut storage).unwrap();
        assert_eq!(ActiveSets::load(&storage).active_count(), 0);
    }
}
