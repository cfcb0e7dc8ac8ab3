//! Record Store
//!
//! The authoritative list of records. Entries are keyed by a monotonic
//! [`RecordId`] and keep insertion order, so positional indices can still be
//! derived by enumerating the map.

use hashlink::LinkedHashMap;
use tracing::{debug, warn};

use crate::domain::pipeline::{RowRef, total_age};
use crate::domain::record::{Record, RecordId};
use crate::error::{Error, Result};

/// In-memory, insertion-ordered record store
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: LinkedHashMap<RecordId, Record>,
    next_id: u64,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.append(record);
        }
        store
    }

    // ==================== Getters ====================

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Record at a position in the canonical order
    pub fn get_at(&self, index: usize) -> Option<(RecordId, &Record)> {
        self.records.iter().nth(index).map(|(id, record)| (*id, record))
    }

    /// Rows in canonical order, ready for the view pipeline
    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, (id, record))| RowRef {
                id: *id,
                position,
                record,
            })
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Sum of ages over every stored record
    pub fn total_age(&self) -> u64 {
        total_age(self.records.values())
    }

    // ==================== Mutations ====================

    /// Add a record at the end; duplicates are allowed
    pub fn append(&mut self, record: Record) -> RecordId {
        self.next_id += 1;
        let id = RecordId(self.next_id);
        self.records.insert(id, record);
        debug!(id = %id, len = self.records.len(), "Record appended");
        id
    }

    /// Replace a record in place, keeping its id and position
    pub fn replace(&mut self, id: RecordId, record: Record) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                debug!(id = %id, "Record replaced");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Replace the record at a position
    pub fn replace_at(&mut self, index: usize, record: Record) -> Result<()> {
        let id = self.id_at(index)?;
        self.replace(id, record)
    }

    /// Remove exactly one record; later positions shift down by one
    pub fn remove(&mut self, id: RecordId) -> Result<Record> {
        let removed = self.records.remove(&id).ok_or_else(|| not_found(id))?;
        debug!(id = %id, len = self.records.len(), "Record removed");
        Ok(removed)
    }

    /// Remove the record at a position
    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        let id = self.id_at(index)?;
        self.remove(id)
    }

    /// Append a copy of an existing record to the end
    pub fn duplicate(&mut self, id: RecordId) -> Result<RecordId> {
        let copy = self.records.get(&id).cloned().ok_or_else(|| not_found(id))?;
        Ok(self.append(copy))
    }

    fn id_at(&self, index: usize) -> Result<RecordId> {
        self.records.keys().nth(index).copied().ok_or_else(|| {
            warn!(index, len = self.records.len(), "Index outside the store");
            Error::RecordNotFound {
                target: format!("index {index}"),
            }
        })
    }
}

fn not_found(id: RecordId) -> Error {
    warn!(id = %id, "Record not in store");
    Error::RecordNotFound {
        target: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{Gender, Role, seed_records};

    fn names(store: &RecordStore) -> Vec<&str> {
        store.records().map(Record::name).collect()
    }

    #[test]
    fn copy_then_delete_scenario() {
        let mut store = RecordStore::from_records(seed_records());
        let (john, _) = store.get_at(0).expect("john");
        store.duplicate(john).expect("copy");
        assert_eq!(store.len(), 3);
        assert_eq!(store.get_at(2).map(|(_, r)| r.clone()), store.get(john).cloned());

        store.remove_at(1).expect("delete jane");
        assert_eq!(names(&store), vec!["John", "John"]);
    }

    #[test]
    fn replace_keeps_position_and_id() {
        let mut store = RecordStore::from_records(seed_records());
        let (jane, _) = store.get_at(1).expect("jane");
        let replacement = Record::new("Janet", 31, Gender::Female, Role::Admin).expect("valid");
        store.replace(jane, replacement.clone()).expect("replace");
        assert_eq!(store.get_at(1).map(|(id, _)| id), Some(jane));
        assert_eq!(store.get(jane), Some(&replacement));

        store.replace_at(0, replacement).expect("replace at");
        assert_eq!(names(&store), vec!["Janet", "Janet"]);
    }

    #[test]
    fn out_of_range_targets_fail_without_mutation() {
        let mut store = RecordStore::from_records(seed_records());
        let record = Record::new("X", 1, Gender::Male, Role::User).expect("valid");
        assert!(matches!(store.replace_at(5, record), Err(Error::RecordNotFound { .. })));
        assert!(matches!(store.remove_at(2), Err(Error::RecordNotFound { .. })));
        assert!(matches!(store.duplicate(RecordId(99)), Err(Error::RecordNotFound { .. })));
        assert_eq!(names(&store), vec!["John", "Jane"]);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = RecordStore::from_records(seed_records());
        let (last, _) = store.get_at(1).expect("jane");
        store.remove(last).expect("remove");
        let fresh = store.append(Record::new("Amy", 22, Gender::Female, Role::User).expect("valid"));
        assert!(fresh > last);
    }

    #[test]
    fn rows_enumerate_positions() {
        let store = RecordStore::from_records(seed_records());
        let positions: Vec<usize> = store.rows().map(|row| row.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert_eq!(store.total_age(), 55);
    }
}
