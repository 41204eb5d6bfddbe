// src/infrastructure/store/mod.rs
// In-memory record store

use chrono::Utc;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::repository::{Record, RecordRepository};

/// Issues record ids from the wall clock in milliseconds.
///
/// Two ids issued in the same millisecond (or after the clock went backwards)
/// are bumped so that every id is strictly greater than the previous one.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Ordered list of records, most recent first
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    ids: IdGenerator,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Create a store holding `records` as given, ids and order untouched
    pub fn with_records(records: Vec<T>) -> StoreResult<Self> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }

        log::debug!("Seeded store with {} records", records.len());

        Ok(Self {
            records,
            ids: IdGenerator::new(),
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn fresh_id(&mut self) -> String {
        // Seeded ids are arbitrary strings, so a generated one may still clash
        loop {
            let id = self.ids.next_id();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl<T: Record> RecordRepository<T> for RecordStore<T> {
    fn insert(&mut self, mut record: T) -> String {
        let id = self.fresh_id();
        record.set_id(id.clone());
        self.records.insert(0, record);

        log::debug!("Inserted record {} ({} total)", id, self.records.len());
        id
    }

    fn update(&mut self, id: &str, mut replacement: T) -> StoreResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        replacement.set_id(id.to_string());
        self.records[index] = replacement;

        log::debug!("Updated record {} at position {}", id, index);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> StoreResult<T> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = self.records.remove(index);
        log::debug!("Deleted record {} ({} left)", id, self.records.len());
        Ok(removed)
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Direction, Strategy};

    fn strategy(id: &str, name: &str) -> Strategy {
        Strategy {
            id: id.to_string(),
            name: name.to_string(),
            direction: Direction::Neutral,
            description: String::new(),
        }
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let mut previous: i64 = 0;
        for _ in 0..1000 {
            let id: i64 = ids.next_id().parse().unwrap();
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn test_insert_prepends_and_assigns_fresh_ids() {
        let mut store = RecordStore::new();
        let first = store.insert(strategy("", "a"));
        let second = store.insert(strategy("", "b"));

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "b");
        assert_eq!(store.list()[0].id, second);
        assert_eq!(store.list()[1].id, first);
    }

    #[test]
    fn test_insert_ignores_caller_supplied_id() {
        let mut store = RecordStore::with_records(vec![strategy("1", "seed")]).unwrap();
        let id = store.insert(strategy("1", "copy"));

        assert_ne!(id, "1");
        assert_eq!(store.list().iter().filter(|s| s.id == "1").count(), 1);
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut store =
            RecordStore::with_records(vec![strategy("1", "a"), strategy("2", "b"), strategy("3", "c")])
                .unwrap();

        store.update("2", strategy("ignored", "edited")).unwrap();

        let names: Vec<_> = store.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "edited", "c"]);
        assert_eq!(store.list()[1].id, "2");
    }

    #[test]
    fn test_update_and_delete_unknown_id_fail_without_changes() {
        let mut store = RecordStore::with_records(vec![strategy("1", "a")]).unwrap();

        assert_eq!(
            store.update("9", strategy("", "x")),
            Err(StoreError::NotFound("9".to_string()))
        );
        assert_eq!(
            store.delete("9").unwrap_err(),
            StoreError::NotFound("9".to_string())
        );
        assert_eq!(store.list(), &[strategy("1", "a")]);
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let mut store =
            RecordStore::with_records(vec![strategy("1", "a"), strategy("2", "b")]).unwrap();

        let removed = store.delete("1").unwrap();

        assert_eq!(removed.name, "a");
        assert_eq!(store.len(), 1);
        assert!(store.get("1").is_none());
        assert!(store.get("2").is_some());
    }

    #[test]
    fn test_with_records_rejects_duplicate_ids() {
        let result = RecordStore::with_records(vec![strategy("1", "a"), strategy("1", "b")]);
        assert_eq!(result.unwrap_err(), StoreError::DuplicateId("1".to_string()));
    }
}
