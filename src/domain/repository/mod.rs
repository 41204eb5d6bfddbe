// src/domain/repository/mod.rs
// Repository interfaces for domain entities

use std::fmt;

use crate::domain::errors::StoreResult;

/// An entity owned by a record repository, identified by a string id
pub trait Record: Clone + fmt::Debug {
    fn id(&self) -> &str;

    /// Overwrite the id; only the owning repository should call this
    fn set_id(&mut self, id: String);
}

/// Repository interface for an ordered, in-memory list of records.
///
/// Records are kept most-recent-first. Ids are unique within a repository.
pub trait RecordRepository<T: Record> {
    /// Assign a fresh id, prepend the record and return the id
    fn insert(&mut self, record: T) -> String;

    /// Replace every non-id field of the record with `id`, keeping its position
    fn update(&mut self, id: &str, replacement: T) -> StoreResult<()>;

    /// Remove the record with `id` and hand it back
    fn delete(&mut self, id: &str) -> StoreResult<T>;

    fn get(&self, id: &str) -> Option<&T>;

    /// Current contents in store order
    fn list(&self) -> &[T];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
