// src/domain/service/mod.rs
// Domain service interfaces

use std::fmt;

/// A record that can be matched by the free-text search of a filter view
pub trait Searchable {
    /// Extra filter switches beyond the search term
    type Flags: Default + Clone + fmt::Debug;

    /// String fields tested by the search term
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record survives the extra switches
    fn passes_flags(&self, _flags: &Self::Flags) -> bool {
        true
    }
}

/// Extra switches for the trading operations view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationFlags {
    /// Only keep operations still marked as pending
    pub show_pending_only: bool,
}
