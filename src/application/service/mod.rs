// src/application/service/mod.rs
// Application services: one page controller per record kind

use rust_decimal::Decimal;

use crate::application::dto::{Draft, OperationDraft, StrategyDraft};
use crate::application::usecase::{view, FormBinding};
use crate::config::JournalConfig;
use crate::domain::errors::{AppResult, FormResult, StoreError, StoreResult};
use crate::domain::repository::{Record, RecordRepository};
use crate::domain::service::{OperationFlags, Searchable};
use crate::infrastructure::seed::{sample_operations, sample_strategies};
use crate::infrastructure::store::RecordStore;

/// A record store with its form and the current search state
#[derive(Debug, Clone)]
pub struct RecordPage<D>
where
    D: Draft,
    D::Record: Searchable,
{
    store: RecordStore<D::Record>,
    form: FormBinding<D>,
    search_term: String,
    flags: <D::Record as Searchable>::Flags,
}

pub type StrategyRegistry = RecordPage<StrategyDraft>;
pub type OperationLedger = RecordPage<OperationDraft>;

impl<D> RecordPage<D>
where
    D: Draft,
    D::Record: Searchable,
{
    pub fn new(store: RecordStore<D::Record>) -> Self {
        Self {
            store,
            form: FormBinding::new(),
            search_term: String::new(),
            flags: Default::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<D::Record> {
        &self.store
    }

    pub fn form(&self) -> &FormBinding<D> {
        &self.form
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Records currently shown, after search and flags
    pub fn visible(&self) -> Vec<&D::Record> {
        view(&self.store, &self.search_term, &self.flags)
    }

    pub fn set_field(&mut self, field: D::Field) {
        self.form.set_field(field);
    }

    /// Load the stored record with `id` into the form
    pub fn begin_edit(&mut self, id: &str) -> StoreResult<()> {
        let record = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.form.begin_edit(record);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn submit(&mut self) -> FormResult<String> {
        self.form.submit(&mut self.store)
    }

    pub fn delete(&mut self, id: &str) -> StoreResult<D::Record> {
        let removed = self.store.delete(id).map_err(|e| {
            log::warn!("Delete failed: {}", e);
            e
        })?;
        log::info!("Removed record {}", removed.id());
        Ok(removed)
    }
}

impl OperationLedger {
    pub fn show_pending_only(&self) -> bool {
        self.flags.show_pending_only
    }

    pub fn set_show_pending_only(&mut self, show_pending_only: bool) {
        self.flags = OperationFlags { show_pending_only };
    }
}

/// Both pages of the journal, each owning its own store
#[derive(Debug, Clone)]
pub struct Journal {
    pub strategies: StrategyRegistry,
    pub operations: OperationLedger,
}

impl Journal {
    pub fn new(config: &JournalConfig) -> AppResult<Self> {
        let (strategies, operations) = if config.seed_sample_data {
            (
                RecordStore::with_records(sample_strategies())?,
                RecordStore::with_records(sample_operations())?,
            )
        } else {
            (RecordStore::new(), RecordStore::new())
        };

        log::info!(
            "Journal ready with {} strategies and {} operations",
            strategies.len(),
            operations.len()
        );

        Ok(Self {
            strategies: RecordPage::new(strategies),
            operations: RecordPage::new(operations),
        })
    }

    /// Strategy names offered when tagging an operation
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies
            .store()
            .list()
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Sum of results over the operations currently shown
    pub fn visible_result(&self) -> Decimal {
        self.operations
            .visible()
            .iter()
            .map(|op| op.result)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{OperationField, StrategyField};
    use crate::domain::errors::{FormError, ValidationError};
    use crate::domain::model::{Asset, Direction};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn journal() -> Journal {
        Journal::new(&JournalConfig::default()).unwrap()
    }

    #[test]
    fn test_seeded_journal() {
        let journal = journal();
        assert_eq!(journal.strategies.store().len(), 3);
        assert_eq!(journal.operations.store().len(), 2);
        assert_eq!(journal.strategy_names()[1], "Seguidor de Tendência");
    }

    #[test]
    fn test_empty_journal_when_seeding_disabled() {
        let config = JournalConfig {
            seed_sample_data: false,
        };
        let journal = Journal::new(&config).unwrap();
        assert!(journal.strategies.store().is_empty());
        assert!(journal.operations.visible().is_empty());
    }

    #[test]
    fn test_pending_switch_filters_operations() {
        let mut journal = journal();
        journal.operations.set_show_pending_only(true);

        let visible = journal.operations.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
        assert_eq!(journal.visible_result(), dec!(-50));

        journal.operations.set_show_pending_only(false);
        assert_eq!(journal.visible_result(), dec!(-20));
    }

    #[test]
    fn test_search_combines_with_pending_switch() {
        let mut journal = journal();
        journal.operations.set_search_term("fluxo");
        assert_eq!(journal.operations.visible().len(), 2);

        journal.operations.set_search_term("leilão");
        journal.operations.set_show_pending_only(true);
        assert!(journal.operations.visible().is_empty());
    }

    #[test]
    fn test_add_operation_through_the_page() {
        let mut journal = journal();
        let ledger = &mut journal.operations;
        ledger.set_field(OperationField::Asset(Some(Asset::Futures)));
        ledger.set_field(OperationField::Date(NaiveDate::from_ymd_opt(2024, 1, 15)));
        ledger.set_field(OperationField::Strategy("Rompimento".to_string()));
        ledger.set_field(OperationField::Result("-12,5".to_string()));

        let id = ledger.submit().unwrap();

        let first = &ledger.store().list()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.asset, Asset::Futures);
        assert_eq!(first.result, dec!(-12.5));
        assert_eq!(ledger.store().len(), 3);
    }

    #[test]
    fn test_submit_without_required_fields_does_not_touch_store() {
        let mut journal = journal();
        let err = journal.operations.submit().unwrap_err();

        assert_eq!(
            err,
            FormError::Validation(ValidationError::MissingFields(vec!["asset", "date", "strategy"]))
        );
        assert_eq!(journal.operations.store().len(), 2);
    }

    #[test]
    fn test_edit_strategy_through_the_page() {
        let mut journal = journal();
        let registry = &mut journal.strategies;
        registry.begin_edit("3").unwrap();
        registry.set_field(StrategyField::Direction(Some(Direction::WithTrend)));
        registry.submit().unwrap();

        assert_eq!(registry.store().get("3").unwrap().direction, Direction::WithTrend);
        assert_eq!(registry.store().list()[2].id, "3");
        assert!(registry.begin_edit("42").is_err());
    }

    #[test]
    fn test_delete_unknown_id_is_reported() {
        let mut journal = journal();
        assert_eq!(
            journal.strategies.delete("nope").unwrap_err(),
            StoreError::NotFound("nope".to_string())
        );
        assert_eq!(journal.strategies.delete("1").unwrap().id, "1");
        assert_eq!(journal.strategies.store().len(), 2);
    }
}
