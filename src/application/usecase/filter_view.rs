// src/application/usecase/filter_view.rs
// Derived, filtered views over a record store

use crate::domain::repository::{Record, RecordRepository};
use crate::domain::service::Searchable;

/// Case-insensitive substring test of `query` against the record's search fields.
///
/// An empty query matches every record.
pub fn matches<T: Searchable>(record: &T, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records of `store` that match `query` and pass `flags`, in store order
pub fn view<'a, T, R>(store: &'a R, query: &str, flags: &T::Flags) -> Vec<&'a T>
where
    T: Record + Searchable,
    R: RecordRepository<T>,
{
    store
        .list()
        .iter()
        .filter(|record| record.passes_flags(flags) && matches(*record, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Direction, Strategy};
    use crate::infrastructure::store::RecordStore;

    fn store() -> RecordStore<Strategy> {
        let strategy = |id: &str, name: &str, direction, description: &str| Strategy {
            id: id.to_string(),
            name: name.to_string(),
            direction,
            description: description.to_string(),
        };

        RecordStore::with_records(vec![
            strategy("1", "Reversão à Média", Direction::ContraTrend, "Retorno à média"),
            strategy("2", "Seguidor", Direction::WithTrend, "A favor da tendência"),
            strategy("3", "Operação Neutra", Direction::Neutral, "Sem direção"),
        ])
        .unwrap()
    }

    fn ids(records: &[&Strategy]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let store = store();
        let all: Vec<&Strategy> = store.list().iter().collect();
        assert_eq!(view(&store, "", &()), all);
    }

    #[test]
    fn test_query_is_case_insensitive_and_keeps_order() {
        let store = store();
        // "Tendencia" lives in the direction label of 1 and 2
        assert_eq!(ids(&view(&store, "TENDENCIA", &())), vec!["1", "2"]);
        assert_eq!(ids(&view(&store, "média", &())), vec!["1"]);
        assert_eq!(ids(&view(&store, "MÉDIA", &())), vec!["1"]);
    }

    #[test]
    fn test_query_searches_description() {
        let store = store();
        assert_eq!(ids(&view(&store, "sem dir", &())), vec!["3"]);
        assert!(view(&store, "nothing like this", &()).is_empty());
    }

    #[test]
    fn test_view_only_returns_matching_records() {
        let store = store();
        for query in ["a", "e", "neutr", "x"] {
            for record in view(&store, query, &()) {
                assert!(matches(record, query));
            }
        }
    }
}
