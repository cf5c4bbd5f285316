//! Process-wide metadata lookup.
//!
//! The metadata screen never owns fetched records: it reads them through
//! [`MetaRepository`]. Two writers exist: the fetch action, which hands its
//! outcome to [`MetaStore::complete_fetch`], and a successful save, which
//! refreshes the record through [`MetaStore::commit_columns`].

use std::collections::HashMap;

use log::{debug, warn};

use crate::model::column::Column;
use crate::model::meta::Metadata;

/// Read-only view of fetched metadata keyed by id.
pub trait MetaRepository {
    fn get(&self, id: &str) -> Option<&Metadata>;
}

/// Sink for errors that should reach the user (toast, console, ...).
pub trait ErrorReporter {
    fn report(&self, error: &str);
}

/// Result of one `GET /api/metas/{id}` call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Metadata),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaStore {
    dict: HashMap<String, Metadata>,
}

impl MetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record under its own id.
    pub fn insert(&mut self, meta: Metadata) {
        self.dict.insert(meta.id.clone(), meta);
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Applies a finished fetch. Failures go to `reporter` exactly once and
    /// leave the store untouched. Returns whether the store changed.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome, reporter: &dyn ErrorReporter) -> bool {
        match outcome {
            FetchOutcome::Loaded(meta) => {
                debug!("metadata {} loaded with {} columns", meta.id, meta.columns.len());
                self.insert(meta);
                true
            }
            FetchOutcome::Failed(error) => {
                warn!("metadata fetch failed: {}", error);
                reporter.report(&error);
                false
            }
        }
    }

    /// Replaces the columns of a stored record with the ones the backend just
    /// accepted. Returns `false` when no record with `id` is stored.
    pub fn commit_columns(&mut self, id: &str, columns: Vec<Column>) -> bool {
        let Some(meta) = self.dict.get_mut(id) else {
            warn!("saved columns for unknown metadata {}", id);
            return false;
        };
        debug!("metadata {} refreshed with {} saved columns", id, columns.len());
        meta.columns = columns;
        true
    }
}

impl MetaRepository for MetaStore {
    fn get(&self, id: &str) -> Option<&Metadata> {
        self.dict.get(id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingReporter {
        pub(crate) reports: RefCell<Vec<String>>,
    }

    impl ErrorReporter for RecordingReporter {
        fn report(&self, error: &str) {
            self.reports.borrow_mut().push(error.to_string());
        }
    }

    pub(crate) fn scenario_meta() -> Metadata {
        Metadata {
            id: "7".to_string(),
            api_id: "9".to_string(),
            columns: vec![Column::new("col_a")],
            samples: r#"{"items":[{"col_a":1}]}"#.to_string(),
        }
    }

    #[test]
    fn successful_fetch_populates_the_store() {
        let reporter = RecordingReporter::default();
        let mut store = MetaStore::new();
        assert!(store.get("7").is_none());

        assert!(store.complete_fetch(FetchOutcome::Loaded(scenario_meta()), &reporter));
        assert_eq!(store.get("7"), Some(&scenario_meta()));
        assert!(reporter.reports.borrow().is_empty());
    }

    #[test]
    fn failed_fetch_is_reported_once_and_changes_nothing() {
        let reporter = RecordingReporter::default();
        let mut store = MetaStore::new();

        let changed = store.complete_fetch(FetchOutcome::Failed("NOT_FOUND".to_string()), &reporter);

        assert!(!changed);
        assert!(store.is_empty());
        assert_eq!(*reporter.reports.borrow(), vec!["NOT_FOUND".to_string()]);
    }

    #[test]
    fn saved_columns_replace_the_stored_ones() {
        let reporter = RecordingReporter::default();
        let mut store = MetaStore::new();
        store.complete_fetch(FetchOutcome::Loaded(scenario_meta()), &reporter);

        let saved = vec![Column {
            provided_name: "a".to_string(),
            ..Column::new("col_a")
        }];
        assert!(store.commit_columns("7", saved.clone()));

        let meta = store.get("7").unwrap();
        assert_eq!(meta.columns, saved);
        assert_eq!(meta.samples, scenario_meta().samples);
    }

    #[test]
    fn saved_columns_for_an_unknown_id_are_ignored() {
        let mut store = MetaStore::new();
        assert!(!store.commit_columns("7", vec![Column::new("col_a")]));
        assert!(store.is_empty());
    }
}
