//! Working copy of a dataset's columns while the metadata screen is open.
//!
//! The screen renders one row editor per column. Editors never touch the
//! fetched `Metadata`; they report a complete replacement `Column` for their
//! index and the owning view swaps it into a [`ColumnEditState`]. The state is
//! seeded from the store exactly once, so a later re-fetch of the same record
//! cannot clobber edits in progress.
//!
//! Lifecycle:
//!
//! ```text
//! Unseeded --observe(Some(meta))--> Seeded --apply_edit--> Dirty
//!                                      ^                      |
//!                                      +-------commit---------+
//! ```
//!
//! `commit` only succeeds when the working copy still equals what was sent,
//! so an edit made while a save is in flight keeps the state `Dirty`.

use std::rc::Rc;

use log::{debug, warn};

use crate::error::MetaError;
use crate::model::column::Column;
use crate::model::meta::Metadata;
use crate::model::operation::Operation;
use crate::requests::UpdateColumnsRequest;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ColumnEditState {
    /// No metadata has arrived yet.
    #[default]
    Unseeded,
    /// Copied from the fetched metadata (or last saved), no pending edits.
    Seeded(Vec<Rc<Column>>),
    /// At least one edit has been applied since the last seed or commit.
    Dirty(Vec<Rc<Column>>),
}

impl ColumnEditState {
    pub fn new() -> Self {
        Self::Unseeded
    }

    /// Data-arrival watcher. Seeds the working copy from `meta` if nothing has
    /// been seeded yet and returns `true` when it did.
    ///
    /// The columns are cloned into fresh `Rc` slots, so the working copy never
    /// aliases the store's record. Once seeded, later calls are no-ops even if
    /// `meta` differs from the record that was copied.
    pub fn observe(&mut self, meta: Option<&Metadata>) -> bool {
        let Some(meta) = meta else {
            return false;
        };
        if self.is_seeded() {
            return false;
        }

        let columns = meta.columns.iter().cloned().map(Rc::new).collect();
        *self = ColumnEditState::Seeded(columns);
        debug!("seeded {} columns from metadata {}", meta.columns.len(), meta.id);
        true
    }

    /// Replaces the column at `idx` with `column`. Every other slot keeps the
    /// very same `Rc`, so row editors for untouched columns see equal props.
    ///
    /// Out-of-range indices and edits before seeding are rejected and leave
    /// the state as it was.
    pub fn apply_edit(&mut self, idx: usize, column: Column) -> Result<(), MetaError> {
        let columns = match self {
            ColumnEditState::Unseeded => {
                warn!("rejected edit of column {} before seeding", idx);
                return Err(MetaError::NotSeeded);
            }
            ColumnEditState::Seeded(columns) | ColumnEditState::Dirty(columns) => columns,
        };

        let len = columns.len();
        let Some(slot) = columns.get_mut(idx) else {
            warn!("rejected edit of column {} out of {}", idx, len);
            return Err(MetaError::IndexOutOfRange { index: idx, len });
        };
        *slot = Rc::new(column);

        if let ColumnEditState::Seeded(columns) = self {
            let columns = std::mem::take(columns);
            *self = ColumnEditState::Dirty(columns);
        }
        Ok(())
    }

    /// Records that `submitted` was saved. Moves `Dirty` back to `Seeded` and
    /// returns `true` when the working copy still equals `submitted`; if it was
    /// edited after the submission was built, nothing changes.
    pub fn commit(&mut self, submitted: &[Column]) -> bool {
        let unchanged = match self.columns() {
            Some(columns) => {
                columns.len() == submitted.len()
                    && columns.iter().zip(submitted).all(|(c, s)| **c == *s)
            }
            None => false,
        };
        if !unchanged {
            debug!("working copy changed while saving, staying dirty");
            return false;
        }

        if let ColumnEditState::Dirty(columns) = self {
            let columns = std::mem::take(columns);
            *self = ColumnEditState::Seeded(columns);
        }
        true
    }

    pub fn columns(&self) -> Option<&[Rc<Column>]> {
        match self {
            ColumnEditState::Unseeded => None,
            ColumnEditState::Seeded(columns) | ColumnEditState::Dirty(columns) => Some(columns),
        }
    }

    pub fn column(&self, idx: usize) -> Option<&Rc<Column>> {
        self.columns().and_then(|columns| columns.get(idx))
    }

    /// Owned copies of the working columns, in order.
    pub fn to_columns(&self) -> Option<Vec<Column>> {
        self.columns()
            .map(|columns| columns.iter().map(|c| Column::clone(c)).collect())
    }

    pub fn len(&self) -> usize {
        self.columns().map_or(0, <[_]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_seeded(&self) -> bool {
        !matches!(self, ColumnEditState::Unseeded)
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, ColumnEditState::Dirty(_))
    }

    /// Save payload for the current working copy, `None` before seeding.
    pub fn submission(&self, operation: &Operation) -> Option<UpdateColumnsRequest> {
        self.to_columns().map(|columns| UpdateColumnsRequest {
            columns,
            operation: operation.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::{ColumnType, SearchSetting};
    use crate::store::tests::{scenario_meta, RecordingReporter};
    use crate::store::{FetchOutcome, MetaRepository, MetaStore};

    fn meta_with(names: &[&str]) -> Metadata {
        Metadata {
            id: "m".to_string(),
            api_id: "a".to_string(),
            columns: names.iter().map(|n| Column::new(*n)).collect(),
            samples: String::new(),
        }
    }

    fn edited(name: &str) -> Column {
        Column {
            provided_name: format!("{name}_provided"),
            column_type: ColumnType::Integer,
            search: SearchSetting::Exact,
            ..Column::new(name)
        }
    }

    #[test]
    fn seeding_copies_columns_without_aliasing() {
        let meta = meta_with(&["a", "b", "c"]);
        let mut state = ColumnEditState::new();

        assert!(state.observe(Some(&meta)));
        assert!(state.is_seeded());
        assert!(!state.is_dirty());
        assert_eq!(state.to_columns().unwrap(), meta.columns);

        state.apply_edit(0, edited("a")).unwrap();
        assert_eq!(meta.columns[0], Column::new("a"));
        assert_ne!(state.to_columns().unwrap(), meta.columns);
    }

    #[test]
    fn observing_without_metadata_keeps_waiting() {
        let mut state = ColumnEditState::new();
        assert!(!state.observe(None));
        assert_eq!(state, ColumnEditState::Unseeded);
        assert!(state.columns().is_none());
    }

    #[test]
    fn seeding_happens_only_once() {
        let first = meta_with(&["a", "b"]);
        let refetched = meta_with(&["x", "y", "z"]);
        let mut state = ColumnEditState::new();

        assert!(state.observe(Some(&first)));
        let seeded = state.clone();
        assert!(!state.observe(Some(&first)));
        assert_eq!(state, seeded);

        state.apply_edit(1, edited("b")).unwrap();
        let before = state.clone();
        assert!(!state.observe(Some(&refetched)));
        assert_eq!(state, before);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn edit_replaces_one_slot_and_shares_the_rest() {
        let mut state = ColumnEditState::new();
        state.observe(Some(&meta_with(&["a", "b", "c"])));
        let before: Vec<Rc<Column>> = state.columns().unwrap().to_vec();

        let new_col = edited("b");
        state.apply_edit(1, new_col.clone()).unwrap();

        let after = state.columns().unwrap();
        assert_eq!(after.len(), 3);
        assert!(Rc::ptr_eq(&before[0], &after[0]));
        assert!(Rc::ptr_eq(&before[2], &after[2]));
        assert_eq!(*after[1], new_col);
        assert!(state.is_dirty());
    }

    #[test]
    fn edit_replaces_wholesale_instead_of_merging() {
        let mut state = ColumnEditState::new();
        let mut meta = meta_with(&["a"]);
        meta.columns[0].date_format = "yyyy".to_string();
        state.observe(Some(&meta));

        state.apply_edit(0, Column::new("a")).unwrap();
        assert_eq!(state.column(0).unwrap().date_format, "");
    }

    #[test]
    fn edits_at_distinct_indices_commute() {
        let meta = meta_with(&["a", "b", "c", "d"]);

        let mut left = ColumnEditState::new();
        left.observe(Some(&meta));
        left.apply_edit(0, edited("a")).unwrap();
        left.apply_edit(3, edited("d")).unwrap();

        let mut right = ColumnEditState::new();
        right.observe(Some(&meta));
        right.apply_edit(3, edited("d")).unwrap();
        right.apply_edit(0, edited("a")).unwrap();

        assert_eq!(left.to_columns(), right.to_columns());
    }

    #[test]
    fn out_of_range_edit_is_rejected_without_touching_the_list() {
        let mut state = ColumnEditState::new();
        state.observe(Some(&meta_with(&["a", "b", "c"])));
        let before = state.clone();

        let err = state.apply_edit(5, edited("z")).unwrap_err();

        assert_eq!(err, MetaError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(state, before);
        assert!(!state.is_dirty());
    }

    #[test]
    fn edit_before_seeding_is_rejected() {
        let mut state = ColumnEditState::new();
        assert_eq!(state.apply_edit(0, edited("a")), Err(MetaError::NotSeeded));
        assert_eq!(state, ColumnEditState::Unseeded);
    }

    #[test]
    fn fetched_scenario_seeds_a_single_column() {
        let meta = scenario_meta();
        let mut state = ColumnEditState::new();
        state.observe(Some(&meta));

        assert_eq!(state.len(), 1);
        assert_eq!(state.column(0).unwrap().column_name, "col_a");
    }

    #[test]
    fn commit_clears_the_dirty_flag_and_keeps_edits() {
        let mut state = ColumnEditState::new();
        state.observe(Some(&meta_with(&["a", "b"])));
        state.apply_edit(1, edited("b")).unwrap();

        let request = state.submission(&Operation::placeholder()).unwrap();
        assert_eq!(request.columns[1], edited("b"));

        assert!(state.commit(&request.columns));
        assert!(!state.is_dirty());
        assert_eq!(**state.column(1).unwrap(), edited("b"));
    }

    #[test]
    fn edit_after_submission_stays_dirty() {
        let mut state = ColumnEditState::new();
        state.observe(Some(&meta_with(&["a", "b"])));
        state.apply_edit(0, edited("a")).unwrap();
        let request = state.submission(&Operation::placeholder()).unwrap();

        state.apply_edit(1, edited("b")).unwrap();

        assert!(!state.commit(&request.columns));
        assert!(state.is_dirty());
        assert_eq!(**state.column(1).unwrap(), edited("b"));
    }

    #[test]
    fn remount_after_save_seeds_the_saved_columns() {
        let reporter = RecordingReporter::default();
        let mut store = MetaStore::new();
        store.complete_fetch(FetchOutcome::Loaded(scenario_meta()), &reporter);

        let mut first = ColumnEditState::new();
        first.observe(store.get("7"));
        let saved = Column {
            provided_name: "saved_name".to_string(),
            ..Column::new("col_a")
        };
        first.apply_edit(0, saved.clone()).unwrap();
        let request = first.submission(&Operation::placeholder()).unwrap();
        assert!(first.commit(&request.columns));
        assert!(store.commit_columns("7", request.columns));

        let mut remounted = ColumnEditState::new();
        assert!(remounted.observe(store.get("7")));
        assert_eq!(**remounted.column(0).unwrap(), saved);
    }

    #[test]
    fn no_submission_before_seeding() {
        assert!(ColumnEditState::new().submission(&Operation::placeholder()).is_none());
    }
}
