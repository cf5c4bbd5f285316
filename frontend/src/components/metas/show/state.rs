//! Component state for the dataset metadata screen.

use gloo_console::warn;
use yew::html::Scope;
use yew::Callback;

use common::editing::ColumnEditState;
use common::error::MetaError;
use common::model::column::Column;
use common::model::meta::Metadata;
use common::model::operation::Operation;
use common::model::samples::SampleSet;
use common::store::MetaRepository;

use super::messages::Msg;
use super::props::MetaShowProps;

pub struct MetaShowComponent {
    /// Working copy of the columns, seeded once from the store.
    pub columns: ColumnEditState,

    /// Samples decoded when the columns were seeded.
    pub samples: Option<Result<SampleSet, MetaError>>,

    /// Operation shown in the operation form.
    pub operation: Operation,

    /// The operation was edited since it was loaded or saved.
    pub operation_dirty: bool,

    /// A save request is in flight; the save button is disabled.
    pub saving: bool,

    /// Guard to avoid fetching more than once.
    pub loaded: bool,

    /// Built once so row editors whose column did not change see equal props.
    pub update_col: Callback<(usize, Column)>,
    pub update_operation: Callback<Operation>,
}

impl MetaShowComponent {
    pub fn new(link: &Scope<Self>) -> Self {
        Self {
            columns: ColumnEditState::new(),
            samples: None,
            operation: Operation::placeholder(),
            operation_dirty: false,
            saving: false,
            loaded: false,
            update_col: link.callback(|(idx, column)| Msg::UpdateColumn(idx, column)),
            update_operation: link.callback(Msg::UpdateOperation),
        }
    }

    /// Metadata for the routed id, once the store has it.
    pub fn metadata<'a>(&self, props: &'a MetaShowProps) -> Option<&'a Metadata> {
        props.store.get(&props.id)
    }

    /// Data-arrival watcher: seeds the columns the first time the metadata is
    /// in the store and decodes the samples alongside. Returns whether it
    /// seeded.
    pub fn observe_store(&mut self, props: &MetaShowProps) -> bool {
        let meta = self.metadata(props);
        if !self.columns.observe(meta) {
            return false;
        }

        if let Some(meta) = meta {
            if let Err(e) = meta.check_samples() {
                warn!(format!("samples of {} do not match its columns: {}", meta.id, e));
            }
            self.samples = Some(meta.sample_set());
        }
        true
    }

    /// Columns or operation hold changes that have not been saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.columns.is_dirty() || self.operation_dirty
    }
}
