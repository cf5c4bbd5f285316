//! Properties of the `MetaShowComponent`.

use std::rc::Rc;

use yew::prelude::*;

use common::model::column::Column;
use common::navigation::Navigation;
use common::store::{FetchOutcome, MetaStore};

#[derive(Properties, PartialEq, Clone)]
pub struct MetaShowProps {
    /// Metadata id taken from the `/metas/{id}` route.
    pub id: String,

    /// Process-wide metadata store. The screen only reads it; fetched data
    /// reaches it through `on_fetched`, saved columns through `on_committed`.
    pub store: Rc<MetaStore>,

    /// Receives the outcome of the `GET /api/metas/{id}` issued on first render.
    pub on_fetched: Callback<FetchOutcome>,

    /// Receives the metadata id and the columns the backend accepted.
    pub on_committed: Callback<(String, Vec<Column>)>,

    /// Receives the transition to the API configuration screen after saving.
    pub on_navigate: Callback<Navigation>,
}
