//! One editable row of the metadata definition table.
//!
//! The row is fully controlled by its parent: it renders the `column` it is
//! given and, on every input, emits `(idx, replacement)` through `update_col`
//! where `replacement` is the previous column with one field changed. It never
//! emits partial patches and keeps no state of its own.

use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::column::{Column, ColumnType, SearchSetting};

use super::headers::FormHeader;
use super::styles::{FLEX_ROW, FLEX_TABLE, FORM_CONTROL, HELP_TEXT};

#[derive(Properties, PartialEq)]
pub struct MetaRowFormProps {
    pub idx: usize,
    pub column: Rc<Column>,
    pub update_col: Callback<(usize, Column)>,
    pub form_headers: &'static [FormHeader],
}

pub struct MetaRowForm;

impl Component for MetaRowForm {
    type Message = ();
    type Properties = MetaRowFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MetaRowForm
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let column = &props.column;

        let on_provided_name = edit_callback(props, |e: InputEvent, col| {
            col.provided_name = e.target_unchecked_into::<HtmlInputElement>().value();
        });
        let on_column_type = edit_callback(props, |e: Event, col| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(column_type) = ColumnType::from_key(&key) {
                col.column_type = column_type;
            }
        });
        let on_max_length = edit_callback(props, |e: InputEvent, col| {
            col.max_length = e.target_unchecked_into::<HtmlInputElement>().value();
        });
        let on_date_format = edit_callback(props, |e: InputEvent, col| {
            col.date_format = e.target_unchecked_into::<HtmlInputElement>().value();
        });
        let on_nullable = edit_callback(props, |e: Event, col| {
            col.nullable = e.target_unchecked_into::<HtmlInputElement>().checked();
        });
        let on_search = edit_callback(props, |e: Event, col| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(search) = SearchSetting::from_key(&key) {
                col.search = search;
            }
        });

        let length_hint = match column.length() {
            Ok(_) => html! {},
            Err(_) => html! { <span class="helpText" style={HELP_TEXT}>{"Formato: N o N,M"}</span> },
        };

        html! {
            <div class="meta-row" style={FLEX_TABLE}>
                <div class="text" style={format!("{} display: flex; align-items: center;", FLEX_ROW)}>
                    { label(props, 0) }
                    { column.column_name.clone() }
                </div>
                <div style={FLEX_ROW}>
                    { label(props, 1) }
                    <input
                        class="form"
                        style={FORM_CONTROL}
                        type="text"
                        value={column.provided_name.clone()}
                        oninput={on_provided_name}
                    />
                </div>
                <div style={FLEX_ROW}>
                    { label(props, 2) }
                    <select class="form" style={FORM_CONTROL} onchange={on_column_type}>
                        { for ColumnType::ALL.iter().map(|t| html! {
                            <option value={t.key()} selected={*t == column.column_type}>{ t.label() }</option>
                        }) }
                    </select>
                </div>
                <div style={FLEX_ROW}>
                    { label(props, 3) }
                    <input
                        class="form"
                        style={FORM_CONTROL}
                        type="text"
                        placeholder="10 / 10,2"
                        value={column.max_length.clone()}
                        oninput={on_max_length}
                    />
                    { length_hint }
                </div>
                <div style={FLEX_ROW}>
                    { label(props, 4) }
                    <input
                        class="form"
                        style={FORM_CONTROL}
                        type="text"
                        placeholder="yyyy-MM-dd"
                        disabled={!column.uses_date_format()}
                        value={column.date_format.clone()}
                        oninput={on_date_format}
                    />
                </div>
                <div style={FLEX_ROW}>
                    { label(props, 5) }
                    <input type="checkbox" checked={column.nullable} onchange={on_nullable} />
                </div>
                <div class="last" style={FLEX_ROW}>
                    { label(props, 6) }
                    <select class="form" style={FORM_CONTROL} onchange={on_search}>
                        { for SearchSetting::ALL.iter().map(|s| html! {
                            <option value={s.key()} selected={*s == column.search}>{ s.label() }</option>
                        }) }
                    </select>
                </div>
            </div>
        }
    }
}

/// Builds a callback that copies the current column, lets `edit` change it
/// from the event and reports the whole replacement for this row.
fn edit_callback<E, F>(props: &MetaRowFormProps, edit: F) -> Callback<E>
where
    E: 'static,
    F: Fn(E, &mut Column) + 'static,
{
    let idx = props.idx;
    let column = props.column.clone();
    let update_col = props.update_col.clone();
    Callback::from(move |event: E| {
        let mut next = Column::clone(&column);
        edit(event, &mut next);
        update_col.emit((idx, next));
    })
}

/// Field label used when cells wrap on narrow screens; hidden otherwise.
fn label(props: &MetaRowFormProps, cell: usize) -> Html {
    match props.form_headers.get(cell) {
        Some(header) => html! { <label class="label" style="display: none;">{ header.name }</label> },
        None => html! {},
    }
}
