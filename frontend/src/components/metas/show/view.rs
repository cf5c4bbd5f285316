//! View rendering for the dataset metadata screen.
//!
//! Until the metadata is in the store only the page title is shown. Then
//! three sections follow: the sample table (first rows of the source data),
//! the metadata definition table with one `MetaRowForm` per column, and the
//! operation form, closed by the save button.

use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::model::meta::Metadata;

use super::messages::Msg;
use super::state::MetaShowComponent;
use crate::components::metas::headers::{FormHeader, FORM_HEADERS};
use crate::components::metas::operation_form::OperationForm;
use crate::components::metas::row_form::MetaRowForm;
use crate::components::metas::styles::{BOTTOM_GUTTER, FLEX_ROW_HEADER, FLEX_TABLE};
use crate::components::tables::BorderedTable;
use crate::components::typos::{PageTitle, SubTitle};
use crate::helpers::sample_cell_text;

pub fn view(component: &MetaShowComponent, ctx: &Context<MetaShowComponent>) -> Html {
    let link = ctx.link();
    let body = match component.metadata(ctx.props()) {
        Some(meta) => html! {
            <div>
                { build_sample_section(component, meta) }
                { build_definition_section(component) }
                { build_operation_section(component) }
                { build_save_button(component, link) }
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="container" style="max-width: 1200px; margin: 0 auto; padding: 0 16px;">
            <PageTitle text="Meta del dataset" />
            { body }
        </div>
    }
}

/// Sample table: source column names as headers, decoded sample rows below.
fn build_sample_section(component: &MetaShowComponent, meta: &Metadata) -> Html {
    let header_names = meta.headers();
    let headers: Vec<AttrValue> = header_names
        .iter()
        .map(|h| AttrValue::from(h.to_string()))
        .collect();

    let (rows, empty_text): (Vec<Vec<AttrValue>>, AttrValue) = match &component.samples {
        Some(Ok(samples)) => {
            let rows = samples
                .rows(&header_names)
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| AttrValue::from(sample_cell_text(cell)))
                        .collect()
                })
                .collect();
            (rows, AttrValue::from("Sin datos de ejemplo"))
        }
        Some(Err(e)) => (Vec::new(), AttrValue::from(format!("Datos de ejemplo no válidos: {}", e))),
        None => (Vec::new(), AttrValue::from("Sin datos de ejemplo")),
    };

    html! {
        <div class="BottomGutter" style={BOTTOM_GUTTER}>
            <SubTitle
                text="Ejemplo de datos"
                small_text={AttrValue::from("Muestra los primeros 5 registros de los datos originales.")}
            />
            <BorderedTable headers={headers} rows={rows} empty_text={empty_text} />
        </div>
    }
}

/// Header row plus one row editor per column of the working copy.
fn build_definition_section(component: &MetaShowComponent) -> Html {
    let rows = component
        .columns
        .columns()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            html! {
                <MetaRowForm
                    key={format!("MetaRowForm{}", idx)}
                    idx={idx}
                    column={column.clone()}
                    update_col={component.update_col.clone()}
                    form_headers={FORM_HEADERS}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="BottomGutter" style={BOTTOM_GUTTER}>
            <SubTitle
                text="Definición de metadatos"
                small_text={AttrValue::from("Define la información de las columnas de los datos de origen.")}
            />
            <div class="flex-table-container" style="display: block;">
                <div style={FLEX_TABLE}>
                    { for FORM_HEADERS.iter().map(header_cell) }
                </div>
                { rows }
            </div>
        </div>
    }
}

/// Header cell; headers with help text get an icon carrying it as tooltip.
fn header_cell(header: &FormHeader) -> Html {
    html! {
        <div key={header.key} class="header" style={FLEX_ROW_HEADER}>
            { header.name }
            {
                if let Some(tooltip) = header.tooltip {
                    html! {
                        <i
                            class="material-icons"
                            title={tooltip}
                            style="font-size: 16px; vertical-align: middle; margin-left: 4px; color: #777; cursor: help;"
                        >
                            {"help"}
                        </i>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_operation_section(component: &MetaShowComponent) -> Html {
    html! {
        <div class="BottomGutter" style={BOTTOM_GUTTER}>
            <SubTitle
                text="Definición de operación"
                small_text={AttrValue::from("Define el comportamiento de las llamadas a la API.")}
            />
            <OperationForm
                operation={component.operation.clone()}
                on_change={component.update_operation.clone()}
            />
        </div>
    }
}

fn build_save_button(component: &MetaShowComponent, link: &Scope<MetaShowComponent>) -> Html {
    let label = if component.saving { "Guardando..." } else { "Guardar" };
    html! {
        <div style="text-align: right; margin-bottom: 32px;">
            {
                if component.has_unsaved_changes() {
                    html! { <span style="margin-right: 12px; color: #e53935;">{"Cambios sin guardar"}</span> }
                } else {
                    html! {}
                }
            }
            <button
                class="btn-primary"
                style="padding: 8px 20px; background: #1976d2; color: #fff; border: none; border-radius: 4px; cursor: pointer;"
                disabled={component.saving}
                onclick={link.callback(|_| Msg::Save)}
            >
                { label }
            </button>
        </div>
    }
}
