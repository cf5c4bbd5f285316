//! Update function for the dataset metadata screen.
//!
//! Elm-style: mutates the `MetaShowComponent` for a `Msg` and returns whether
//! the view should re-render.
//!
//! Saving: when columns or operation changed, `PUT /api/metas/{id}/columns`
//! is sent first and the screen only navigates after it succeeded; without
//! changes it navigates right away. The navigation carries the metadata with
//! the committed columns, and the store receives them through `on_committed`.
//! Edits made while the request is in flight stay unsaved and block the
//! navigation.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::navigation::Navigation;
use common::store::ErrorReporter;

use crate::api;
use crate::helpers::{set_window_dirty_flag, show_toast, ToastReporter};

use super::messages::Msg;
use super::state::MetaShowComponent;

pub fn update(component: &mut MetaShowComponent, ctx: &Context<MetaShowComponent>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateColumn(idx, column) => match component.columns.apply_edit(idx, column) {
            Ok(()) => {
                set_window_dirty_flag(true);
                true
            }
            Err(e) => {
                error!(format!("column edit rejected: {}", e));
                false
            }
        },
        Msg::UpdateOperation(operation) => {
            if component.operation != operation {
                component.operation = operation;
                component.operation_dirty = true;
                set_window_dirty_flag(true);
            }
            true
        }
        Msg::SetOperation(operation) => {
            // An edit made while the request was in flight wins.
            if !component.operation_dirty {
                component.operation = operation;
            }
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            let Some(meta) = component.metadata(ctx.props()) else {
                return false;
            };

            if !component.has_unsaved_changes() {
                let meta = match component.columns.to_columns() {
                    Some(columns) => meta.with_columns(columns),
                    None => meta.clone(),
                };
                ctx.props().on_navigate.emit(Navigation::to_api_screen(&meta));
                return false;
            }

            let Some(request) = component.columns.submission(&component.operation) else {
                return false;
            };
            component.saving = true;

            let meta_id = meta.id.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_columns(&meta_id, &request).await {
                    Ok(()) => link.send_message(Msg::SaveSucceeded(request)),
                    Err(e) => link.send_message(Msg::SaveFailed(e)),
                }
            });
            true
        }
        Msg::SaveSucceeded(request) => {
            component.saving = false;
            let props = ctx.props();
            let columns_committed = component.columns.commit(&request.columns);
            component.operation_dirty = component.operation != request.operation;
            props.on_committed.emit((props.id.clone(), request.columns.clone()));

            if !columns_committed || component.operation_dirty {
                show_toast("Metadatos guardados; hay cambios posteriores sin guardar.");
                return true;
            }

            set_window_dirty_flag(false);
            show_toast("Metadatos guardados correctamente.");
            if let Some(meta) = component.metadata(props) {
                let committed = meta.with_columns(request.columns);
                props.on_navigate.emit(Navigation::to_api_screen(&committed));
            }
            true
        }
        Msg::SaveFailed(e) => {
            component.saving = false;
            ToastReporter.report(&format!("No se pudieron guardar los metadatos: {}", e));
            true
        }
    }
}
