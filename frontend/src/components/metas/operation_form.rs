use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::operation::{HttpMethod, Operation};

use super::styles::{FORM_CONTROL, HELP_TEXT};

#[derive(Properties, PartialEq)]
pub struct OperationFormProps {
    pub operation: Operation,
    pub on_change: Callback<Operation>,
}

/// Form for the API call bound to the dataset: title, description, HTTP
/// method and endpoint. Controlled like `MetaRowForm`.
pub struct OperationForm;

const FIELD: &str = "display: flex; flex-direction: column; text-align: left; margin-bottom: 12px;";

impl Component for OperationForm {
    type Message = ();
    type Properties = OperationFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OperationForm
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let op = &props.operation;

        let on_title = edit_callback(props, |e: InputEvent, op| {
            op.title = e.target_unchecked_into::<HtmlInputElement>().value();
        });
        let on_desc = edit_callback(props, |e: InputEvent, op| {
            op.desc = e.target_unchecked_into::<HtmlTextAreaElement>().value();
        });
        let on_method = edit_callback(props, |e: Event, op| {
            let raw = e.target_unchecked_into::<HtmlSelectElement>().value();
            if let Some(method) = HttpMethod::parse(&raw) {
                op.method = method;
            }
        });
        let on_end_point = edit_callback(props, |e: InputEvent, op| {
            op.end_point = e.target_unchecked_into::<HtmlInputElement>().value();
        });

        let end_point_hint = if op.end_point.trim().is_empty() {
            html! { <span class="helpText" style={HELP_TEXT}>{"Indica el endpoint de la operación."}</span> }
        } else {
            html! {}
        };

        html! {
            <div class="paper" style="background: #fff; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.12);">
                <div style={FIELD}>
                    <label>{"Título"}</label>
                    <input style={FORM_CONTROL} type="text" value={op.title.clone()} oninput={on_title} />
                </div>
                <div style={FIELD}>
                    <label>{"Descripción"}</label>
                    <textarea style={FORM_CONTROL} rows="3" value={op.desc.clone()} oninput={on_desc} />
                </div>
                <div style="display: flex; gap: 16px;">
                    <div style={format!("{} width: 160px;", FIELD)}>
                        <label>{"Método"}</label>
                        <select style={FORM_CONTROL} onchange={on_method}>
                            { for HttpMethod::ALL.iter().map(|m| html! {
                                <option value={m.as_str()} selected={*m == op.method}>{ m.as_str() }</option>
                            }) }
                        </select>
                    </div>
                    <div style={format!("{} flex: 1;", FIELD)}>
                        <label>{"Endpoint"}</label>
                        <input style={FORM_CONTROL} type="text" value={op.end_point.clone()} oninput={on_end_point} />
                        { end_point_hint }
                    </div>
                </div>
            </div>
        }
    }
}

fn edit_callback<E, F>(props: &OperationFormProps, edit: F) -> Callback<E>
where
    E: 'static,
    F: Fn(E, &mut Operation) + 'static,
{
    let operation = props.operation.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |event: E| {
        let mut next = operation.clone();
        edit(event, &mut next);
        on_change.emit(next);
    })
}
