use yew::virtual_dom::AttrValue;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct BorderedTableProps {
    pub headers: Vec<AttrValue>,
    pub rows: Vec<Vec<AttrValue>>,
    /// Shown in a single spanning cell when `rows` is empty.
    #[prop_or(AttrValue::from("Sin datos"))]
    pub empty_text: AttrValue,
}

/// Compact read-only table with borders on every cell.
pub struct BorderedTable;

const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 6px 12px; text-align: left; font-size: 0.875rem;";

impl Component for BorderedTable {
    type Message = ();
    type Properties = BorderedTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BorderedTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let body = if props.rows.is_empty() {
            html! {
                <tr>
                    <td style={CELL_STYLE} colspan={props.headers.len().max(1).to_string()}>
                        { props.empty_text.clone() }
                    </td>
                </tr>
            }
        } else {
            props
                .rows
                .iter()
                .map(|row| {
                    html! {
                        <tr>
                            { for row.iter().map(|cell| html! { <td style={CELL_STYLE}>{ cell.clone() }</td> }) }
                        </tr>
                    }
                })
                .collect::<Html>()
        };

        html! {
            <div class="paper" style="overflow-x: auto; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.12);">
                <table style="border-collapse: collapse; width: 100%;">
                    <thead>
                        <tr>
                            { for props.headers.iter().map(|h| html! {
                                <th style={format!("{} background: #f5f5f5;", CELL_STYLE)}>{ h.clone() }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
        }
    }
}
