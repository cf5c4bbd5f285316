//! API configuration screen, the target of the save transition.
//!
//! Shows the API id and the columns it will publish, taken from the metadata
//! carried in the history state.

use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::model::meta::Metadata;

use crate::components::tables::BorderedTable;
use crate::components::typos::{PageTitle, SubTitle};

#[derive(Properties, PartialEq)]
pub struct ApiShowProps {
    pub api_id: String,
    #[prop_or_default]
    pub meta: Option<Metadata>,
}

pub struct ApiShowComponent;

impl Component for ApiShowComponent {
    type Message = ();
    type Properties = ApiShowProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ApiShowComponent
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let body = match props.meta.as_ref().filter(|m| m.api_id == props.api_id) {
            Some(meta) => {
                let headers = vec![
                    AttrValue::from("Columna de origen"),
                    AttrValue::from("Columna publicada"),
                    AttrValue::from("Tipo"),
                    AttrValue::from("Búsqueda"),
                ];
                let rows = meta
                    .columns
                    .iter()
                    .map(|c| {
                        vec![
                            AttrValue::from(c.column_name.clone()),
                            AttrValue::from(c.provided_name.clone()),
                            AttrValue::from(c.column_type.label()),
                            AttrValue::from(c.search.label()),
                        ]
                    })
                    .collect::<Vec<_>>();
                html! {
                    <>
                        <SubTitle
                            text="Columnas publicadas"
                            small_text={AttrValue::from(format!("Dataset {}", meta.id))}
                        />
                        <BorderedTable headers={headers} rows={rows} />
                    </>
                }
            }
            None => html! {
                <p style="color: #777;">{"No se recibió ningún dataset para esta API."}</p>
            },
        };

        html! {
            <div class="container" style="max-width: 1200px; margin: 0 auto; padding: 0 16px;">
                <PageTitle text={format!("Configuración de API {}", props.api_id)} />
                { body }
            </div>
        }
    }
}
