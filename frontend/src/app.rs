use std::rc::Rc;

use gloo_console::error;
use wasm_bindgen::closure::Closure;
use yew::{html, Component, Context, Html};

use common::model::column::Column;
use common::model::meta::Metadata;
use common::navigation::{Navigation, Route};
use common::store::{FetchOutcome, MetaStore};

use crate::components::apis::show::ApiShowComponent;
use crate::components::metas::show::MetaShowComponent;
use crate::helpers::ToastReporter;
use crate::routing;

pub enum Msg {
    /// A finished `GET /api/metas/{id}`.
    Fetched(FetchOutcome),
    /// Columns the backend accepted for the metadata with this id.
    Committed(String, Vec<Column>),
    Navigate(Navigation),
    LocationChanged,
}

/// Root component: owns the metadata store and switches screens by route.
pub struct App {
    route: Route,
    store: Rc<MetaStore>,
    /// Metadata handed over by the last navigation (history state).
    transition: Option<Metadata>,
    _popstate: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let on_popstate = ctx.link().callback(|_| Msg::LocationChanged);
        Self {
            route: routing::current_route(),
            store: Rc::new(MetaStore::new()),
            transition: routing::history_meta(),
            _popstate: routing::listen_popstate(on_popstate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(outcome) => Rc::make_mut(&mut self.store).complete_fetch(outcome, &ToastReporter),
            Msg::Committed(id, columns) => Rc::make_mut(&mut self.store).commit_columns(&id, columns),
            Msg::Navigate(navigation) => {
                if let Err(e) = routing::push(&navigation) {
                    error!(format!("history push failed: {}", e));
                }
                self.route = navigation.route();
                self.transition = Some(navigation.state.meta);
                true
            }
            Msg::LocationChanged => {
                self.route = routing::current_route();
                self.transition = routing::history_meta();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.route {
            Route::MetaShow { id } => html! {
                <MetaShowComponent
                    key={id.clone()}
                    id={id.clone()}
                    store={self.store.clone()}
                    on_fetched={link.callback(Msg::Fetched)}
                    on_committed={link.callback(|(id, columns)| Msg::Committed(id, columns))}
                    on_navigate={link.callback(Msg::Navigate)}
                />
            },
            Route::ApiShow { api_id } => html! {
                <ApiShowComponent api_id={api_id.clone()} meta={self.transition.clone()} />
            },
            Route::NotFound => html! {
                <div class="container">
                    <h2>{"Página no encontrada"}</h2>
                </div>
            },
        }
    }
}
