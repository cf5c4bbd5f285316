//! Dataset metadata screen: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view rendering.
//!
//! Responsibilities
//! - On first render, fetch the metadata (and its stored operation) and hand
//!   the outcome to the store owner through `on_fetched`.
//! - Whenever the props change, seed the column working copy once the
//!   metadata is in the store.
//! - Delegate messages to `update::update` and rendering to `view::view`.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::store::FetchOutcome;

use crate::api;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::MetaShowProps;
pub use state::MetaShowComponent;

impl Component for MetaShowComponent {
    type Message = Msg;
    type Properties = MetaShowProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = MetaShowComponent::new(ctx.link());
        component.observe_store(ctx.props());
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.observe_store(ctx.props());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let id = ctx.props().id.clone();
            let on_fetched = ctx.props().on_fetched.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_meta(&id).await {
                    Ok(meta) => on_fetched.emit(FetchOutcome::Loaded(meta)),
                    Err(error) => {
                        on_fetched.emit(FetchOutcome::Failed(error));
                        return;
                    }
                }

                // Without a saved operation the placeholder stays in place.
                if let Ok(operation) = api::fetch_operation(&id).await {
                    link.send_message(Msg::SetOperation(operation));
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        crate::helpers::set_window_dirty_flag(false);
    }
}
