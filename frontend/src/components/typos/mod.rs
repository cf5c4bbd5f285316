use yew::virtual_dom::AttrValue;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PageTitleProps {
    pub text: AttrValue,
}

pub struct PageTitle;

impl Component for PageTitle {
    type Message = ();
    type Properties = PageTitleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PageTitle
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <h2 class="page-title" style="margin: 24px 0 16px; font-weight: 500;">
                { ctx.props().text.clone() }
            </h2>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SubTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub small_text: Option<AttrValue>,
}

/// Section heading with an optional grey explanation next to it.
pub struct SubTitle;

impl Component for SubTitle {
    type Message = ();
    type Properties = SubTitleProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SubTitle
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="sub-title" style="text-align: left; margin-bottom: 8px;">
                <span style="font-size: 1.1rem; font-weight: 500;">{ props.text.clone() }</span>
                {
                    if let Some(small) = &props.small_text {
                        html! { <small style="margin-left: 8px; color: #777;">{ small.clone() }</small> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
