use super::chat_panel::{ChatPanel, ChatPlacement};
use super::overview::render_overview_panel;
use crate::Model;
use shared::EntityMode;
use yew::prelude::*;

pub fn render_sidebar(model: &Model) -> Html {
    // Collapsing only hides the sidebar so its chat transcript is kept.
    html! {
        <aside class={classes!("sidebar", (!model.sidebar_open).then_some("collapsed"))}>
            { render_overview_panel(
                "Packages Dataset",
                "fa-solid fa-box-open",
                "Unique packages",
                model.overviews.get(EntityMode::Package),
            ) }
            { render_overview_panel(
                "Receptacles Dataset",
                "fa-solid fa-boxes-stacked",
                "Unique receptacles",
                model.overviews.get(EntityMode::Receptacle),
            ) }
            <ChatPanel placement={ChatPlacement::Sidebar} />
        </aside>
    }
}
