use crate::{Model, Msg};
use yew::prelude::*;

/// Renders the application header with the sidebar toggle
pub fn render_header(model: &Model, ctx: &Context<Model>) -> Html {
    let (icon, label) = if model.sidebar_open {
        ("fa-solid fa-angles-left", "Hide Sidebar")
    } else {
        ("fa-solid fa-angles-right", "Show Sidebar")
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-truck-fast"></i>{" Algerie Post - Route Duration & AI Assistant"}</h1>
            <button
                class="sidebar-toggle"
                title={ if model.sidebar_open { "Collapse sidebar" } else { "Expand sidebar" } }
                onclick={ctx.link().callback(|_| Msg::ToggleSidebar)}
            >
                <i class={icon}></i>{ format!(" {}", label) }
            </button>
        </header>
    }
}
