use super::utils::render_error_message;
use crate::{Model, Msg};
use shared::EntityMode;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn mode_icon(mode: EntityMode) -> &'static str {
    match mode {
        EntityMode::Package => "fa-solid fa-box-open",
        EntityMode::Receptacle => "fa-solid fa-boxes-stacked",
    }
}

pub fn render_lookup_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let lookup = &model.lookup;

    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetInput(input.value())
    });
    let handle_keydown =
        link.batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));

    html! {
        <section class="lookup-section">
            <h2><i class="fa-solid fa-magnifying-glass"></i>{" Lookup & Prediction"}</h2>

            <div class="mode-toggle">
                { for EntityMode::iter().map(|mode| html! {
                    <button
                        class={classes!("mode-btn", (lookup.mode() == mode).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetMode(mode))}
                    >
                        <i class={mode_icon(mode)}></i>{ format!(" {}", mode.label()) }
                    </button>
                }) }
            </div>

            <div class="lookup-form">
                <input
                    type="text"
                    class="lookup-input"
                    value={lookup.input_id().to_string()}
                    placeholder={lookup.mode().placeholder()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                />
                <button
                    class="analyze-btn"
                    disabled={lookup.is_loading()}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    {
                        if lookup.is_loading() {
                            html! { <i class="fa-solid fa-spinner fa-spin"></i> }
                        } else {
                            html! { <i class="fa-solid fa-chart-line"></i> }
                        }
                    }
                    {" Predict Route Duration"}
                </button>
            </div>

            { render_error_message(lookup.error_message()) }
        </section>
    }
}
