use yew::prelude::*;

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

/// A labelled value card, optionally with a smaller caption underneath.
pub fn render_metric(label: &str, value: impl Into<AttrValue>, sub: Option<String>) -> Html {
    let value: AttrValue = value.into();

    html! {
        <div class="metric">
            <p class="metric-label">{ label.to_string() }</p>
            <p class="metric-value">{ value }</p>
            {
                if let Some(sub) = sub {
                    html! { <p class="metric-sub">{ sub }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
