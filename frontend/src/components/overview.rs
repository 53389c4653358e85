use shared::DatasetOverview;
use shared::display::format_count;
use yew::prelude::*;

/// Sidebar card for one dataset. Stays on the placeholder until data arrives.
pub fn render_overview_panel(title: &str, icon: &str, unique_label: &str, overview: Option<&DatasetOverview>) -> Html {
    html! {
        <div class="sidebar-card">
            <h2><i class={icon.to_string()}></i>{ format!(" {}", title) }</h2>
            {
                match overview {
                    Some(overview) => {
                        let (start, end) = overview.date_range();
                        html! {
                            <div class="overview-stats">
                                <p><strong>{"Records: "}</strong>{ format_count(overview.total_records()) }</p>
                                <p><strong>{ format!("{}: ", unique_label) }</strong>{ format_count(overview.unique_entities()) }</p>
                                {
                                    if let DatasetOverview::Package(stats) = overview {
                                        html! {
                                            <p class="status-counts">
                                                { format!(
                                                    "Delivered {} \u{b7} In transit {} \u{b7} Delayed {}",
                                                    format_count(stats.delivered),
                                                    format_count(stats.in_transit),
                                                    format_count(stats.delayed),
                                                ) }
                                            </p>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                                <p><strong>{"Date range: "}</strong>{ format!("{} to {}", start, end) }</p>
                            </div>
                        }
                    }
                    None => html! { <p class="placeholder">{"Loading..."}</p> },
                }
            }
        </div>
    }
}
