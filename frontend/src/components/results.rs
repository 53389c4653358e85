use super::collapsible::Collapsible;
use super::utils::render_metric;
use crate::{Model, Msg};
use shared::display::format_hours;
use shared::{JourneyHistoryRow, PackagePrediction, Prediction, ReceptaclePrediction};
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let lookup = &model.lookup;
    let Some(prediction) = lookup.result().filter(|p| p.mode() == lookup.mode()) else {
        return html! {};
    };

    let summary = match prediction {
        Prediction::Package(p) => render_package_summary(p),
        Prediction::Receptacle(r) => render_receptacle_summary(r),
    };

    html! {
        <div class="results-container">
            { summary }
            { render_time_breakdown(prediction) }

            <div class={classes!("save-status", prediction.was_saved().then_some("saved"))}>
                { prediction.save_status() }
            </div>

            {
                if let Some(url) = lookup.export_url(&model.gateway) {
                    html! {
                        <a class="export-btn" href={url} target="_blank" rel="noopener noreferrer">
                            <i class="fa-solid fa-file-pdf"></i>{" Export Details as PDF"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }

            { render_details(model, ctx, prediction) }
        </div>
    }
}

fn render_package_summary(p: &PackagePrediction) -> Html {
    html! {
        <>
            if p.is_delayed {
                <div class="delay-alert">
                    <i class="fa-solid fa-triangle-exclamation"></i>
                    <div>
                        <p class="delay-title">{"Package Delayed"}</p>
                        <p>
                            { format!(
                                "Total estimated time ({} days) exceeds the {}-day threshold.",
                                p.total_estimated_days, p.delay_threshold_days
                            ) }
                        </p>
                    </div>
                </div>
            }

            <div class="result-card">
                <h2><i class="fa-solid fa-box-open"></i>{" Package Information"}</h2>
                <div class="metric-grid">
                    { render_metric("Package ID", p.mailitm_fid.clone(), None) }
                    { render_metric("Receptacle ID", p.receptacle_id().unwrap_or("N/A").to_string(), None) }
                    { render_metric("Current Location", p.current_location.clone(), None) }
                    { render_metric("Next Location", or_na(p.next_location.as_deref()), None) }
                    { render_metric("Event Type", p.event_type.to_string(), None) }
                    { render_metric("Last Scan Date", p.last_scan_date.clone(), None) }
                    { render_metric("Total Scans", p.total_scans.to_string(), None) }
                </div>
            </div>

            <div class="result-card">
                <h2><i class="fa-solid fa-clock"></i>{" Prediction Result"}</h2>
                <div class="metric-grid">
                    { render_metric(
                        "Receptacle Time Since First Scan",
                        format_hours(p.receptacle_time_since_first_scan_hours),
                        None,
                    ) }
                    { render_metric("Predicted Route Duration", format_hours(p.prediction_hours), None) }
                    { render_metric(
                        "Total Estimated Time",
                        format_hours(p.total_estimated_hours),
                        Some(format!("{} days", p.total_estimated_days)),
                    ) }
                    { render_metric(
                        "Delay Status",
                        if p.is_delayed { "DELAYED" } else { "On Time" },
                        Some(format!("Threshold: {} days", p.delay_threshold_days)),
                    ) }
                </div>
            </div>
        </>
    }
}

fn render_receptacle_summary(r: &ReceptaclePrediction) -> Html {
    html! {
        <>
            <div class="result-card">
                <h2><i class="fa-solid fa-boxes-stacked"></i>{" Receptacle Information"}</h2>
                <div class="metric-grid">
                    { render_metric("Receptacle ID", r.recptcl_fid.clone(), None) }
                    { render_metric("Origin Country", r.origin_country.clone(), None) }
                    { render_metric("Destination Country", r.destination_country.clone(), None) }
                    { render_metric("Current Location", r.current_location.clone(), None) }
                    { render_metric("Next Location", or_na(r.next_location.as_deref()), None) }
                    { render_metric("Event Type", r.event_type.to_string(), None) }
                    { render_metric("Last Scan Date", r.last_scan_date.clone(), None) }
                    { render_metric("Total Scans", r.total_scans.to_string(), None) }
                </div>
            </div>

            <div class="result-card">
                <h2><i class="fa-solid fa-clock"></i>{" Prediction Result"}</h2>
                <div class="metric-grid">
                    { render_metric("Time Since First Scan", format_hours(r.time_since_first_scan_hours), None) }
                    { render_metric("Predicted Route Duration", format_hours(r.prediction_hours), None) }
                    { render_metric(
                        "Total Estimated Time",
                        format_hours(r.total_estimated_hours),
                        Some(format!("{} days", r.total_estimated_days)),
                    ) }
                </div>
            </div>
        </>
    }
}

fn render_time_breakdown(prediction: &Prediction) -> Html {
    let duration = prediction.route_duration();
    let badge = prediction.speed_badge();

    html! {
        <div class="result-card">
            <h2><i class="fa-solid fa-chart-line"></i>{" Time Breakdown"}</h2>
            <div class="breakdown-grid">
                <div class="metric">
                    <p class="metric-label">{ duration.caption() }</p>
                    <p class="metric-value large">{ duration.to_string() }</p>
                </div>
                <div class="speed-badge" style={format!("background-color: {};", badge.tone.background())}>
                    <span style={format!("color: {};", badge.tone.color())}>
                        { format!("{} {}", badge.tone.marker(), badge.label) }
                    </span>
                </div>
            </div>
        </div>
    }
}

fn render_details(model: &Model, ctx: &Context<Model>, prediction: &Prediction) -> Html {
    let link = ctx.link();
    let history_title = format!("{} Journey History", prediction.mode().label());

    html! {
        <>
            <Collapsible
                title="Features Used for Prediction"
                open={model.features_open}
                on_toggle={link.callback(|_| Msg::ToggleFeatures)}
            >
                { render_features_table(prediction.features()) }
            </Collapsible>
            <Collapsible
                title={history_title}
                open={model.history_open}
                on_toggle={link.callback(|_| Msg::ToggleHistory)}
            >
                { render_history_table(prediction.journey_history()) }
            </Collapsible>
        </>
    }
}

fn render_features_table(features: &BTreeMap<String, String>) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr><th>{"Feature"}</th><th>{"Value"}</th></tr>
            </thead>
            <tbody>
                { for features.iter().map(|(name, value)| html! {
                    <tr key={name.clone()}>
                        <td class="mono">{ name }</td>
                        <td>{ value }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn render_history_table(rows: &[JourneyHistoryRow]) -> Html {
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    <th>{"Location"}</th>
                    <th>{"Next Location"}</th>
                    <th>{"Event"}</th>
                </tr>
            </thead>
            <tbody>
                { for rows.iter().map(|row| html! {
                    <tr>
                        <td class="nowrap">{ &row.date }</td>
                        <td>{ &row.location }</td>
                        <td>{ &row.next_location }</td>
                        <td>{ row.event_type.to_string() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn or_na(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
        .to_string()
}
