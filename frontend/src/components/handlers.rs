use crate::api::HttpGateway;
use crate::{Model, Msg};
use shared::overview::fetch_overview;
use shared::{DatasetOverview, EntityMode, Gateway, GatewayError, Prediction, PredictionReply, PredictionTicket};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_set_mode(model: &mut Model, mode: EntityMode) -> bool {
    model.lookup.set_mode(mode);
    true
}

pub fn handle_set_input(model: &mut Model, value: String) -> bool {
    model.lookup.set_input(value);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.lookup.begin_submit() {
        Ok(ticket) => send_prediction_request(ctx, model.gateway.clone(), ticket),
        Err(err) => log::warn!("Prediction not requested: {}", err),
    }
    true
}

pub fn handle_prediction_done(
    model: &mut Model,
    ticket: PredictionTicket,
    outcome: Result<PredictionReply<Prediction>, GatewayError>,
) -> bool {
    model.lookup.complete(&ticket, outcome)
}

pub fn handle_overview_loaded(model: &mut Model, overview: DatasetOverview) -> bool {
    model.overviews.store(overview);
    true
}

/// Fires one overview request per dataset. A failure is only logged and
/// leaves its panel on the loading placeholder.
pub fn load_overviews(ctx: &Context<Model>, gateway: &HttpGateway) {
    for mode in EntityMode::iter() {
        spawn_local({
            let link = ctx.link().clone();
            let gateway = gateway.clone();

            async move {
                match fetch_overview(&gateway, mode).await {
                    Ok(overview) => link.send_message(Msg::OverviewLoaded(overview)),
                    Err(e) => {
                        gloo_console::error!(format!("Failed to load {} overview: {}", mode, e));
                    }
                }
            }
        });
    }
}

pub fn send_prediction_request(ctx: &Context<Model>, gateway: HttpGateway, ticket: PredictionTicket) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = gateway.predict(ticket.mode, &ticket.identifier).await;
            link.send_message(Msg::PredictionDone(ticket, outcome));
        }
    });
}
