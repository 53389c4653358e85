mod api;
mod components;

use api::HttpGateway;
use components::chat_panel::{ChatPanel, ChatPlacement};
use components::{handlers, header, lookup_section, results, sidebar};
use shared::{
    DatasetOverview, EntityMode, GatewayError, LookupController, OverviewPanels, Prediction,
    PredictionReply, PredictionTicket,
};
use yew::prelude::*;

// Yew msg components
pub(crate) enum Msg {
    // Lookup operations
    SetMode(EntityMode),
    SetInput(String),
    Submit,
    PredictionDone(PredictionTicket, Result<PredictionReply<Prediction>, GatewayError>),

    // Sidebar data
    OverviewLoaded(DatasetOverview),

    // UI states
    ToggleFeatures,
    ToggleHistory,
    ToggleSidebar,
}

// Main component
pub(crate) struct Model {
    lookup: LookupController,
    gateway: HttpGateway,
    overviews: OverviewPanels,
    // Panel preferences survive mode switches and new lookups.
    features_open: bool,
    history_open: bool,
    sidebar_open: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let model = Self {
            lookup: LookupController::new(),
            gateway: HttpGateway::default(),
            overviews: OverviewPanels::new(),
            features_open: false,
            history_open: false,
            sidebar_open: true,
        };

        handlers::load_overviews(ctx, &model.gateway);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Lookup operations
            Msg::SetMode(mode) => handlers::handle_set_mode(self, mode),
            Msg::SetInput(value) => handlers::handle_set_input(self, value),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionDone(ticket, outcome) => {
                handlers::handle_prediction_done(self, ticket, outcome)
            }

            // Sidebar data
            Msg::OverviewLoaded(overview) => handlers::handle_overview_loaded(self, overview),

            // UI states
            Msg::ToggleFeatures => {
                self.features_open = !self.features_open;
                true
            }
            Msg::ToggleHistory => {
                self.history_open = !self.history_open;
                true
            }
            Msg::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header(self, ctx) }

                <div class="dashboard-layout">
                    { sidebar::render_sidebar(self) }

                    <main class="main-content">
                        { lookup_section::render_lookup_section(self, ctx) }
                        { results::render_results(self, ctx) }
                    </main>
                </div>

                <ChatPanel placement={ChatPlacement::Floating} />
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<Model>::new().render();
}
