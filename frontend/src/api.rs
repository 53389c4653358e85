use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::routes;
use shared::{
    ChatReply, ChatRequest, EntityMode, Gateway, GatewayError, PackageOverview, PackagePrediction,
    PredictionReply, ReceptacleOverview, ReceptaclePrediction,
};

/// Talks to the tracking API over `fetch`.
///
/// The base is fixed at build time through `DASHBOARD_API_BASE`; when unset
/// requests go to the origin that served the page.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpGateway {
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(option_env!("DASHBOARD_API_BASE").unwrap_or_default())
    }
}

fn network_error(err: gloo_net::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Status { status, body });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, GatewayError> {
    let response = Request::get(url).send().await.map_err(network_error)?;
    read_json(response).await
}

async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, GatewayError> {
    let response = Request::post(url).send().await.map_err(network_error)?;
    read_json(response).await
}

impl Gateway for HttpGateway {
    async fn package_overview(&self) -> Result<PackageOverview, GatewayError> {
        get_json(&self.url(routes::PACKAGE_OVERVIEW)).await
    }

    async fn receptacle_overview(&self) -> Result<ReceptacleOverview, GatewayError> {
        get_json(&self.url(routes::RECEPTACLE_OVERVIEW)).await
    }

    async fn predict_package(
        &self,
        identifier: &str,
    ) -> Result<PredictionReply<PackagePrediction>, GatewayError> {
        post_empty(&self.url(&routes::predict_path(EntityMode::Package, identifier))).await
    }

    async fn predict_receptacle(
        &self,
        identifier: &str,
    ) -> Result<PredictionReply<ReceptaclePrediction>, GatewayError> {
        post_empty(&self.url(&routes::predict_path(EntityMode::Receptacle, identifier))).await
    }

    async fn send_chat(&self, message: &str) -> Result<ChatReply, GatewayError> {
        let body = ChatRequest { message: message.to_string() };
        let request = Request::post(&self.url(routes::CHAT))
            .json(&body)
            .map_err(network_error)?;
        let response = request.send().await.map_err(network_error)?;
        read_json(response).await
    }

    fn export_url(&self, package_id: &str) -> String {
        routes::export_pdf_url(&self.base, package_id)
    }
}
