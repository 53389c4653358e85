use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{error, info};
use serde::Serialize;
use shared::routes::API_PREFIX;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Upstream API unavailable")]
    Unavailable(#[source] reqwest::Error),
    #[error("Method {0} is not forwarded")]
    UnsupportedMethod(String),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::UnsupportedMethod(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
    }
}

/// The tracking API every `/api` request is forwarded to.
#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

pub fn cors_policy(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(format!("{}/{{tail:.*}}", API_PREFIX))
            .route(web::get().to(forward))
            .route(web::post().to(forward)),
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    // Registered last so it never shadows /api.
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    let target = upstream.url_for(path_and_query);

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::UnsupportedMethod(req.method().to_string()))?;

    let mut request = upstream.client.request(method, &target).body(body.to_vec());
    if let Some(content_type) = req.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
        request = request.header(reqwest::header::CONTENT_TYPE, content_type);
    }

    let response = request.send().await.map_err(|e| {
        error!("Forwarding {} {} failed: {}", req.method(), target, e);
        ProxyError::Unavailable(e)
    })?;

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let passed_headers: Vec<(&'static str, String)> = [
        (reqwest::header::CONTENT_TYPE, "content-type"),
        (reqwest::header::CONTENT_DISPOSITION, "content-disposition"),
    ]
    .into_iter()
    .filter_map(|(name, key)| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| (key, v.to_string()))
    })
    .collect();

    let bytes = response.bytes().await.map_err(|e| {
        error!("Reading upstream body for {} failed: {}", target, e);
        ProxyError::Unavailable(e)
    })?;

    info!("{} {} -> {}", req.method(), path_and_query, status.as_u16());

    let mut builder = HttpResponse::build(status);
    for (key, value) in passed_headers {
        builder.insert_header((key, value));
    }
    Ok(builder.body(bytes.to_vec()))
}
