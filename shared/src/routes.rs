//! Paths of the tracking API, relative to the API base.

use crate::model::EntityMode;

pub const API_PREFIX: &str = "/api";
pub const PACKAGE_OVERVIEW: &str = "/api/stats/overview";
pub const RECEPTACLE_OVERVIEW: &str = "/api/stats/receptacle/overview";
pub const CHAT: &str = "/api/chat";

pub fn predict_path(mode: EntityMode, identifier: &str) -> String {
    let id = urlencoding::encode(identifier);
    match mode {
        EntityMode::Package => format!("{}/predict/{}", API_PREFIX, id),
        EntityMode::Receptacle => format!("{}/predict/receptacle/{}", API_PREFIX, id),
    }
}

/// Locator of the PDF report for a package. The browser opens it directly.
pub fn export_pdf_url(api_base: &str, package_id: &str) -> String {
    format!(
        "{}{}/export/pdf/{}",
        api_base.trim_end_matches('/'),
        API_PREFIX,
        urlencoding::encode(package_id)
    )
}
