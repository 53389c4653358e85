//! Sidebar dataset summaries.
//!
//! Both summaries are fetched on their own; a panel whose fetch fails keeps
//! showing its placeholder and never blocks the other one.

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::model::{DatasetOverview, EntityMode};
use strum::IntoEnumIterator;

/// Fetches the summary of one dataset.
pub async fn fetch_overview<G: Gateway>(
    gateway: &G,
    mode: EntityMode,
) -> Result<DatasetOverview, GatewayError> {
    match mode {
        EntityMode::Package => gateway.package_overview().await.map(DatasetOverview::from),
        EntityMode::Receptacle => gateway.receptacle_overview().await.map(DatasetOverview::from),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewPanels {
    package: Option<DatasetOverview>,
    receptacle: Option<DatasetOverview>,
}

impl OverviewPanels {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until that dataset's summary has arrived.
    pub fn get(&self, mode: EntityMode) -> Option<&DatasetOverview> {
        match mode {
            EntityMode::Package => self.package.as_ref(),
            EntityMode::Receptacle => self.receptacle.as_ref(),
        }
    }

    /// Files the summary under the panel matching its dataset.
    pub fn store(&mut self, overview: DatasetOverview) {
        match overview.mode() {
            EntityMode::Package => self.package = Some(overview),
            EntityMode::Receptacle => self.receptacle = Some(overview),
        }
    }

    /// Fetches every dataset summary in turn. Failures are logged and skipped.
    pub async fn load<G: Gateway>(&mut self, gateway: &G) {
        for mode in EntityMode::iter() {
            match fetch_overview(gateway, mode).await {
                Ok(overview) => self.store(overview),
                Err(err) => log::error!("Failed to load {} overview: {}", mode, err),
            }
        }
    }
}
