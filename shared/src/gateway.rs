use crate::error::GatewayError;
use crate::model::{
    ChatReply, EntityMode, PackageOverview, PackagePrediction, Prediction, PredictionReply,
    ReceptacleOverview, ReceptaclePrediction,
};

/// The remote tracking API as seen by the controllers.
///
/// Implementations are stateless; the browser one lives in the frontend and
/// tests use an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn package_overview(&self) -> Result<PackageOverview, GatewayError>;

    async fn receptacle_overview(&self) -> Result<ReceptacleOverview, GatewayError>;

    async fn predict_package(
        &self,
        identifier: &str,
    ) -> Result<PredictionReply<PackagePrediction>, GatewayError>;

    async fn predict_receptacle(
        &self,
        identifier: &str,
    ) -> Result<PredictionReply<ReceptaclePrediction>, GatewayError>;

    async fn send_chat(&self, message: &str) -> Result<ChatReply, GatewayError>;

    /// Locator of the PDF export for a package; no request is made.
    fn export_url(&self, package_id: &str) -> String;

    /// Calls the prediction operation matching `mode`.
    async fn predict(
        &self,
        mode: EntityMode,
        identifier: &str,
    ) -> Result<PredictionReply<Prediction>, GatewayError> {
        match mode {
            EntityMode::Package => Ok(self.predict_package(identifier).await?.map(Prediction::from)),
            EntityMode::Receptacle => {
                Ok(self.predict_receptacle(identifier).await?.map(Prediction::from))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use crate::model::{EventType, JourneyHistoryRow, RouteSpeed};
    use std::cell::RefCell;
    use std::collections::{BTreeMap, VecDeque};

    /// Scripted gateway: every call pops the next queued answer and is recorded.
    #[derive(Default)]
    pub(crate) struct FakeGateway {
        pub packages: RefCell<VecDeque<Result<PredictionReply<PackagePrediction>, GatewayError>>>,
        pub receptacles:
            RefCell<VecDeque<Result<PredictionReply<ReceptaclePrediction>, GatewayError>>>,
        pub chat: RefCell<VecDeque<Result<ChatReply, GatewayError>>>,
        pub package_overviews: RefCell<VecDeque<Result<PackageOverview, GatewayError>>>,
        pub receptacle_overviews: RefCell<VecDeque<Result<ReceptacleOverview, GatewayError>>>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        pub fn with_package(self, reply: Result<PredictionReply<PackagePrediction>, GatewayError>) -> Self {
            self.packages.borrow_mut().push_back(reply);
            self
        }

        pub fn with_receptacle(
            self,
            reply: Result<PredictionReply<ReceptaclePrediction>, GatewayError>,
        ) -> Self {
            self.receptacles.borrow_mut().push_back(reply);
            self
        }

        pub fn with_chat(self, reply: Result<ChatReply, GatewayError>) -> Self {
            self.chat.borrow_mut().push_back(reply);
            self
        }

        pub fn with_package_overview(self, reply: Result<PackageOverview, GatewayError>) -> Self {
            self.package_overviews.borrow_mut().push_back(reply);
            self
        }

        pub fn with_receptacle_overview(self, reply: Result<ReceptacleOverview, GatewayError>) -> Self {
            self.receptacle_overviews.borrow_mut().push_back(reply);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    fn unscripted() -> GatewayError {
        GatewayError::Network("no scripted reply".into())
    }

    impl Gateway for FakeGateway {
        async fn package_overview(&self) -> Result<PackageOverview, GatewayError> {
            self.record("package_overview".into());
            self.package_overviews.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted()))
        }

        async fn receptacle_overview(&self) -> Result<ReceptacleOverview, GatewayError> {
            self.record("receptacle_overview".into());
            self.receptacle_overviews.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted()))
        }

        async fn predict_package(
            &self,
            identifier: &str,
        ) -> Result<PredictionReply<PackagePrediction>, GatewayError> {
            self.record(format!("predict_package:{}", identifier));
            self.packages.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted()))
        }

        async fn predict_receptacle(
            &self,
            identifier: &str,
        ) -> Result<PredictionReply<ReceptaclePrediction>, GatewayError> {
            self.record(format!("predict_receptacle:{}", identifier));
            self.receptacles.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted()))
        }

        async fn send_chat(&self, message: &str) -> Result<ChatReply, GatewayError> {
            self.record(format!("send_chat:{}", message));
            self.chat.borrow_mut().pop_front().unwrap_or_else(|| Err(unscripted()))
        }

        fn export_url(&self, package_id: &str) -> String {
            crate::routes::export_pdf_url("", package_id)
        }
    }

    pub(crate) fn package(id: &str) -> PackagePrediction {
        PackagePrediction {
            mailitm_fid: id.into(),
            recptcl_fid: None,
            current_location: "ALGER CTNI".into(),
            next_location: Some("ORAN CTR".into()),
            event_type: EventType::Text("30".into()),
            last_scan_date: "2024-03-01 10:00:00".into(),
            total_scans: 6,
            time_since_first_scan_hours: 12.0,
            receptacle_time_since_first_scan_hours: 12.0,
            prediction_hours: 30.0,
            total_estimated_hours: 42.0,
            total_estimated_days: 2.0,
            is_delayed: true,
            delay_threshold_days: 1.0,
            route_speed: RouteSpeed::Slow,
            was_saved: true,
            features: BTreeMap::from([("hour".to_string(), "10".to_string())]),
            journey_history: vec![JourneyHistoryRow {
                date: "2024-03-01 10:00:00".into(),
                location: "ALGER CTNI".into(),
                next_location: "ORAN CTR".into(),
                event_type: EventType::Text("30".into()),
            }],
        }
    }

    pub(crate) fn receptacle(id: &str) -> ReceptaclePrediction {
        ReceptaclePrediction {
            recptcl_fid: id.into(),
            origin_country: "DZ".into(),
            destination_country: "ES".into(),
            current_location: "ALGER CTNI".into(),
            next_location: None,
            event_type: EventType::Code(31),
            last_scan_date: "2024-03-01 10:00:00".into(),
            total_scans: 3,
            time_since_first_scan_hours: 4.0,
            prediction_hours: 5.0,
            total_estimated_hours: 9.0,
            total_estimated_days: 0.4,
            route_speed: RouteSpeed::Fast,
            was_saved: false,
            features: BTreeMap::new(),
            journey_history: Vec::new(),
        }
    }

    pub(crate) fn package_overview() -> PackageOverview {
        PackageOverview {
            total_shipments: 1_204_331,
            delivered: 900_000,
            in_transit: 250_000,
            delayed: 54_331,
            unique_packages: 310_552,
            date_range_start: "2023-01-01".into(),
            date_range_end: "2024-06-30".into(),
        }
    }

    pub(crate) fn receptacle_overview() -> ReceptacleOverview {
        ReceptacleOverview {
            total_records: 84_120,
            unique_receptacles: 7_310,
            date_range_start: "2023-01-01".into(),
            date_range_end: "2024-06-30".into(),
        }
    }
}
