use derive_more::From;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Which identifier namespace the lookup operates on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityMode {
    #[default]
    Package,
    Receptacle,
}

impl EntityMode {
    pub fn label(self) -> &'static str {
        match self {
            EntityMode::Package => "Package",
            EntityMode::Receptacle => "Receptacle",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            EntityMode::Package => "e.g., RR123456789DZ",
            EntityMode::Receptacle => "e.g., DZALGDESMADBAUL50018001110033",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouteSpeed {
    Fast,
    Normal,
    Slow,
}

/// Event codes arrive either as numbers or as strings depending on the
/// dataset column type, so both are kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventType {
    Code(i64),
    Text(String),
}

impl Default for EventType {
    fn default() -> Self {
        EventType::Text(String::new())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Code(code) => write!(f, "{}", code),
            EventType::Text(text) => f.write_str(text),
        }
    }
}

/// One scan event. Rows keep the order the server sent them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyHistoryRow {
    pub date: String,
    #[serde(rename = "etablissement_postal", default)]
    pub location: String,
    #[serde(rename = "next_etablissement_postal", default)]
    pub next_location: String,
    #[serde(rename = "EVENT_TYPE_CD", default)]
    pub event_type: EventType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagePrediction {
    pub mailitm_fid: String,
    #[serde(default)]
    pub recptcl_fid: Option<String>,
    pub current_location: String,
    #[serde(default)]
    pub next_location: Option<String>,
    pub event_type: EventType,
    pub last_scan_date: String,
    pub total_scans: u64,
    pub time_since_first_scan_hours: f64,
    #[serde(default)]
    pub receptacle_time_since_first_scan_hours: f64,
    pub prediction_hours: f64,
    pub total_estimated_hours: f64,
    pub total_estimated_days: f64,
    pub is_delayed: bool,
    pub delay_threshold_days: f64,
    pub route_speed: RouteSpeed,
    pub was_saved: bool,
    #[serde(default)]
    pub features: BTreeMap<String, String>,
    #[serde(default)]
    pub journey_history: Vec<JourneyHistoryRow>,
}

impl PackagePrediction {
    /// The linked receptacle. The server sends `""` when the package has none.
    pub fn receptacle_id(&self) -> Option<&str> {
        self.recptcl_fid.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceptaclePrediction {
    pub recptcl_fid: String,
    pub origin_country: String,
    pub destination_country: String,
    pub current_location: String,
    #[serde(default)]
    pub next_location: Option<String>,
    pub event_type: EventType,
    pub last_scan_date: String,
    pub total_scans: u64,
    pub time_since_first_scan_hours: f64,
    pub prediction_hours: f64,
    pub total_estimated_hours: f64,
    pub total_estimated_days: f64,
    pub route_speed: RouteSpeed,
    pub was_saved: bool,
    #[serde(default)]
    pub features: BTreeMap<String, String>,
    #[serde(default)]
    pub journey_history: Vec<JourneyHistoryRow>,
}

/// A prediction for exactly one entity kind.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Prediction {
    Package(PackagePrediction),
    Receptacle(ReceptaclePrediction),
}

impl Prediction {
    pub fn mode(&self) -> EntityMode {
        match self {
            Prediction::Package(_) => EntityMode::Package,
            Prediction::Receptacle(_) => EntityMode::Receptacle,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Prediction::Package(p) => &p.mailitm_fid,
            Prediction::Receptacle(r) => &r.recptcl_fid,
        }
    }

    pub fn prediction_hours(&self) -> f64 {
        match self {
            Prediction::Package(p) => p.prediction_hours,
            Prediction::Receptacle(r) => r.prediction_hours,
        }
    }

    pub fn route_speed(&self) -> RouteSpeed {
        match self {
            Prediction::Package(p) => p.route_speed,
            Prediction::Receptacle(r) => r.route_speed,
        }
    }

    /// Delay semantics only exist for packages.
    pub fn is_delayed(&self) -> bool {
        matches!(self, Prediction::Package(p) if p.is_delayed)
    }

    pub fn was_saved(&self) -> bool {
        match self {
            Prediction::Package(p) => p.was_saved,
            Prediction::Receptacle(r) => r.was_saved,
        }
    }

    pub fn features(&self) -> &BTreeMap<String, String> {
        match self {
            Prediction::Package(p) => &p.features,
            Prediction::Receptacle(r) => &r.features,
        }
    }

    pub fn journey_history(&self) -> &[JourneyHistoryRow] {
        match self {
            Prediction::Package(p) => &p.journey_history,
            Prediction::Receptacle(r) => &r.journey_history,
        }
    }
}

/// Prediction endpoints answer either with the payload or with `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PredictionReply<T> {
    Rejected { error: String },
    Accepted(T),
}

impl<T> PredictionReply<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PredictionReply<U> {
        match self {
            PredictionReply::Rejected { error } => PredictionReply::Rejected { error },
            PredictionReply::Accepted(value) => PredictionReply::Accepted(f(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageOverview {
    pub total_shipments: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub in_transit: u64,
    #[serde(default)]
    pub delayed: u64,
    pub unique_packages: u64,
    pub date_range_start: String,
    pub date_range_end: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceptacleOverview {
    pub total_records: u64,
    pub unique_receptacles: u64,
    pub date_range_start: String,
    pub date_range_end: String,
}

/// Aggregate dataset summary shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum DatasetOverview {
    Package(PackageOverview),
    Receptacle(ReceptacleOverview),
}

impl DatasetOverview {
    pub fn mode(&self) -> EntityMode {
        match self {
            DatasetOverview::Package(_) => EntityMode::Package,
            DatasetOverview::Receptacle(_) => EntityMode::Receptacle,
        }
    }

    pub fn total_records(&self) -> u64 {
        match self {
            DatasetOverview::Package(p) => p.total_shipments,
            DatasetOverview::Receptacle(r) => r.total_records,
        }
    }

    pub fn unique_entities(&self) -> u64 {
        match self {
            DatasetOverview::Package(p) => p.unique_packages,
            DatasetOverview::Receptacle(r) => r.unique_receptacles,
        }
    }

    /// Inclusive `(start, end)` as the server formatted them.
    pub fn date_range(&self) -> (&str, &str) {
        match self {
            DatasetOverview::Package(p) => (&p.date_range_start, &p.date_range_end),
            DatasetOverview::Receptacle(r) => (&r.date_range_start, &r.date_range_end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn error_payload_decodes_as_rejected() {
        let reply: PredictionReply<PackagePrediction> =
            serde_json::from_value(json!({ "error": "Package ID XX not found." })).unwrap();
        assert_eq!(
            reply,
            PredictionReply::Rejected { error: "Package ID XX not found.".into() }
        );
    }

    #[test]
    fn receptacle_payload_decodes_with_numeric_event_type() {
        let payload = json!({
            "recptcl_fid": "DZALGDESMADBAUL50018001110033",
            "origin_country": "DZ",
            "destination_country": "ES",
            "current_location": "ALGER CTNI",
            "next_location": null,
            "event_type": 31,
            "last_scan_date": "2024-03-01 10:00:00",
            "total_scans": 4,
            "time_since_first_scan_hours": 12.5,
            "prediction_hours": 5.0,
            "total_estimated_hours": 17.5,
            "total_estimated_days": 0.7,
            "route_speed": "fast",
            "was_saved": false,
            "features": { "hour": "10" },
            "journey_history": [
                { "date": "2024-03-01 10:00:00", "etablissement_postal": "ALGER CTNI",
                  "next_etablissement_postal": "", "EVENT_TYPE_CD": "31" }
            ]
        });
        let reply: PredictionReply<ReceptaclePrediction> = serde_json::from_value(payload).unwrap();
        let PredictionReply::Accepted(rcp) = reply else {
            panic!("expected an accepted receptacle prediction");
        };
        assert_eq!(rcp.event_type, EventType::Code(31));
        assert_eq!(rcp.journey_history[0].event_type, EventType::Text("31".into()));
        assert_eq!(rcp.route_speed, RouteSpeed::Fast);

        let prediction = Prediction::from(rcp);
        assert_eq!(prediction.mode(), EntityMode::Receptacle);
        assert!(!prediction.is_delayed());
    }

    #[test]
    fn package_payload_decodes_as_the_server_sends_it() {
        let payload = json!({
            "mailitm_fid": "RR123456789DZ",
            "prediction_hours": 30,
            "time_since_first_scan_hours": 6.5,
            "total_estimated_hours": 42,
            "total_estimated_days": 2,
            "is_delayed": true,
            "delay_threshold_days": 1,
            "route_speed": "slow",
            "current_location": "ALGER CTNI",
            "next_location": null,
            "event_type": "30",
            "last_scan_date": "2024-03-01 10:00:00",
            "total_scans": 6,
            "recptcl_fid": "",
            "was_saved": true,
            "features": { "hour": "10", "is_holiday": "0" },
            "journey_history": [
                { "date": "2024-03-01 10:00:00", "etablissement_postal": "ALGER CTNI",
                  "next_etablissement_postal": "ORAN CTR", "EVENT_TYPE_CD": "30" },
                { "date": "2024-02-29 18:00:00", "etablissement_postal": "ALGER GARE",
                  "next_etablissement_postal": "ALGER CTNI", "EVENT_TYPE_CD": "35" }
            ]
        });
        let reply: PredictionReply<PackagePrediction> = serde_json::from_value(payload).unwrap();
        let PredictionReply::Accepted(pkg) = reply else {
            panic!("expected an accepted package prediction");
        };
        assert_eq!(pkg.receptacle_id(), None);
        assert_eq!(pkg.next_location, None);
        assert_eq!(pkg.event_type, EventType::Text("30".into()));
        assert_eq!(pkg.delay_threshold_days, 1.0);
        assert_eq!(pkg.total_estimated_days, 2.0);
        assert_eq!(pkg.receptacle_time_since_first_scan_hours, 0.0);
        assert_eq!(pkg.journey_history[1].location, "ALGER GARE");

        let prediction = Prediction::from(pkg);
        assert_eq!(prediction.mode(), EntityMode::Package);
        assert!(prediction.is_delayed());
        assert_eq!(prediction.route_duration().to_string(), "1.3 days");
        assert_eq!(prediction.speed_badge().label, "Delayed");
    }

    #[test]
    fn integer_threshold_decodes_into_days() {
        let mut payload = serde_json::to_value(crate::gateway::fake::package("RR1DZ")).unwrap();
        payload["delay_threshold_days"] = json!(15);
        payload["recptcl_fid"] = json!("DZALGDESMADBAUL50018001110033");
        let pkg: PackagePrediction = serde_json::from_value(payload).unwrap();
        assert_eq!(pkg.delay_threshold_days, 15.0);
        assert_eq!(pkg.receptacle_id(), Some("DZALGDESMADBAUL50018001110033"));
    }

    #[test]
    fn empty_linked_receptacle_is_treated_as_missing() {
        let mut pkg = crate::gateway::fake::package("RR1DZ");
        pkg.recptcl_fid = Some(String::new());
        assert_eq!(pkg.receptacle_id(), None);
        pkg.recptcl_fid = None;
        assert_eq!(pkg.receptacle_id(), None);
        pkg.recptcl_fid = Some("DZALG1".into());
        assert_eq!(pkg.receptacle_id(), Some("DZALG1"));
    }

    #[test]
    fn package_overview_tolerates_missing_status_counts() {
        let overview: PackageOverview = serde_json::from_value(json!({
            "total_shipments": 120,
            "unique_packages": 30,
            "date_range_start": "2023-01-01",
            "date_range_end": "2023-12-31"
        }))
        .unwrap();
        assert_eq!(overview.delivered, 0);

        let overview = DatasetOverview::from(overview);
        assert_eq!(overview.total_records(), 120);
        assert_eq!(overview.unique_entities(), 30);
        assert_eq!(overview.date_range(), ("2023-01-01", "2023-12-31"));
    }

    #[test]
    fn mode_round_trips_through_its_wire_name() {
        assert_eq!(EntityMode::Receptacle.to_string(), "receptacle");
        assert_eq!(EntityMode::from_str("package").unwrap(), EntityMode::Package);
        assert_eq!(ChatRole::Assistant.to_string(), "assistant");
    }
}
