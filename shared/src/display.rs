//! Values derived from a prediction for display. Nothing here is stored.

use crate::model::{Prediction, RouteSpeed};
use std::fmt;

/// Predicted route duration bucketed for display: under a day it is shown
/// in whole minutes, from 24 hours on in days with one decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteDuration {
    Minutes(u64),
    Days(f64),
}

impl RouteDuration {
    pub fn from_hours(hours: f64) -> Self {
        if hours >= 24.0 {
            RouteDuration::Days(round_tenths(hours / 24.0))
        } else {
            RouteDuration::Minutes((hours.max(0.0) * 60.0).round() as u64)
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            RouteDuration::Minutes(_) => "Route Duration (minutes)",
            RouteDuration::Days(_) => "Route Duration (days)",
        }
    }
}

impl fmt::Display for RouteDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDuration::Minutes(minutes) => write!(f, "{} min", minutes),
            RouteDuration::Days(days) => write!(f, "{:.1} days", days),
        }
    }
}

// Ties round away from zero, so 1.25 days reads "1.3".
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Green => "#22c55e",
            Tone::Yellow => "#eab308",
            Tone::Red => "#ef4444",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Tone::Green => "rgba(34,197,94,0.15)",
            Tone::Yellow => "rgba(234,179,8,0.15)",
            Tone::Red => "rgba(239,68,68,0.15)",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Tone::Green => "🟢",
            Tone::Yellow => "🟡",
            Tone::Red => "🔴",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedBadge {
    pub tone: Tone,
    pub label: &'static str,
}

/// A set delay flag wins over whatever the route speed says.
pub fn speed_badge(route_speed: RouteSpeed, delayed: bool) -> SpeedBadge {
    if delayed {
        return SpeedBadge { tone: Tone::Red, label: "Delayed" };
    }
    match route_speed {
        RouteSpeed::Fast => SpeedBadge { tone: Tone::Green, label: "Fast Route" },
        RouteSpeed::Normal => SpeedBadge { tone: Tone::Yellow, label: "Normal Route" },
        RouteSpeed::Slow => SpeedBadge { tone: Tone::Red, label: "Slow Route" },
    }
}

impl Prediction {
    pub fn route_duration(&self) -> RouteDuration {
        RouteDuration::from_hours(self.prediction_hours())
    }

    pub fn speed_badge(&self) -> SpeedBadge {
        speed_badge(self.route_speed(), self.is_delayed())
    }

    pub fn save_status(&self) -> &'static str {
        match (self, self.was_saved()) {
            (_, false) => "This prediction already exists in the log (not saved again).",
            (Prediction::Package(_), true) => "Prediction saved to package log.",
            (Prediction::Receptacle(_), true) => "Prediction saved to receptacle log.",
        }
    }
}

/// Formats a count with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Hours with two decimals, the way metric cards show them.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2} hours", hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::package;

    #[test]
    fn durations_under_a_day_render_in_minutes() {
        let duration = RouteDuration::from_hours(23.9);
        assert_eq!(duration, RouteDuration::Minutes(1434));
        assert_eq!(duration.to_string(), "1434 min");
        assert_eq!(duration.caption(), "Route Duration (minutes)");
    }

    #[test]
    fn durations_from_a_day_render_in_days() {
        assert_eq!(RouteDuration::from_hours(24.0).to_string(), "1.0 days");
        assert_eq!(RouteDuration::from_hours(30.0).to_string(), "1.3 days");
        assert_eq!(RouteDuration::from_hours(30.0).caption(), "Route Duration (days)");
    }

    #[test]
    fn delay_overrides_route_speed() {
        for speed in [RouteSpeed::Fast, RouteSpeed::Normal, RouteSpeed::Slow] {
            let badge = speed_badge(speed, true);
            assert_eq!(badge.tone, Tone::Red);
            assert_eq!(badge.label, "Delayed");
        }
        assert_eq!(speed_badge(RouteSpeed::Fast, false).tone, Tone::Green);
        assert_eq!(speed_badge(RouteSpeed::Normal, false).tone, Tone::Yellow);
        assert_eq!(speed_badge(RouteSpeed::Slow, false).label, "Slow Route");
    }

    #[test]
    fn prediction_badge_uses_package_delay_flag() {
        let mut pkg = package("RR123456789DZ");
        pkg.route_speed = RouteSpeed::Fast;
        pkg.is_delayed = true;
        let prediction = Prediction::from(pkg);
        assert_eq!(prediction.speed_badge().label, "Delayed");
        assert_eq!(prediction.save_status(), "Prediction saved to package log.");
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn hours_keep_two_decimals() {
        assert_eq!(format_hours(42.0), "42.00 hours");
    }
}
