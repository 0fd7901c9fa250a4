use super::alert::Alert;
use super::forecast::Forecast;
use super::observation::{Coordinates, Observation};
use super::recommendation::{sort_by_urgency, Recommendation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSource {
    /// Alerts issued by the upstream weather service
    Upstream,
    /// Alerts derived locally from the current observation
    Synthesized,
}

impl AlertSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSource::Upstream => "OpenWeatherMap",
            AlertSource::Synthesized => "Local thresholds",
        }
    }
}

impl std::fmt::Display for AlertSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything one refresh produces for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmReport {
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub observation: Observation,
    pub forecast: Forecast,
    pub alerts: Vec<Alert>,
    pub alert_source: AlertSource,
    /// Recommendations in fixed rule-evaluation order
    pub recommendations: Vec<Recommendation>,
    /// True when fallback data replaced a live observation or forecast
    pub degraded: bool,
    pub generated_at: DateTime<Utc>,
}

impl FarmReport {
    pub fn recommendations_by_urgency(&self) -> Vec<Recommendation> {
        let mut sorted = self.recommendations.clone();
        sort_by_urgency(&mut sorted);
        sorted
    }

    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.is_active_at(self.generated_at))
            .collect()
    }
}
