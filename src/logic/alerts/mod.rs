pub mod heat;
pub mod humidity;
pub mod synthesizer;
pub mod wind;

pub use synthesizer::AlertSynthesizer;

use crate::models::{Alert, AlertSeverity, AlertType, Observation};
use chrono::{DateTime, Duration, Utc};

/// Issue time and target areas shared by every alert from one synthesis pass.
#[derive(Debug, Clone, Copy)]
pub struct IssueContext<'a> {
    pub issued_at: DateTime<Utc>,
    pub areas: &'a [String],
}

impl IssueContext<'_> {
    /// Build an alert valid from the issue time for `valid_for`.
    ///
    /// The id is the slug suffixed with the issue time in milliseconds, so
    /// repeated passes produce fresh ids with identical content.
    pub fn issue(
        &self,
        slug: &str,
        alert_type: AlertType,
        severity: AlertSeverity,
        title: impl Into<String>,
        description: impl Into<String>,
        valid_for: Duration,
    ) -> Alert {
        Alert {
            id: format!("{}_{}", slug, self.issued_at.timestamp_millis()),
            alert_type,
            severity,
            title: title.into(),
            description: description.into(),
            start_time: self.issued_at,
            end_time: self.issued_at + valid_for,
            areas: self.areas.to_vec(),
        }
    }
}

/// Threshold check that turns an observation into at most one alert
pub trait AlertRule: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn evaluate(&self, observation: &Observation, ctx: &IssueContext<'_>) -> Option<Alert>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::IssueContext;
    use chrono::{DateTime, TimeZone, Utc};

    pub fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap()
    }

    pub fn ctx(areas: &[String]) -> IssueContext<'_> {
        IssueContext {
            issued_at: issued_at(),
            areas,
        }
    }
}
