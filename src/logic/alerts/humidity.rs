use super::{AlertRule, IssueContext};
use crate::models::{Alert, AlertSeverity, AlertType, Observation};
use chrono::Duration;

const HUMIDITY_THRESHOLD: f64 = 85.0;

/// Fungal-disease humidity advisory, valid for 12 hours
pub struct HumidityAlertRule;

impl AlertRule for HumidityAlertRule {
    fn id(&self) -> &'static str {
        "high_humidity"
    }

    fn name(&self) -> &'static str {
        "High Humidity Advisory"
    }

    fn evaluate(&self, observation: &Observation, ctx: &IssueContext<'_>) -> Option<Alert> {
        if observation.humidity <= HUMIDITY_THRESHOLD {
            return None;
        }

        Some(ctx.issue(
            self.id(),
            AlertType::Advisory,
            AlertSeverity::Moderate,
            self.name(),
            format!(
                "Humidity is {}%. Monitor crops for fungal diseases and ensure proper ventilation.",
                observation.humidity
            ),
            Duration::hours(12),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alerts::testing::ctx;

    #[test]
    fn fires_only_above_threshold() {
        let areas = vec![];
        let mut obs = Observation::fallback();
        obs.humidity = 85.0;
        assert!(HumidityAlertRule.evaluate(&obs, &ctx(&areas)).is_none());

        obs.humidity = 86.0;
        let alert = HumidityAlertRule.evaluate(&obs, &ctx(&areas)).unwrap();
        assert_eq!(alert.alert_type, AlertType::Advisory);
        assert_eq!(alert.severity, AlertSeverity::Moderate);
        assert_eq!(alert.end_time - alert.start_time, Duration::hours(12));
    }
}
