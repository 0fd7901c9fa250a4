use super::{AlertRule, IssueContext};
use crate::models::{Alert, AlertSeverity, AlertType, Observation};
use chrono::Duration;

const WIND_THRESHOLD_MS: f64 = 8.0;
const SEVERE_WIND_MS: f64 = 12.0;

/// Strong wind warning.
///
/// Tall crops lodge and spray drifts above 8 m/s; severe above 12 m/s.
/// Valid for 8 hours.
pub struct WindAlertRule;

impl AlertRule for WindAlertRule {
    fn id(&self) -> &'static str {
        "strong_wind"
    }

    fn name(&self) -> &'static str {
        "Strong Wind Alert"
    }

    fn evaluate(&self, observation: &Observation, ctx: &IssueContext<'_>) -> Option<Alert> {
        let wind = observation.wind_speed;
        if wind <= WIND_THRESHOLD_MS {
            return None;
        }

        let severity = if wind > SEVERE_WIND_MS {
            AlertSeverity::Severe
        } else {
            AlertSeverity::Moderate
        };

        Some(ctx.issue(
            self.id(),
            AlertType::Warning,
            severity,
            self.name(),
            format!(
                "Wind speed is {} m/s. Secure tall crops and avoid spraying pesticides.",
                wind
            ),
            Duration::hours(8),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alerts::testing::ctx;

    fn observation(wind_speed: f64) -> Observation {
        Observation {
            wind_speed,
            ..Observation::fallback()
        }
    }

    #[test]
    fn boundaries() {
        let areas = vec![];
        assert!(WindAlertRule.evaluate(&observation(8.0), &ctx(&areas)).is_none());

        let moderate = WindAlertRule.evaluate(&observation(12.0), &ctx(&areas)).unwrap();
        assert_eq!(moderate.severity, AlertSeverity::Moderate);

        let severe = WindAlertRule.evaluate(&observation(12.5), &ctx(&areas)).unwrap();
        assert_eq!(severe.severity, AlertSeverity::Severe);
        assert_eq!(severe.alert_type, AlertType::Warning);
        assert_eq!(severe.end_time - severe.start_time, Duration::hours(8));
    }
}
