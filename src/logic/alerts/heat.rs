use super::{AlertRule, IssueContext};
use crate::models::{Alert, AlertSeverity, AlertType, Observation};
use chrono::Duration;

const HEAT_THRESHOLD_C: f64 = 35.0;
const SEVERE_HEAT_C: f64 = 40.0;

/// High temperature warning.
///
/// Fires above 35°C and escalates to severe above 40°C. Valid for 24 hours.
pub struct HeatAlertRule;

impl AlertRule for HeatAlertRule {
    fn id(&self) -> &'static str {
        "high_temp"
    }

    fn name(&self) -> &'static str {
        "High Temperature Warning"
    }

    fn evaluate(&self, observation: &Observation, ctx: &IssueContext<'_>) -> Option<Alert> {
        let temp = observation.temperature;
        if temp <= HEAT_THRESHOLD_C {
            return None;
        }

        let severity = if temp > SEVERE_HEAT_C {
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
                "Temperature is {}°C. Take precautions to protect crops and increase irrigation.",
                temp
            ),
            Duration::hours(24),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alerts::testing::{ctx, issued_at};

    fn observation(temperature: f64) -> Observation {
        Observation {
            temperature,
            ..Observation::fallback()
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        let areas = vec!["Your Area".to_string()];
        assert!(HeatAlertRule.evaluate(&observation(35.0), &ctx(&areas)).is_none());
        let alert = HeatAlertRule
            .evaluate(&observation(35.01), &ctx(&areas))
            .unwrap();
        assert_eq!(alert.alert_type, AlertType::Warning);
        assert_eq!(alert.severity, AlertSeverity::Moderate);
    }

    #[test]
    fn escalates_above_forty() {
        let areas = vec![];
        let at_forty = HeatAlertRule.evaluate(&observation(40.0), &ctx(&areas)).unwrap();
        assert_eq!(at_forty.severity, AlertSeverity::Moderate);
        let above = HeatAlertRule.evaluate(&observation(40.01), &ctx(&areas)).unwrap();
        assert_eq!(above.severity, AlertSeverity::Severe);
    }

    #[test]
    fn valid_for_one_day() {
        let areas = vec!["North Field".to_string()];
        let alert = HeatAlertRule.evaluate(&observation(38.0), &ctx(&areas)).unwrap();
        assert_eq!(alert.start_time, issued_at());
        assert_eq!(alert.end_time - alert.start_time, Duration::hours(24));
        assert_eq!(alert.areas, areas);
        assert!(alert.id.starts_with("high_temp_"));
        assert!(alert.description.contains("38°C"));
    }
}
