use super::{
    heat::HeatAlertRule, humidity::HumidityAlertRule, wind::WindAlertRule, AlertRule,
    IssueContext,
};
use crate::models::{Alert, Observation};
use chrono::{DateTime, Utc};

pub const DEFAULT_AREA: &str = "Your Area";

/// Derives severity-graded alerts from an observation when the upstream
/// service issues none. Every rule is checked; none suppresses another.
pub struct AlertSynthesizer {
    rules: Vec<Box<dyn AlertRule>>,
    areas: Vec<String>,
}

impl AlertSynthesizer {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AlertRule>> = vec![
            Box::new(HeatAlertRule),
            Box::new(HumidityAlertRule),
            Box::new(WindAlertRule),
        ];

        Self {
            rules,
            areas: vec![DEFAULT_AREA.to_string()],
        }
    }

    pub fn with_areas(mut self, areas: Vec<String>) -> Self {
        if !areas.is_empty() {
            self.areas = areas;
        }
        self
    }

    /// Alerts for `observation`, issued at `now`. The caller owns the clock so
    /// one refresh stamps its report and its alerts with the same instant.
    pub fn synthesize_at(&self, observation: &Observation, now: DateTime<Utc>) -> Vec<Alert> {
        let ctx = IssueContext {
            issued_at: now,
            areas: &self.areas,
        };

        let alerts: Vec<Alert> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(observation, &ctx))
            .collect();

        tracing::debug!("Synthesized {} alert(s)", alerts.len());
        alerts
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AlertSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::alerts::testing::issued_at;
    use crate::models::{AlertSeverity, AlertType};

    fn neutral() -> Observation {
        Observation {
            temperature: 25.0,
            humidity: 55.0,
            wind_speed: 3.0,
            uv_index: 3.0,
            ..Observation::fallback()
        }
    }

    #[test]
    fn neutral_observation_yields_nothing() {
        let alerts = AlertSynthesizer::new().synthesize_at(&neutral(), issued_at());
        assert!(alerts.is_empty());
    }

    #[test]
    fn all_three_rules_fire_together() {
        let obs = Observation {
            temperature: 41.0,
            humidity: 90.0,
            wind_speed: 13.0,
            ..neutral()
        };
        let alerts = AlertSynthesizer::new().synthesize_at(&obs, issued_at());
        assert_eq!(alerts.len(), 3);

        let kinds: Vec<(AlertType, AlertSeverity)> = alerts
            .iter()
            .map(|a| (a.alert_type, a.severity))
            .collect();
        assert!(kinds.contains(&(AlertType::Warning, AlertSeverity::Severe)));
        assert!(kinds.contains(&(AlertType::Advisory, AlertSeverity::Moderate)));
        assert_eq!(
            kinds
                .iter()
                .filter(|k| **k == (AlertType::Warning, AlertSeverity::Severe))
                .count(),
            2
        );
    }

    #[test]
    fn heat_and_wind_without_humidity() {
        let obs = Observation {
            temperature: 38.0,
            wind_speed: 9.0,
            uv_index: 8.0,
            ..neutral()
        };
        let alerts = AlertSynthesizer::new().synthesize_at(&obs, issued_at());
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.alert_type == AlertType::Warning));
    }

    #[test]
    fn windows_are_well_formed() {
        let obs = Observation {
            temperature: 36.0,
            humidity: 86.0,
            wind_speed: 9.0,
            ..neutral()
        };
        for alert in AlertSynthesizer::new().synthesize_at(&obs, issued_at()) {
            assert!(alert.start_time < alert.end_time);
            assert_eq!(alert.areas, vec![DEFAULT_AREA.to_string()]);
        }
    }

    #[test]
    fn content_is_idempotent_apart_from_ids() {
        let obs = Observation {
            temperature: 37.0,
            humidity: 88.0,
            ..neutral()
        };
        let synth = AlertSynthesizer::new();
        let first = synth.synthesize_at(&obs, issued_at());
        let second = synth.synthesize_at(&obs, issued_at() + chrono::Duration::seconds(5));
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.alert_type, b.alert_type);
            assert_eq!(a.severity, b.severity);
            assert_eq!(a.title, b.title);
            assert_eq!(a.description, b.description);
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn configured_areas_are_used() {
        let synth = AlertSynthesizer::new().with_areas(vec!["Nashik".into(), "Pune".into()]);
        let obs = Observation {
            wind_speed: 10.0,
            ..neutral()
        };
        let alerts = synth.synthesize_at(&obs, issued_at());
        assert_eq!(alerts[0].areas, vec!["Nashik".to_string(), "Pune".to_string()]);

        let kept = AlertSynthesizer::new().with_areas(Vec::new());
        assert_eq!(kept.synthesize_at(&obs, issued_at())[0].areas, vec![DEFAULT_AREA.to_string()]);
    }

    #[test]
    fn lists_rules_in_order() {
        let ids: Vec<&str> = AlertSynthesizer::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["high_temp", "high_humidity", "strong_wind"]);
    }
}
