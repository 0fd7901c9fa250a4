use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const HIGH_TEMP_C: f64 = 35.0;
const EXTREME_TEMP_C: f64 = 40.0;

/// Heat stress irrigation rule - shifts watering to the cool hours of the day
///
/// Conditions:
/// - Current temperature above 35°C
///
/// Urgency levels:
/// - Medium: 35-40°C, act today
/// - High: above 40°C, act within 2 hours
pub struct HeatStressRule;

impl Rule for HeatStressRule {
    fn id(&self) -> &'static str {
        "high_temp_irrigation"
    }

    fn name(&self) -> &'static str {
        "Heat Stress Irrigation"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        let temp = observation.temperature;
        if temp <= HIGH_TEMP_C {
            return None;
        }

        let (urgency, action_by) = if temp > EXTREME_TEMP_C {
            (Urgency::High, "Within 2 hours")
        } else {
            (Urgency::Medium, "Today")
        };

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Irrigation,
                urgency,
                "Increase Irrigation Frequency",
                "High temperatures detected. Water crops early morning (5-7 AM) or late \
                 evening (6-8 PM) to minimize evaporation. Consider drip irrigation for \
                 water efficiency.",
            )
            .with_reason(format!(
                "Current temperature: {}°C (Feels like {}°C)",
                temp, observation.feels_like
            ))
            .with_action_by(action_by),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    fn at(temperature: f64) -> Option<Recommendation> {
        let obs = Observation {
            temperature,
            ..neutral()
        };
        HeatStressRule.evaluate(&obs, &Forecast::default())
    }

    #[test]
    fn does_not_fire_at_threshold() {
        assert!(at(35.0).is_none());
        assert!(at(35.01).is_some());
    }

    #[test]
    fn medium_up_to_forty() {
        let rec = at(40.0).unwrap();
        assert_eq!(rec.urgency, Urgency::Medium);
        assert_eq!(rec.action_by.as_deref(), Some("Today"));
        assert_eq!(rec.recommendation_type, RecommendationType::Irrigation);
    }

    #[test]
    fn high_above_forty() {
        let rec = at(40.01).unwrap();
        assert_eq!(rec.urgency, Urgency::High);
        assert_eq!(rec.action_by.as_deref(), Some("Within 2 hours"));
    }

    #[test]
    fn reason_cites_temperature_and_feels_like() {
        let obs = Observation {
            temperature: 38.0,
            feels_like: 41.0,
            ..neutral()
        };
        let rec = HeatStressRule.evaluate(&obs, &Forecast::default()).unwrap();
        assert_eq!(
            rec.weather_reason,
            "Current temperature: 38°C (Feels like 41°C)"
        );
    }
}
