use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const HIGH_HUMIDITY: f64 = 85.0;

/// Disease pressure rule - watch for fungal disease in humid air
///
/// Powdery mildew, rust and blight spread fastest above 85% relative
/// humidity. Emits a pesticide-type recommendation to scout and apply
/// preventive fungicide.
pub struct DiseasePressureRule;

impl Rule for DiseasePressureRule {
    fn id(&self) -> &'static str {
        "high_humidity_disease_watch"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Watch"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        if observation.humidity <= HIGH_HUMIDITY {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Pesticide,
                Urgency::Medium,
                "Monitor for Fungal Diseases",
                "High humidity creates ideal conditions for fungal diseases like powdery \
                 mildew, rust, and blight. Inspect crops daily and apply preventive \
                 fungicides if needed.",
            )
            .with_reason(format!("Current humidity: {}%", observation.humidity)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    #[test]
    fn boundary_at_eighty_five() {
        let mut obs = neutral();
        obs.humidity = 85.0;
        assert!(DiseasePressureRule.evaluate(&obs, &Forecast::default()).is_none());

        obs.humidity = 85.5;
        let rec = DiseasePressureRule
            .evaluate(&obs, &Forecast::default())
            .unwrap();
        assert_eq!(rec.recommendation_type, RecommendationType::Pesticide);
        assert_eq!(rec.urgency, Urgency::Medium);
        assert!(rec.action_by.is_none());
        assert_eq!(rec.weather_reason, "Current humidity: 85.5%");
    }
}
