use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const LOW_HUMIDITY: f64 = 30.0;

pub struct LowHumidityRule;

impl Rule for LowHumidityRule {
    fn id(&self) -> &'static str {
        "low_humidity_stress"
    }

    fn name(&self) -> &'static str {
        "Low Humidity Stress"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        if observation.humidity >= LOW_HUMIDITY {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Irrigation,
                Urgency::Medium,
                "Combat Low Humidity Stress",
                "Very low humidity can stress plants. Increase irrigation frequency and \
                 consider mulching to retain soil moisture.",
            )
            .with_reason(format!("Current humidity: {}%", observation.humidity)),
        )
    }
}
