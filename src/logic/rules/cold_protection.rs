use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const COLD_TEMP_C: f64 = 10.0;

/// Cold protection rule - cover young plants when it is below 10°C.
pub struct ColdProtectionRule;

impl Rule for ColdProtectionRule {
    fn id(&self) -> &'static str {
        "cold_protection"
    }

    fn name(&self) -> &'static str {
        "Cold Weather Protection"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        if observation.temperature >= COLD_TEMP_C {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Planting,
                Urgency::High,
                self.name(),
                "Low temperatures may damage sensitive crops. Cover young plants with \
                 cloth or plastic sheets overnight.",
            )
            .with_reason(format!(
                "Current temperature: {}°C",
                observation.temperature
            ))
            .with_action_by("Before sunset"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    #[test]
    fn fires_strictly_below_ten() {
        let mut obs = neutral();
        obs.temperature = 10.0;
        assert!(ColdProtectionRule.evaluate(&obs, &Forecast::default()).is_none());

        obs.temperature = 9.99;
        let rec = ColdProtectionRule
            .evaluate(&obs, &Forecast::default())
            .unwrap();
        assert_eq!(rec.urgency, Urgency::High);
        assert_eq!(rec.recommendation_type, RecommendationType::Planting);
        assert_eq!(rec.action_by.as_deref(), Some("Before sunset"));
    }

    #[test]
    fn handles_sub_zero() {
        let obs = Observation {
            temperature: -4.0,
            ..neutral()
        };
        let rec = ColdProtectionRule
            .evaluate(&obs, &Forecast::default())
            .unwrap();
        assert_eq!(rec.weather_reason, "Current temperature: -4°C");
    }
}
