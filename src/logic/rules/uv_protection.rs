use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const HIGH_UV: f64 = 7.0;

/// UV protection rule - shade cloth and midday work avoidance above UV 7.
pub struct UvProtectionRule;

impl Rule for UvProtectionRule {
    fn id(&self) -> &'static str {
        "high_uv_protection"
    }

    fn name(&self) -> &'static str {
        "UV Protection"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        if observation.uv_index <= HIGH_UV {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Planting,
                Urgency::Medium,
                "UV Protection Needed",
                "High UV levels can damage sensitive crops. Provide shade cloths for \
                 delicate plants and avoid working in fields during peak hours \
                 (11 AM - 3 PM).",
            )
            .with_reason(format!("UV Index: {} (High)", observation.uv_index)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    #[test]
    fn boundary_at_seven() {
        let mut obs = neutral();
        obs.uv_index = 7.0;
        assert!(UvProtectionRule.evaluate(&obs, &Forecast::default()).is_none());

        obs.uv_index = 7.1;
        let rec = UvProtectionRule.evaluate(&obs, &Forecast::default()).unwrap();
        assert_eq!(rec.recommendation_type, RecommendationType::Planting);
        assert_eq!(rec.weather_reason, "UV Index: 7.1 (High)");
    }
}
