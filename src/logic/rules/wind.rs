use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const STRONG_WIND_MS: f64 = 8.0;
const DAMAGING_WIND_MS: f64 = 12.0;

/// Strong wind rule - windbreaks, staking and early harvest of mature fruit
///
/// Conditions:
/// - Wind speed above 8 m/s (medium), above 12 m/s (high)
pub struct StrongWindRule;

impl Rule for StrongWindRule {
    fn id(&self) -> &'static str {
        "strong_wind_precautions"
    }

    fn name(&self) -> &'static str {
        "Strong Wind Precautions"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        let wind = observation.wind_speed;
        if wind <= STRONG_WIND_MS {
            return None;
        }

        let urgency = if wind > DAMAGING_WIND_MS {
            Urgency::High
        } else {
            Urgency::Medium
        };

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Harvesting,
                urgency,
                self.name(),
                "Strong winds detected. Install windbreaks, stake tall plants, avoid \
                 spraying chemicals, and harvest mature fruits before they fall.",
            )
            .with_reason(format!("Wind speed: {} m/s", wind))
            .with_action_by("Immediately"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    fn at(wind_speed: f64) -> Option<Recommendation> {
        let obs = Observation {
            wind_speed,
            ..neutral()
        };
        StrongWindRule.evaluate(&obs, &Forecast::default())
    }

    #[test]
    fn boundaries() {
        assert!(at(8.0).is_none());
        assert_eq!(at(8.1).unwrap().urgency, Urgency::Medium);
        assert_eq!(at(12.0).unwrap().urgency, Urgency::Medium);
        assert_eq!(at(12.1).unwrap().urgency, Urgency::High);
    }

    #[test]
    fn always_immediate() {
        let rec = at(9.0).unwrap();
        assert_eq!(rec.action_by.as_deref(), Some("Immediately"));
        assert_eq!(rec.recommendation_type, RecommendationType::Harvesting);
        assert_eq!(rec.weather_reason, "Wind speed: 9 m/s");
    }
}
