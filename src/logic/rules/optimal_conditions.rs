use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const TEMP_RANGE_C: (f64, f64) = (20.0, 30.0);
const HUMIDITY_RANGE: (f64, f64) = (40.0, 70.0);
const CALM_WIND_MS: f64 = 5.0;

/// Optimal conditions rule - positive confirmation that field work can go ahead
///
/// Conditions:
/// - Temperature 20-30°C inclusive
/// - Humidity 40-70% inclusive
/// - Wind below 5 m/s
///
/// Fires alongside any other rule; it is not a fallback for "nothing else fired".
pub struct OptimalConditionsRule;

impl Rule for OptimalConditionsRule {
    fn id(&self) -> &'static str {
        "optimal_conditions"
    }

    fn name(&self) -> &'static str {
        "Ideal Conditions for Farm Work"
    }

    fn evaluate(&self, observation: &Observation, _forecast: &Forecast) -> Option<Recommendation> {
        let temp = observation.temperature;
        let humidity = observation.humidity;

        let temp_ok = temp >= TEMP_RANGE_C.0 && temp <= TEMP_RANGE_C.1;
        let humidity_ok = humidity >= HUMIDITY_RANGE.0 && humidity <= HUMIDITY_RANGE.1;
        let calm = observation.wind_speed < CALM_WIND_MS;

        if !(temp_ok && humidity_ok && calm) {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Planting,
                Urgency::Low,
                self.name(),
                "Weather conditions are optimal for most farming activities including \
                 planting, spraying, and harvesting. Take advantage of these favorable \
                 conditions.",
            )
            .with_reason(format!(
                "Ideal temp ({}°C), humidity ({}%), and calm winds",
                temp, humidity
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::neutral;

    fn fires(obs: &Observation) -> bool {
        OptimalConditionsRule
            .evaluate(obs, &Forecast::default())
            .is_some()
    }

    #[test]
    fn neutral_is_optimal() {
        let rec = OptimalConditionsRule
            .evaluate(&neutral(), &Forecast::default())
            .unwrap();
        assert_eq!(rec.urgency, Urgency::Low);
        assert_eq!(
            rec.weather_reason,
            "Ideal temp (25°C), humidity (55%), and calm winds"
        );
    }

    #[test]
    fn range_edges_are_inclusive() {
        let mut obs = neutral();
        obs.temperature = 20.0;
        obs.humidity = 70.0;
        assert!(fires(&obs));
        obs.temperature = 30.0;
        obs.humidity = 40.0;
        assert!(fires(&obs));
    }

    #[test]
    fn outside_any_range_does_not_fire() {
        assert!(!fires(&Observation {
            temperature: 30.5,
            ..neutral()
        }));
        assert!(!fires(&Observation {
            humidity: 39.0,
            ..neutral()
        }));
        assert!(!fires(&Observation {
            wind_speed: 5.0,
            ..neutral()
        }));
    }
}
