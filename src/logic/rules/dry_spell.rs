use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const DRY_FORECAST_TOTAL: f64 = 20.0;
const DRY_AIR_HUMIDITY: f64 = 50.0;

/// Dry spell rule
///
/// Conditions (both required):
/// - Summed forecast precipitation probability below 20
/// - Current humidity below 50%
///
/// An empty forecast sums to zero, so dry air alone is enough to fire.
pub struct DrySpellRule;

impl Rule for DrySpellRule {
    fn id(&self) -> &'static str {
        "dry_weather_irrigation"
    }

    fn name(&self) -> &'static str {
        "Dry Spell Watering"
    }

    fn evaluate(&self, observation: &Observation, forecast: &Forecast) -> Option<Recommendation> {
        let total = forecast.total_precipitation();
        if total >= DRY_FORECAST_TOTAL || observation.humidity >= DRY_AIR_HUMIDITY {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Irrigation,
                Urgency::Medium,
                "Increase Watering for Dry Spell",
                "Little to no rain expected and low humidity. Increase watering frequency, \
                 apply mulch to retain moisture, and consider deep watering techniques.",
            )
            .with_reason(format!(
                "Low rain forecast ({}%) and humidity ({}%)",
                total, observation.humidity
            )),
        )
    }
}
