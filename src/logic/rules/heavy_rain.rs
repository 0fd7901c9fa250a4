use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

pub(crate) const HEAVY_RAIN_PROBABILITY: f64 = 70.0;

/// Heavy rain preparation rule
///
/// Conditions:
/// - Any forecast day with precipitation probability above 70%
///
/// Drainage, reduced irrigation and harvesting mature crops must happen
/// before the rain arrives, so urgency is always high. Pre-empts
/// [`RainForecastRule`](super::rain_forecast::RainForecastRule).
pub struct HeavyRainRule;

impl Rule for HeavyRainRule {
    fn id(&self) -> &'static str {
        "heavy_rain_prep"
    }

    fn name(&self) -> &'static str {
        "Heavy Rain Preparation"
    }

    fn evaluate(&self, _observation: &Observation, forecast: &Forecast) -> Option<Recommendation> {
        if !forecast.any_precipitation_above(HEAVY_RAIN_PROBABILITY) {
            return None;
        }

        let max_probability = forecast.max_precipitation()?;

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Irrigation,
                Urgency::High,
                "Prepare for Heavy Rain",
                "Heavy rainfall expected. Ensure proper drainage, reduce irrigation, \
                 harvest mature crops, and protect seedlings from waterlogging.",
            )
            .with_reason(format!(
                "Heavy rain forecasted ({}% chance)",
                max_probability
            ))
            .with_action_by("Before rain starts"),
        )
    }
}
