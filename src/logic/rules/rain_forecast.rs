use super::Rule;
use crate::models::{Forecast, Observation, Recommendation, RecommendationType, Urgency};

const CUMULATIVE_RAIN_THRESHOLD: f64 = 100.0;

/// Cumulative rain rule - scale back irrigation when the summed daily
/// precipitation probability exceeds 100.
///
/// Skipped whenever `heavy_rain_prep` already fired for the same forecast.
pub struct RainForecastRule;

impl Rule for RainForecastRule {
    fn id(&self) -> &'static str {
        "rain_forecast_prep"
    }

    fn name(&self) -> &'static str {
        "Adjust for Expected Rainfall"
    }

    fn preempted_by(&self) -> &'static [&'static str] {
        &["heavy_rain_prep"]
    }

    fn evaluate(&self, _observation: &Observation, forecast: &Forecast) -> Option<Recommendation> {
        let total = forecast.total_precipitation();
        if total <= CUMULATIVE_RAIN_THRESHOLD {
            return None;
        }

        Some(
            Recommendation::new(
                self.id(),
                RecommendationType::Irrigation,
                Urgency::Medium,
                self.name(),
                format!(
                    "Significant rain expected over next {} days. Reduce irrigation \
                     schedule and check drainage systems.",
                    forecast.len()
                ),
            )
            .with_reason(format!(
                "Total rain expected: {:.0}% over {} days",
                total,
                forecast.len()
            )),
        )
    }
}
