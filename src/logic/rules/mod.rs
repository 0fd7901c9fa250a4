pub mod cold_protection;
pub mod disease_pressure;
pub mod dry_spell;
pub mod engine;
pub mod heat_stress;
pub mod heavy_rain;
pub mod low_humidity;
pub mod optimal_conditions;
pub mod rain_forecast;
pub mod uv_protection;
pub mod wind;

pub use engine::RulesEngine;

use crate::models::{Forecast, Observation, Recommendation};

/// Trait for weather-driven farming rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule, also the id of the recommendation it emits
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Ids of earlier rules whose firing skips this one
    fn preempted_by(&self) -> &'static [&'static str] {
        &[]
    }

    /// Evaluate the rule and return a recommendation if conditions are met
    fn evaluate(&self, observation: &Observation, forecast: &Forecast)
        -> Option<Recommendation>;
}
