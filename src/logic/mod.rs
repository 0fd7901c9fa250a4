pub mod alerts;
pub mod rules;
pub mod weather_sync;

pub use alerts::AlertSynthesizer;
pub use rules::RulesEngine;
pub use weather_sync::WeatherSyncService;
