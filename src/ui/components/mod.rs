pub mod gauge;

pub use gauge::{Reading, WeatherGauge};
