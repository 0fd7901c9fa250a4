use serde::{Deserialize, Serialize};

/// Point-in-time weather snapshot used as rule input.
///
/// All numeric fields are metric: °C, %, m/s, hPa, km. Callers must hand the
/// engines finite values; when the upstream source is unavailable use
/// [`Observation::fallback`] instead of passing partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    pub visibility: f64,
    pub uv_index: f64,
    pub description: String,
    pub icon: String,
}

impl Observation {
    /// Documented baseline used when no live observation can be fetched.
    pub fn fallback() -> Self {
        Self {
            location: "Unknown Location".to_string(),
            temperature: 25.0,
            feels_like: 27.0,
            humidity: 65.0,
            wind_speed: 2.5,
            pressure: 1013.0,
            visibility: 10.0,
            uv_index: 5.0,
            description: "partly cloudy".to_string(),
            icon: "02d".to_string(),
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.feels_like,
            self.humidity,
            self.wind_speed,
            self.pressure,
            self.visibility,
            self.uv_index,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for Observation {
    fn default() -> Self {
        Self::fallback()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_finite_and_plausible() {
        let obs = Observation::fallback();
        assert!(obs.is_finite());
        assert_eq!(obs.location, "Unknown Location");
        assert!((0.0..=100.0).contains(&obs.humidity));
        assert!(obs.pressure > 0.0);
    }

    #[test]
    fn non_finite_values_detected() {
        let mut obs = Observation::fallback();
        obs.wind_speed = f64::NAN;
        assert!(!obs.is_finite());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(Observation::fallback()).unwrap();
        assert_eq!(json["feelsLike"], 27.0);
        assert_eq!(json["windSpeed"], 2.5);
        assert_eq!(json["uvIndex"], 5.0);
    }

    #[test]
    fn coordinates_display() {
        let c = Coordinates::new(18.5204, 73.8567);
        assert_eq!(c.to_string(), "18.5204, 73.8567");
    }
}
