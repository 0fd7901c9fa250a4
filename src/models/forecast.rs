use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of forecast data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    /// Probability of precipitation, 0-100
    pub precipitation: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

/// Ordered multi-day forecast, first entry conventionally today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forecast {
    pub days: Vec<DailyForecastEntry>,
}

impl Forecast {
    pub fn new(days: Vec<DailyForecastEntry>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Sum of precipitation probabilities across all days. Zero when empty.
    pub fn total_precipitation(&self) -> f64 {
        self.days.iter().map(|d| d.precipitation).sum()
    }

    pub fn max_precipitation(&self) -> Option<f64> {
        self.days
            .iter()
            .map(|d| d.precipitation)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn any_precipitation_above(&self, threshold: f64) -> bool {
        self.days.iter().any(|d| d.precipitation > threshold)
    }

    /// Fixed five-day baseline used when no live forecast can be fetched.
    pub fn fallback(start: NaiveDate) -> Self {
        let days = start
            .iter_days()
            .take(5)
            .map(|date| DailyForecastEntry {
                date,
                high: 30.0,
                low: 20.0,
                precipitation: 10.0,
                humidity: 65.0,
                wind_speed: 3.0,
                description: "partly cloudy".to_string(),
                icon: "02d".to_string(),
            })
            .collect();
        Self { days }
    }
}

impl From<Vec<DailyForecastEntry>> for Forecast {
    fn from(days: Vec<DailyForecastEntry>) -> Self {
        Self::new(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64, precipitation: f64) -> DailyForecastEntry {
        let base = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        DailyForecastEntry {
            date: base + chrono::Days::new(offset),
            high: 30.0,
            low: 20.0,
            precipitation,
            humidity: 60.0,
            wind_speed: 3.0,
            description: "clear sky".to_string(),
            icon: "01d".to_string(),
        }
    }

    #[test]
    fn empty_forecast_aggregates_are_vacuous() {
        let forecast = Forecast::default();
        assert_eq!(forecast.total_precipitation(), 0.0);
        assert_eq!(forecast.max_precipitation(), None);
        assert!(!forecast.any_precipitation_above(70.0));
    }

    #[test]
    fn aggregates_over_days() {
        let forecast = Forecast::new(vec![day(0, 10.0), day(1, 75.0), day(2, 40.0)]);
        assert_eq!(forecast.total_precipitation(), 125.0);
        assert_eq!(forecast.max_precipitation(), Some(75.0));
        assert!(forecast.any_precipitation_above(70.0));
        assert!(!forecast.any_precipitation_above(75.0));
    }

    #[test]
    fn fallback_has_five_consecutive_days() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let forecast = Forecast::fallback(start);
        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast.days[0].date, start);
        assert_eq!(
            forecast.days[4].date,
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
        );
        assert_eq!(forecast.total_precipitation(), 50.0);
    }

    #[test]
    fn serializes_as_plain_list() {
        let forecast = Forecast::new(vec![day(0, 20.0)]);
        let json = serde_json::to_value(&forecast).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["date"], "2024-06-01");
        assert_eq!(json[0]["windSpeed"], 3.0);
    }
}
