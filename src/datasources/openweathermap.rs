use crate::config::OpenWeatherMapConfig;
use crate::error::{FarmcastError, Result};
use crate::models::{
    Alert, AlertSeverity, AlertType, Coordinates, DailyForecastEntry, Forecast, Observation,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
const FORECAST_DAYS: usize = 5;

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    name: String,
    sys: OwmSys,
    main: OwmMain,
    wind: OwmWind,
    #[serde(default)]
    visibility: Option<f64>, // metres
    weather: Vec<OwmWeather>,
}

#[derive(Debug, Deserialize)]
struct OwmSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmUvResponse {
    #[serde(default)]
    value: f64,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmForecastMain,
    weather: Vec<OwmWeather>,
    wind: OwmWind,
    #[serde(default)]
    pop: f64, // probability of precipitation, 0.0-1.0
}

#[derive(Debug, Deserialize)]
struct OwmForecastMain {
    temp_min: f64,
    temp_max: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmOneCallResponse {
    #[serde(default)]
    alerts: Vec<OwmAlert>,
}

#[derive(Debug, Deserialize)]
struct OwmAlert {
    #[serde(default)]
    sender_name: Option<String>,
    event: String,
    start: i64,
    end: i64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    areas: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct OwmGeocodeEntry {
    lat: f64,
    lon: f64,
}

/// Round half toward positive infinity, so -2.5 becomes -2 and 2.5 becomes 3.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response =
            self.client.get(url).send().await.map_err(|e| {
                FarmcastError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FarmcastError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            FarmcastError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })
    }

    /// Fetch current conditions and UV index concurrently.
    ///
    /// A failed UV lookup is not fatal; the index falls back to 0.
    pub async fn fetch_current(&self, coords: &Coordinates) -> Result<Observation> {
        let weather_url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, coords.latitude, coords.longitude, self.config.api_key
        );
        let uv_url = format!(
            "{}/uvi?lat={}&lon={}&appid={}",
            API_BASE_URL, coords.latitude, coords.longitude, self.config.api_key
        );

        let (weather, uv) = tokio::join!(
            self.get_json::<OwmCurrentResponse>(&weather_url),
            self.get_json::<OwmUvResponse>(&uv_url)
        );

        let uv_index = match uv {
            Ok(uv) => uv.value,
            Err(e) => {
                tracing::debug!("UV index unavailable: {}", e);
                0.0
            }
        };

        Ok(Self::convert_current(weather?, uv_index))
    }

    /// Fetch the 5-day/3-hour forecast reduced to one entry per day
    pub async fn fetch_forecast(&self, coords: &Coordinates) -> Result<Forecast> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, coords.latitude, coords.longitude, self.config.api_key
        );

        let response: OwmForecastResponse = self.get_json(&url).await?;
        Ok(Self::convert_forecast(response))
    }

    /// Fetch alerts issued by national weather agencies via One Call
    pub async fn fetch_alerts(&self, coords: &Coordinates) -> Result<Vec<Alert>> {
        let url = format!(
            "{}/onecall?lat={}&lon={}&appid={}&exclude=minutely,hourly,daily",
            API_BASE_URL, coords.latitude, coords.longitude, self.config.api_key
        );

        let response: OwmOneCallResponse = self.get_json(&url).await?;
        Ok(response
            .alerts
            .into_iter()
            .filter_map(Self::convert_alert)
            .collect())
    }

    /// Resolve a place name to coordinates. `None` when nothing matches.
    pub async fn geocode(&self, location: &str) -> Result<Option<Coordinates>> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/direct", GEO_BASE_URL),
            &[
                ("q", location),
                ("limit", "1"),
                ("appid", self.config.api_key.as_str()),
            ],
        )
        .map_err(|e| FarmcastError::InvalidData(format!("Bad geocoding URL: {}", e)))?;

        let entries: Vec<OwmGeocodeEntry> = self.get_json(url.as_str()).await?;
        Ok(entries
            .first()
            .map(|e| Coordinates::new(e.lat, e.lon)))
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self, coords: &Coordinates) -> Result<bool> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, coords.latitude, coords.longitude, self.config.api_key
        );

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                FarmcastError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        Ok(response.status().is_success())
    }

    fn convert_current(response: OwmCurrentResponse, uv_index: f64) -> Observation {
        let (description, icon) = response
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_default();

        let location = if response.sys.country.is_empty() {
            response.name
        } else {
            format!("{}, {}", response.name, response.sys.country)
        };

        Observation {
            location,
            temperature: round_to(response.main.temp, 0),
            feels_like: round_to(response.main.feels_like, 0),
            humidity: response.main.humidity,
            wind_speed: round_to(response.wind.speed, 1),
            pressure: response.main.pressure,
            visibility: response
                .visibility
                .map(|m| round_to(m / 1000.0, 1))
                .unwrap_or(10.0),
            uv_index: round_to(uv_index, 1),
            description,
            icon,
        }
    }

    /// Keep the first 3-hour slot of each calendar day, up to five days
    fn convert_forecast(response: OwmForecastResponse) -> Forecast {
        let mut seen: HashSet<NaiveDate> = HashSet::new();
        let mut days = Vec::new();

        for item in response.list {
            let Some(timestamp) = DateTime::<Utc>::from_timestamp(item.dt, 0) else {
                tracing::debug!("Skipping forecast item with bad timestamp {}", item.dt);
                continue;
            };
            let date = timestamp.date_naive();
            if !seen.insert(date) {
                continue;
            }

            let (description, icon) = item
                .weather
                .into_iter()
                .next()
                .map(|w| (w.description, w.icon))
                .unwrap_or_default();

            days.push(DailyForecastEntry {
                date,
                high: round_to(item.main.temp_max, 0),
                low: round_to(item.main.temp_min, 0),
                precipitation: round_to(item.pop * 100.0, 0),
                humidity: item.main.humidity,
                wind_speed: item.wind.speed,
                description,
                icon,
            });

            if days.len() >= FORECAST_DAYS {
                break;
            }
        }

        days.sort_by_key(|d| d.date);
        Forecast::new(days)
    }

    fn convert_alert(alert: OwmAlert) -> Option<Alert> {
        let start_time = DateTime::<Utc>::from_timestamp(alert.start, 0)?;
        let end_time = DateTime::<Utc>::from_timestamp(alert.end, 0)?;

        Some(Alert {
            id: format!(
                "{}{}",
                alert.sender_name.as_deref().unwrap_or("system"),
                alert.start
            ),
            alert_type: AlertType::from_event(&alert.event),
            severity: AlertSeverity::from_tags(&alert.tags),
            title: alert.event,
            description: alert.description,
            start_time,
            end_time,
            areas: alert.areas,
        })
    }
}
