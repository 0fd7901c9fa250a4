use crate::config::Config;
use crate::datasources::OpenWeatherMapClient;
use crate::error::{FarmcastError, Result};
use crate::logic::{AlertSynthesizer, RulesEngine};
use crate::models::{
    Alert, AlertSource, Coordinates, FarmReport, Forecast, Observation, Recommendation,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fetches weather for the configured farm and runs both engines over it.
///
/// Any upstream failure degrades to the documented baseline observation and
/// forecast so the engines always see complete input.
pub struct WeatherSyncService {
    config: Config,
    openweathermap_client: Option<OpenWeatherMapClient>,
    synthesizer: AlertSynthesizer,
    rules_engine: RulesEngine,
    coordinates: Option<Coordinates>,
    current_report: Arc<RwLock<Option<FarmReport>>>,
}

/// Raw inputs gathered by one refresh, before the engines run
struct FetchedWeather {
    observation: Observation,
    forecast: Forecast,
    upstream_alerts: Option<Vec<Alert>>,
    degraded: bool,
}

impl FetchedWeather {
    /// Baseline inputs used when no live source is available at all.
    fn baseline(now: DateTime<Utc>) -> Self {
        Self {
            observation: Observation::fallback(),
            forecast: Forecast::fallback(now.date_naive()),
            upstream_alerts: None,
            degraded: true,
        }
    }

    /// Substitute baseline data for each failed or unusable fetch.
    ///
    /// A failed observation or forecast marks the result degraded. A failed
    /// alert fetch only drops the upstream alerts.
    fn from_results(
        current: Result<Observation>,
        forecast: Result<Forecast>,
        alerts: Result<Vec<Alert>>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut degraded = false;

        let observation = match current {
            Ok(obs) if obs.is_finite() => {
                tracing::debug!("Current weather updated");
                obs
            }
            Ok(_) => {
                tracing::warn!("Current weather had non-finite values - using baseline");
                degraded = true;
                Observation::fallback()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch current weather: {}", e);
                degraded = true;
                Observation::fallback()
            }
        };

        let forecast = match forecast {
            Ok(forecast) => {
                tracing::debug!("Weather forecast updated ({} days)", forecast.len());
                forecast
            }
            Err(e) => {
                tracing::warn!("Failed to fetch weather forecast: {}", e);
                degraded = true;
                Forecast::fallback(now.date_naive())
            }
        };

        let upstream_alerts = match alerts {
            Ok(alerts) => Some(alerts),
            Err(e) => {
                tracing::warn!("Failed to fetch weather alerts: {}", e);
                None
            }
        };

        Self {
            observation,
            forecast,
            upstream_alerts,
            degraded,
        }
    }
}

impl WeatherSyncService {
    pub fn new(config: Config) -> Self {
        let openweathermap_client = config
            .openweathermap
            .as_ref()
            .filter(|c| c.enabled && !c.api_key.is_empty())
            .map(|c| {
                tracing::info!("OpenWeatherMap client configured for live weather");
                OpenWeatherMapClient::new(c.clone())
            });

        if openweathermap_client.is_none() {
            tracing::warn!("OpenWeatherMap not configured - using baseline weather data");
        }

        let synthesizer = AlertSynthesizer::new().with_areas(config.alerts.areas.clone());

        Self {
            coordinates: config.location.coordinates(),
            config,
            openweathermap_client,
            synthesizer,
            rules_engine: RulesEngine::new(),
            current_report: Arc::new(RwLock::new(None)),
        }
    }

    /// Coordinates from config, else from geocoding the location name.
    ///
    /// `Ok(None)` means they could not be determined right now (no client,
    /// or geocoding unreachable); an unknown place name is an error.
    pub async fn resolve_coordinates(&mut self) -> Result<Option<Coordinates>> {
        if self.coordinates.is_some() {
            return Ok(self.coordinates);
        }

        let Some(ref client) = self.openweathermap_client else {
            return Ok(None);
        };

        let name = &self.config.location.name;
        match client.geocode(name).await {
            Ok(Some(coords)) => {
                tracing::info!("Resolved {} to {}", name, coords);
                self.coordinates = Some(coords);
                Ok(Some(coords))
            }
            Ok(None) => Err(FarmcastError::LocationNotFound(name.clone())),
            Err(e) => {
                tracing::warn!("Failed to geocode {}: {}", name, e);
                Ok(None)
            }
        }
    }

    pub async fn refresh(&mut self) -> Result<FarmReport> {
        let coords = self.resolve_coordinates().await?;
        let now = Utc::now();

        let fetched = match (self.openweathermap_client.as_ref(), coords) {
            (Some(client), Some(coords)) => Self::fetch_live(client, &coords, now).await,
            _ => FetchedWeather::baseline(now),
        };

        let report = self.build_report(coords, fetched, now);

        let mut current = self.current_report.write().await;
        *current = Some(report.clone());

        Ok(report)
    }

    async fn fetch_live(
        client: &OpenWeatherMapClient,
        coords: &Coordinates,
        now: DateTime<Utc>,
    ) -> FetchedWeather {
        let (current, forecast, alerts) = tokio::join!(
            client.fetch_current(coords),
            client.fetch_forecast(coords),
            client.fetch_alerts(coords)
        );

        FetchedWeather::from_results(current, forecast, alerts, now)
    }

    fn build_report(
        &self,
        coordinates: Option<Coordinates>,
        fetched: FetchedWeather,
        now: DateTime<Utc>,
    ) -> FarmReport {
        let (alerts, alert_source) = match fetched.upstream_alerts {
            Some(alerts) if !alerts.is_empty() => (alerts, AlertSource::Upstream),
            _ => (
                self.synthesizer.synthesize_at(&fetched.observation, now),
                AlertSource::Synthesized,
            ),
        };

        let recommendations = self
            .rules_engine
            .evaluate(&fetched.observation, &fetched.forecast);

        FarmReport {
            location: self.config.location.name.clone(),
            coordinates,
            observation: fetched.observation,
            forecast: fetched.forecast,
            alerts,
            alert_source,
            recommendations,
            degraded: fetched.degraded,
            generated_at: now,
        }
    }

    pub async fn get_current_report(&self) -> Option<FarmReport> {
        self.current_report.read().await.clone()
    }

    /// Evaluate a single rule against the last report's inputs, ignoring
    /// pre-emption by other rules.
    pub async fn explain_rule(&self, rule_id: &str) -> Result<Option<Recommendation>> {
        if !self
            .rules_engine
            .list_rules()
            .iter()
            .any(|(id, _)| *id == rule_id)
        {
            return Err(FarmcastError::InvalidData(format!(
                "Unknown rule: {}",
                rule_id
            )));
        }

        let report = self.get_current_report().await.ok_or_else(|| {
            FarmcastError::DataSourceUnavailable("No weather report yet".into())
        })?;

        Ok(self
            .rules_engine
            .evaluate_rule(rule_id, &report.observation, &report.forecast))
    }

    pub async fn check_connections(&mut self) -> ConnectionStatus {
        let mut status = ConnectionStatus {
            configured: self.openweathermap_client.is_some(),
            ..Default::default()
        };

        match self.resolve_coordinates().await {
            Ok(Some(coords)) => {
                status.location_resolved = true;
                if let Some(ref client) = self.openweathermap_client {
                    status.openweathermap = client.test_connection(&coords).await.unwrap_or(false);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("{}", e),
        }

        status
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionStatus {
    pub configured: bool,
    pub location_resolved: bool,
    pub openweathermap: bool,
}

impl ConnectionStatus {
    pub fn all_connected(&self) -> bool {
        self.configured && self.location_resolved && self.openweathermap
    }
}
