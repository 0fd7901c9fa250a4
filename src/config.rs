use crate::error::{FarmcastError, Result};
use crate::logic::alerts::synthesizer::DEFAULT_AREA;
use crate::models::Coordinates;
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "FARMCAST";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub openweathermap: Option<OpenWeatherMapConfig>,
    #[serde(default)]
    pub alerts: AlertsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Place name, geocoded when no coordinates are given
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationConfig {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlertsConfig {
    /// Area labels attached to locally synthesized alerts
    #[serde(default = "default_areas")]
    pub areas: Vec<String>,
}

fn default_areas() -> Vec<String> {
    vec![DEFAULT_AREA.to_string()]
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            areas: default_areas(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmcastError::Config(format!(
                "Config file not found at {:?}. Run `farmcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmcastError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML content, substituting `${VAR}` placeholders and then
    /// applying `FARMCAST__SECTION__KEY` environment overrides.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with_env_prefix(content, ENV_PREFIX)
    }

    fn parse_with_env_prefix(content: &str, env_prefix: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let layered = config::Config::builder()
            .add_source(config::File::from_str(&content, config::FileFormat::Yaml))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| FarmcastError::Config(format!("Failed to parse config: {}", e)))?;

        layered
            .try_deserialize()
            .map_err(|e| FarmcastError::Config(format!("Invalid config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("farmcast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/farmcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmcastError::Config("Cannot determine config directory".into()))?
            .join("farmcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up Farmcast!");
        println!();

        println!("Farm Location");
        let name: String = Input::new()
            .with_prompt("  Place name (village, district, state)")
            .default("Pune, Maharashtra".into())
            .interact_text()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        let latitude = Self::prompt_optional_f64("  Latitude (blank to geocode)")?;
        let longitude = match latitude {
            Some(_) => Self::prompt_optional_f64("  Longitude")?,
            None => None,
        };

        println!();

        println!("OpenWeatherMap (leave API key blank to run on baseline data)");
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        let openweathermap = if api_key.is_empty() {
            None
        } else {
            Some(OpenWeatherMapConfig {
                api_key,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            location: LocationConfig {
                name,
                latitude,
                longitude,
            },
            openweathermap,
            alerts: AlertsConfig::default(),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FarmcastError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# Farmcast Configuration\n# Generated by `farmcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn prompt_optional_f64(prompt: &str) -> Result<Option<f64>> {
        let raw: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|s: &String| -> std::result::Result<(), &str> {
                if s.trim().is_empty() || s.trim().parse::<f64>().is_ok() {
                    Ok(())
                } else {
                    Err("enter a decimal number or leave blank")
                }
            })
            .interact_text()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        Ok(raw.trim().parse::<f64>().ok())
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: LocationConfig {
                name: "Pune, Maharashtra".into(),
                latitude: None,
                longitude: None,
            },
            openweathermap: None,
            alerts: AlertsConfig::default(),
        }
    }
}
