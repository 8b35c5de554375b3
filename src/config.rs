use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use midining_location::{
    DeniedLocation, FixedLocation, HallDirectory, HallLocation, LocationProvider, Permission,
    UnavailableLocation,
};
use midining_shared::Coordinate;
use serde::Deserialize;

/// Position sent to the backend when the device position is unknown.
pub const FALLBACK_LATITUDE: f64 = 42.2739968;
pub const FALLBACK_LONGITUDE: f64 = -83.7287936;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub location: LocationConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Replaces the built-in campus directory when non-empty.
    #[serde(default)]
    pub halls: Vec<HallLocation>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    #[serde(default)]
    pub permission: Permission,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub fallback_latitude: f64,
    pub fallback_longitude: f64,
}

impl LocationConfig {
    pub fn provider(&self) -> Box<dyn LocationProvider> {
        match (self.permission, self.latitude, self.longitude) {
            (Permission::Denied, _, _) => Box::new(DeniedLocation),
            (Permission::Granted, Some(latitude), Some(longitude)) => {
                Box::new(FixedLocation(Coordinate {
                    latitude,
                    longitude,
                }))
            }
            _ => Box::new(UnavailableLocation {
                reason: "no device position configured".to_owned(),
            }),
        }
    }

    pub fn fallback(&self) -> Coordinate {
        Coordinate {
            latitude: self.fallback_latitude,
            longitude: self.fallback_longitude,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MIDINING__API__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("api.base_url", midining_client::DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", 10)?
            .set_default("location.permission", "granted")?
            .set_default("location.fallback_latitude", FALLBACK_LATITUDE)?
            .set_default("location.fallback_longitude", FALLBACK_LONGITUDE)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MIDINING")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_url) = env::var("MIDINING_API_URL") {
            builder = builder.set_override("api.base_url", api_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = url::Url::parse(&self.api.base_url) {
            return Err(format!("Invalid api.base_url `{}`: {e}", self.api.base_url));
        }
        if self.api.timeout_secs == 0 {
            return Err("api.timeout_secs must be greater than 0".to_string());
        }

        Coordinate::new(self.location.fallback_latitude, self.location.fallback_longitude)
            .map_err(|e| format!("Invalid fallback location: {e}"))?;

        match (self.location.latitude, self.location.longitude) {
            (Some(latitude), Some(longitude)) => {
                Coordinate::new(latitude, longitude)
                    .map_err(|e| format!("Invalid device location: {e}"))?;
            }
            (None, None) => {}
            _ => {
                return Err(
                    "location.latitude and location.longitude must be set together".to_string(),
                );
            }
        }

        for hall in &self.halls {
            Coordinate::new(hall.latitude, hall.longitude)
                .map_err(|e| format!("Invalid location for hall {}: {e}", hall.name))?;
        }

        Ok(())
    }

    pub fn hall_directory(&self) -> HallDirectory {
        if self.halls.is_empty() {
            return HallDirectory::default();
        }

        HallDirectory::new(self.halls.to_vec())
    }
}
