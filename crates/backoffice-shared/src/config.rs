//! Configuration management

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_BEVERAGE_IMAGE, DEFAULT_EVENT_CAPACITY, DEFAULT_FOOD_IMAGE, DEFAULT_SIMULATED_LATENCY_MS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    /// Delay applied before every mutation is committed (0 = none)
    pub simulated_latency_ms: u64,
    pub seed_demo_data: bool,
    /// Buffer size of the list-changed broadcast channel
    pub event_capacity: usize,
    pub default_food_image: String,
    pub default_beverage_image: String,
}

impl CatalogSettings {
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            seed_demo_data: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            default_food_image: DEFAULT_FOOD_IMAGE.to_string(),
            default_beverage_image: DEFAULT_BEVERAGE_IMAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "backoffice-server")?
            .set_default("catalog.simulated_latency_ms", DEFAULT_SIMULATED_LATENCY_MS)?
            .set_default("catalog.seed_demo_data", true)?
            .set_default("catalog.event_capacity", DEFAULT_EVENT_CAPACITY as u64)?
            .set_default("catalog.default_food_image", DEFAULT_FOOD_IMAGE)?
            .set_default("catalog.default_beverage_image", DEFAULT_BEVERAGE_IMAGE)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        let loaded: AppConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.catalog.event_capacity == 0 {
            return Err(AppError::InvalidConfig("catalog.event_capacity must be greater than 0".into()));
        }
        if self.catalog.default_food_image.trim().is_empty()
            || self.catalog.default_beverage_image.trim().is_empty()
        {
            return Err(AppError::InvalidConfig("catalog default images must not be blank".into()));
        }
        Ok(())
    }
}
