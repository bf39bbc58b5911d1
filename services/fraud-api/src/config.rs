use config::{ConfigError, Environment};
use fraud_engine::{DecisionThresholds, EngineConfig};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EngineSettings {
    pub block_threshold: u8,
    pub review_threshold: u8,
    pub high_amount_multiplier: f64,
    pub medium_amount_multiplier: f64,
    pub high_frequency_threshold: u32,
    pub medium_frequency_threshold: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8087)?
            .set_default("server.workers", 4)?
            // Engine defaults
            .set_default("engine.block_threshold", 70)?
            .set_default("engine.review_threshold", 40)?
            .set_default("engine.high_amount_multiplier", 3.0)?
            .set_default("engine.medium_amount_multiplier", 2.0)?
            .set_default("engine.high_frequency_threshold", 10)?
            .set_default("engine.medium_frequency_threshold", 5)?;

        builder = builder.add_source(Environment::with_prefix("FRAUD_ENGINE").separator("__"));

        // Override from environment variables
        if let Ok(port) = env::var("SERVICE_PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }
}

impl EngineSettings {
    /// Build the immutable engine configuration, keeping library defaults
    /// for anything this layer does not expose.
    pub fn to_engine_config(&self) -> EngineConfig {
        let mut engine = EngineConfig::default();

        engine.thresholds = DecisionThresholds {
            block: self.block_threshold,
            review: self.review_threshold,
        };
        if let Some(high) = Decimal::from_f64(self.high_amount_multiplier) {
            engine.amount.high_multiplier = high;
        }
        if let Some(medium) = Decimal::from_f64(self.medium_amount_multiplier) {
            engine.amount.medium_multiplier = medium;
        }
        engine.frequency.high_threshold = self.high_frequency_threshold;
        engine.frequency.medium_threshold = self.medium_frequency_threshold;

        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.engine.block_threshold, 70);
        assert_eq!(config.engine.review_threshold, 40);
    }

    #[test]
    fn test_engine_settings_conversion() {
        let settings = EngineSettings {
            block_threshold: 80,
            review_threshold: 30,
            high_amount_multiplier: 4.0,
            medium_amount_multiplier: 2.5,
            high_frequency_threshold: 20,
            medium_frequency_threshold: 8,
        };

        let engine = settings.to_engine_config();
        assert_eq!(engine.thresholds.block, 80);
        assert_eq!(engine.frequency.high_threshold, 20);
        assert_eq!(engine.amount.high_multiplier, Decimal::from(4));
    }
}
