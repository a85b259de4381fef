use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Random seed for deterministic scenario generation
    pub seed: u64,
    /// Simulated seconds per real second
    pub time_warp: f64,
    /// Real seconds per tick (one frame)
    pub tick_seconds: f64,
    /// Number of ticks a headless run performs
    pub ticks: u64,
    /// Upper bound on the initial scatter of generated bodies, in AU
    pub max_scatter_au: f64,
    /// Upper bound on each initial velocity component (m/s)
    pub max_speed: f64,
    /// Stars farther than this from the observer count as "flying" (AU)
    pub flying_star_distance_au: f64,
    /// Flying stars slower than this relative to the observer are "frozen" (m/s)
    pub frozen_speed: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_warp: 1.0,
            tick_seconds: 1.0 / 60.0,
            ticks: 3600,
            max_scatter_au: 50.0,
            max_speed: 15_000.0,
            flying_star_distance_au: 3.0,
            frozen_speed: 5_000.0,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration: {e}"),
            ConfigError::Parse(e) => write!(f, "Failed to parse configuration: {e}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl SimConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_seconds.is_finite() && self.tick_seconds > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tick_seconds must be positive, got {}",
                self.tick_seconds
            )));
        }
        if !self.time_warp.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "time_warp must be finite, got {}",
                self.time_warp
            )));
        }
        for (name, value) in [
            ("max_scatter_au", self.max_scatter_au),
            ("max_speed", self.max_speed),
            ("flying_star_distance_au", self.flying_star_distance_au),
            ("frozen_speed", self.frozen_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
