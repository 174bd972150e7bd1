use crate::error::{GeoFilterError, Result};
use crate::models::{DistanceUnit, UnitTable, ValidationMode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for geofilter
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Mode used when building query shapes from raw corners and centers
    pub validation_mode: ConfigValue<ValidationMode>,
    /// Mode used when normalizing candidate points during a scan
    pub candidate_mode: ConfigValue<ValidationMode>,
    /// Unit for radii written without a suffix
    pub distance_unit: ConfigValue<DistanceUnit>,
    pub units: UnitTable,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            validation_mode: ConfigValue::new(ValidationMode::Strict, ConfigSource::Default),
            candidate_mode: ConfigValue::new(ValidationMode::IgnoreMalformed, ConfigSource::Default),
            distance_unit: ConfigValue::new(DistanceUnit::Meters, ConfigSource::Default),
            units: UnitTable::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeoFilterError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeoFilterError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(mode) = file_config.validation_mode {
            self.validation_mode.update(mode, ConfigSource::File);
        }

        if let Some(mode) = file_config.candidate_mode {
            self.candidate_mode.update(mode, ConfigSource::File);
        }

        if let Some(unit) = file_config.distance_unit {
            self.distance_unit.update(parse_distance_unit(&unit)?, ConfigSource::File);
        }

        for (name, meters_per_unit) in file_config.units {
            self.units.insert(&name, meters_per_unit)?;
        }

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOFILTER_VALIDATION_MODE
        if let Ok(mode_str) = env::var("GEOFILTER_VALIDATION_MODE") {
            match parse_validation_mode(&mode_str) {
                Ok(mode) => self.validation_mode.update(mode, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOFILTER_VALIDATION_MODE value '{}': expected strict, coerce, or ignore_malformed",
                    mode_str
                ),
            }
        }

        // GEOFILTER_CANDIDATE_MODE
        if let Ok(mode_str) = env::var("GEOFILTER_CANDIDATE_MODE") {
            match parse_validation_mode(&mode_str) {
                Ok(mode) => self.candidate_mode.update(mode, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOFILTER_CANDIDATE_MODE value '{}': expected strict, coerce, or ignore_malformed",
                    mode_str
                ),
            }
        }

        // GEOFILTER_DISTANCE_UNIT
        if let Ok(unit_str) = env::var("GEOFILTER_DISTANCE_UNIT") {
            match parse_distance_unit(&unit_str) {
                Ok(unit) => self.distance_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOFILTER_DISTANCE_UNIT value '{}': expected a unit such as m, km, mi, nmi or ft",
                    unit_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(mode) = overrides.validation_mode {
            self.validation_mode.update(mode, ConfigSource::Cli);
        }

        if let Some(mode) = overrides.candidate_mode {
            self.candidate_mode.update(mode, ConfigSource::Cli);
        }

        if let Some(unit) = overrides.distance_unit {
            self.distance_unit.update(unit, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "validation_mode".to_string(),
            (self.validation_mode.value.to_string(), self.validation_mode.source),
        );

        map.insert(
            "candidate_mode".to_string(),
            (self.candidate_mode.value.to_string(), self.candidate_mode.source),
        );

        map.insert(
            "distance_unit".to_string(),
            (self.distance_unit.value.to_string(), self.distance_unit.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    validation_mode: Option<ValidationMode>,
    candidate_mode: Option<ValidationMode>,
    /// Any unit name or alias, e.g. `km` or `miles`
    distance_unit: Option<String>,
    #[serde(default)]
    units: BTreeMap<String, f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub validation_mode: Option<ValidationMode>,
    pub candidate_mode: Option<ValidationMode>,
    pub distance_unit: Option<DistanceUnit>,
}

/// Parse distance unit from string
pub fn parse_distance_unit(s: &str) -> Result<DistanceUnit> {
    s.parse::<DistanceUnit>().map_err(|_| GeoFilterError::ConfigInvalid {
        key: "distance_unit".to_string(),
        reason: format!("Invalid distance unit: {}. Use m, km, mi, nmi, ft, yd, in, cm or mm", s),
    })
}

/// Parse validation mode from string
pub fn parse_validation_mode(s: &str) -> Result<ValidationMode> {
    s.parse::<ValidationMode>()
}
