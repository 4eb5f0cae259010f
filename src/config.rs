//! Engine tunables, loadable from TOML.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CLUSTER_BASE_RADIUS_KM: f64 = 20.0;
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Where items without a viewer distance land under the distance sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingDistance {
    /// After every item that has a distance.
    #[default]
    Last,
    /// Treated as distance `0`, so they sort first.
    AsZero,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cluster radius at zoom 1; the effective radius is this divided by the zoom level.
    pub cluster_base_radius_km: f64,
    pub page_size: usize,
    pub missing_distance: MissingDistance,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cluster_base_radius_km: DEFAULT_CLUSTER_BASE_RADIUS_KM,
            page_size: DEFAULT_PAGE_SIZE,
            missing_distance: MissingDistance::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cluster_base_radius_km must be positive, got {0}")]
    InvalidRadius(f64),
    #[error("page_size must be at least 1")]
    ZeroPageSize,
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cluster_base_radius_km.is_finite() && self.cluster_base_radius_km > 0.0) {
            return Err(ConfigError::InvalidRadius(self.cluster_base_radius_km));
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}
