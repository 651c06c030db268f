//! # Configuration
//!
//! [`CommerceConfig`] is loaded in layers, later layers overriding earlier ones:
//!
//! 1. Built-in defaults ([`CommerceConfig::default`])
//! 2. A TOML file, if one was given and exists
//! 3. `PRODUCT_SET_`-prefixed environment variables (e.g. `PRODUCT_SET_STORE_BUFFER=64`)
//!
//! ```toml
//! store_buffer = 64
//! listing_title = "In this set:"
//! listing_adjustment_types = ["promotion"]
//!
//! [[set_types]]
//! id = "default"
//! label = "Default"
//! order_item_type = "product_set"
//!
//! [[rates]]
//! adjustment_type = "tax"
//! percent = "19"
//! store_id = 1
//! ```

use crate::listing::{ListingSettings, DEFAULT_LISTING_TITLE};
use crate::model::{ProductSetType, ProductSetTypeRegistry};
use crate::ports::AdjustmentType;
use crate::pricing::{RateCalculator, RateRule};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_ENV_PREFIX: &str = "PRODUCT_SET_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to extract configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommerceConfig {
    /// Channel capacity of every catalog store.
    pub store_buffer: usize,
    pub listing_title: String,
    pub listing_adjustment_types: Vec<AdjustmentType>,
    pub set_types: Vec<ProductSetType>,
    pub rates: Vec<RateRule>,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            store_buffer: 32,
            listing_title: DEFAULT_LISTING_TITLE.to_string(),
            listing_adjustment_types: Vec::new(),
            set_types: vec![ProductSetType {
                id: "default".to_string(),
                label: "Default".to_string(),
                order_item_type: "product_set".to_string(),
            }],
            rates: Vec::new(),
        }
    }
}

impl CommerceConfig {
    pub fn listing_settings(&self) -> ListingSettings {
        ListingSettings {
            title: self.listing_title.clone(),
            adjustment_types: self.listing_adjustment_types.clone(),
        }
    }

    pub fn type_registry(&self) -> ProductSetTypeRegistry {
        ProductSetTypeRegistry::new(self.set_types.iter().cloned())
    }

    pub fn rate_calculator(&self) -> RateCalculator {
        RateCalculator::new(self.rates.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(ConfigError::Invalid("store_buffer must be at least 1".into()));
        }
        let mut seen = HashSet::new();
        for set_type in &self.set_types {
            if set_type.id.is_empty() || set_type.order_item_type.is_empty() {
                return Err(ConfigError::Invalid(
                    "set types need an id and an order_item_type".into(),
                ));
            }
            if !seen.insert(set_type.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate set type '{}'",
                    set_type.id
                )));
            }
        }
        Ok(())
    }
}

/// Loads [`CommerceConfig`] from defaults, an optional TOML file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn load(&self) -> Result<CommerceConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(CommerceConfig::default()));

        if let Some(path) = &self.config_path {
            if path.exists() {
                info!(path = %path.display(), "Loading configuration file");
                figment = figment.merge(Toml::file(path));
            } else {
                debug!(path = %path.display(), "Configuration file not found, skipping");
            }
        }

        // Keys are flat; `_` belongs to the key, not a nesting separator.
        figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX));

        let config: CommerceConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }
}
