//! Optional TOML overrides for the worksheet parameters.
//!
//! Every key is optional; anything absent keeps the scenario preset or the
//! worksheet default. Example:
//!
//! ```toml
//! [tourism]
//! occupancy = 0.85
//! custom_adjustment = 1.1
//!
//! [environment]
//! water_per_person_liters = 120.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use impact_core::calculations::{EnvironmentWorksheetConfig, TourismWorksheetConfig};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulatorConfig {
    #[serde(default)]
    pub tourism: TourismOverrides,
    #[serde(default)]
    pub environment: EnvironmentOverrides,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TourismOverrides {
    pub base_multiplier: Option<Decimal>,
    pub sector_multiplier: Option<Decimal>,
    pub seasonal_factor: Option<Decimal>,
    pub city_elasticity: Option<Decimal>,
    pub duration_elasticity: Option<Decimal>,
    pub duration_reduction_cap: Option<Decimal>,
    pub occupancy: Option<Decimal>,
    pub custom_adjustment: Option<Decimal>,
}

impl TourismOverrides {
    /// Applies the overrides on top of a base configuration.
    pub fn apply(
        &self,
        mut config: TourismWorksheetConfig,
    ) -> TourismWorksheetConfig {
        if let Some(value) = self.base_multiplier {
            config.base_multiplier = value;
        }
        if let Some(value) = self.sector_multiplier {
            config.sector_multiplier = value;
        }
        if let Some(value) = self.seasonal_factor {
            config.seasonal_factor = value;
        }
        if let Some(value) = self.city_elasticity {
            config.city_elasticity = value;
        }
        if let Some(value) = self.duration_elasticity {
            config.duration_elasticity = value;
        }
        if let Some(value) = self.duration_reduction_cap {
            config.duration_reduction_cap = value;
        }
        if let Some(value) = self.occupancy {
            config.occupancy = value;
        }
        if let Some(value) = self.custom_adjustment {
            config.custom_adjustment = value;
        }
        config
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentOverrides {
    pub water_per_person_liters: Option<Decimal>,
    pub waste_per_person_kg: Option<Decimal>,
    pub water_treatment_cost_per_m3: Option<Decimal>,
    pub waste_management_cost_per_tonne: Option<Decimal>,
}

impl EnvironmentOverrides {
    /// Applies the overrides on top of a base configuration.
    pub fn apply(
        &self,
        mut config: EnvironmentWorksheetConfig,
    ) -> EnvironmentWorksheetConfig {
        if let Some(value) = self.water_per_person_liters {
            config.water_per_person_liters = value;
        }
        if let Some(value) = self.waste_per_person_kg {
            config.waste_per_person_kg = value;
        }
        if let Some(value) = self.water_treatment_cost_per_m3 {
            config.water_treatment_cost_per_m3 = value;
        }
        if let Some(value) = self.waste_management_cost_per_tonne {
            config.waste_management_cost_per_tonne = value;
        }
        config
    }
}

/// Loads a [`SimulatorConfig`] from a TOML file.
pub fn load_config(path: &Path) -> Result<SimulatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file '{}'", path.display()))?;
    let config: SimulatorConfig = toml::from_str(&text)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;
    Ok(config)
}
