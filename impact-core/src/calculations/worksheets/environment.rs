//! Environmental footprint worksheet.
//!
//! Alongside the economic estimate the simulator reports the water and
//! waste footprint of the same stay, plus the monetary equivalent of
//! treating that water and managing that waste. Per-person daily rates and
//! unit costs are configurable; the defaults are the simulator's published
//! assumptions (150 L and 2.5 kg per person-day, 5.00 per m³, 300.00 per
//! tonne).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors that can occur during environment worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentWorksheetError {
    /// The per-person water consumption must be positive.
    #[error("water consumption per person must be positive, got {0}")]
    InvalidWaterPerPerson(Decimal),

    /// The per-person waste production must be positive.
    #[error("waste production per person must be positive, got {0}")]
    InvalidWastePerPerson(Decimal),

    /// The water treatment cost must be positive.
    #[error("water treatment cost per m³ must be positive, got {0}")]
    InvalidWaterTreatmentCost(Decimal),

    /// The waste management cost must be positive.
    #[error("waste management cost per tonne must be positive, got {0}")]
    InvalidWasteManagementCost(Decimal),
}

/// Configuration parameters for environment worksheet calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentWorksheetConfig {
    /// Average water consumption per tourist per day, in liters.
    pub water_per_person_liters: Decimal,

    /// Average waste production per tourist per day, in kilograms.
    pub waste_per_person_kg: Decimal,

    /// Estimated water treatment cost per cubic meter.
    pub water_treatment_cost_per_m3: Decimal,

    /// Estimated waste management cost per tonne.
    pub waste_management_cost_per_tonne: Decimal,
}

impl Default for EnvironmentWorksheetConfig {
    fn default() -> Self {
        Self {
            water_per_person_liters: dec!(150.0),
            waste_per_person_kg: dec!(2.5),
            water_treatment_cost_per_m3: dec!(5.00),
            waste_management_cost_per_tonne: dec!(300.00),
        }
    }
}

impl EnvironmentWorksheetConfig {
    /// Validates the configuration values; all four must be positive.
    pub fn validate(&self) -> Result<(), EnvironmentWorksheetError> {
        if self.water_per_person_liters <= Decimal::ZERO {
            return Err(EnvironmentWorksheetError::InvalidWaterPerPerson(
                self.water_per_person_liters,
            ));
        }
        if self.waste_per_person_kg <= Decimal::ZERO {
            return Err(EnvironmentWorksheetError::InvalidWastePerPerson(
                self.waste_per_person_kg,
            ));
        }
        if self.water_treatment_cost_per_m3 <= Decimal::ZERO {
            return Err(EnvironmentWorksheetError::InvalidWaterTreatmentCost(
                self.water_treatment_cost_per_m3,
            ));
        }
        if self.waste_management_cost_per_tonne <= Decimal::ZERO {
            return Err(EnvironmentWorksheetError::InvalidWasteManagementCost(
                self.waste_management_cost_per_tonne,
            ));
        }
        Ok(())
    }
}

/// Result of environment worksheet calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentResult {
    /// Total water consumption over the stay, in cubic meters.
    pub water_m3: Decimal,

    /// Total waste production over the stay, in tonnes.
    pub waste_tonnes: Decimal,

    /// Monetary equivalent of treating the consumed water.
    pub water_treatment_cost: Decimal,

    /// Monetary equivalent of managing the produced waste.
    pub waste_management_cost: Decimal,
}

/// Calculator for the environmental footprint worksheet.
#[derive(Debug, Clone)]
pub struct EnvironmentWorksheet {
    config: EnvironmentWorksheetConfig,
}

impl EnvironmentWorksheet {
    /// Creates a new worksheet calculator with the given configuration.
    pub fn new(config: EnvironmentWorksheetConfig) -> Self {
        Self { config }
    }

    /// Calculates the footprint of `tourist_count` visitors staying
    /// `stay_days` days.
    ///
    /// Zero visitors or zero days produce a zero footprint; that is a valid
    /// estimate, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentWorksheetError`] if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use impact_core::calculations::{EnvironmentWorksheet, EnvironmentWorksheetConfig};
    ///
    /// let worksheet = EnvironmentWorksheet::new(EnvironmentWorksheetConfig::default());
    /// let result = worksheet.calculate(50_000, 5).unwrap();
    ///
    /// assert_eq!(result.water_m3, dec!(37500.00));
    /// assert_eq!(result.waste_tonnes, dec!(625.00));
    /// ```
    pub fn calculate(
        &self,
        tourist_count: u64,
        stay_days: u32,
    ) -> Result<EnvironmentResult, EnvironmentWorksheetError> {
        self.config.validate()?;

        let person_days = Decimal::from(tourist_count) * Decimal::from(stay_days);
        let per_thousand = dec!(1000);

        let water_m3 = person_days * self.config.water_per_person_liters / per_thousand;
        let waste_tonnes = person_days * self.config.waste_per_person_kg / per_thousand;

        let water_treatment_cost = water_m3 * self.config.water_treatment_cost_per_m3;
        let waste_management_cost = waste_tonnes * self.config.waste_management_cost_per_tonne;

        Ok(EnvironmentResult {
            water_m3: round_half_up(water_m3),
            waste_tonnes: round_half_up(waste_tonnes),
            water_treatment_cost: round_half_up(water_treatment_cost),
            waste_management_cost: round_half_up(waste_management_cost),
        })
    }
}
