//! Tourism impact worksheet.
//!
//! This module implements the scenario-based estimation formula behind the
//! full simulation. Starting from the raw visitor numbers it applies the
//! selected scenario's multipliers and elasticity adjustments to arrive at
//! the direct spending and the total economic impact.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | City adjustment: `1 + city_elasticity × (cities − 1)` |
//! | 2    | Duration reduction: `min(cap, duration_elasticity × (days − 1))` |
//! | 3    | Duration adjustment: `1 − duration reduction` |
//! | 4    | Adjusted daily spend: `spend × step 1 × step 3` |
//! | 5    | Direct spending: `step 4 × days × tourists × occupancy` |
//! | 6    | Total multiplier: `(base + sector) × seasonal × custom` |
//! | 7    | Total impact: `step 5 × step 6` |
//! | 8    | Per-city impact: `step 7 ÷ cities`, one entry per city |
//!
//! Longer stays spend less per marginal day (step 2, bounded by the
//! reduction cap); visiting more cities increases daily spending (step 1).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use impact_core::Scenario;
//! use impact_core::calculations::{TourismWorksheet, TourismWorksheetConfig, TourismWorksheetInput};
//!
//! let config = TourismWorksheetConfig::for_scenario(Scenario::Realistic);
//! let worksheet = TourismWorksheet::new(config);
//!
//! let input = TourismWorksheetInput {
//!     tourist_count: 100,
//!     daily_spend: dec!(200.00),
//!     stay_days: 5,
//!     visited_cities: vec!["Belém".to_string()],
//! };
//!
//! let result = worksheet.calculate(&input).unwrap();
//!
//! // Adjusted daily spend: 200 × 1.0 × 0.8 = 160
//! assert_eq!(result.adjusted_daily_spend, dec!(160.00));
//! // Direct spending: 160 × 5 × 100 = 80 000
//! assert_eq!(result.direct_spending, dec!(80000.00));
//! // Total impact: 80 000 × (2.5 + 0.3) × 1.0 = 224 000
//! assert_eq!(result.total_impact, dec!(224000.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::Scenario;

/// Sector multiplier uplift applied when estimating for the COP 30 event.
const COP30_SECTOR_UPLIFT: Decimal = dec!(0.2);

/// Seasonal factor multiplier applied when estimating for the COP 30 event.
const COP30_SEASONAL_UPLIFT: Decimal = dec!(1.3);

/// Errors that can occur during tourism worksheet calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourismWorksheetError {
    /// The occupancy rate must be in (0, 1].
    #[error("occupancy must be between 0 (exclusive) and 1, got {0}")]
    InvalidOccupancy(Decimal),

    /// The base multiplier must be positive.
    #[error("base multiplier must be positive, got {0}")]
    InvalidBaseMultiplier(Decimal),

    /// The sector multiplier must be non-negative.
    #[error("sector multiplier must be non-negative, got {0}")]
    InvalidSectorMultiplier(Decimal),

    /// The seasonal factor must be positive.
    #[error("seasonal factor must be positive, got {0}")]
    InvalidSeasonalFactor(Decimal),

    /// The city elasticity must be non-negative.
    #[error("city elasticity must be non-negative, got {0}")]
    InvalidCityElasticity(Decimal),

    /// The duration elasticity must be non-negative.
    #[error("duration elasticity must be non-negative, got {0}")]
    InvalidDurationElasticity(Decimal),

    /// The duration reduction cap must be between 0 and 1.
    #[error("duration reduction cap must be between 0 and 1, got {0}")]
    InvalidDurationReductionCap(Decimal),

    /// The custom adjustment must be positive.
    #[error("custom adjustment must be positive, got {0}")]
    InvalidCustomAdjustment(Decimal),

    /// At least one tourist is required.
    #[error("tourist count must be greater than zero")]
    ZeroTourists,

    /// The average daily spend cannot be negative.
    #[error("daily spend cannot be negative, got {0}")]
    NegativeDailySpend(Decimal),

    /// The stay must last at least one day.
    #[error("stay duration must be greater than zero")]
    ZeroStayDays,

    /// At least one visited city is required.
    #[error("visited city list cannot be empty")]
    NoCitiesVisited,
}

/// Special event the estimate is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEvent {
    Cop30,
}

/// Configuration parameters for tourism worksheet calculations.
///
/// A configuration is normally built from a [`Scenario`] preset via
/// [`TourismWorksheetConfig::for_scenario`] and then refined: occupancy,
/// custom adjustment, or the COP 30 event uplift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourismWorksheetConfig {
    /// Base economic multiplier (each unit spent generates this much
    /// total activity).
    pub base_multiplier: Decimal,

    /// Additional multiplier from tourism-adjacent sectors.
    pub sector_multiplier: Decimal,

    /// Seasonal demand factor.
    pub seasonal_factor: Decimal,

    /// Marginal daily-spend increase per additional visited city.
    pub city_elasticity: Decimal,

    /// Marginal daily-spend decrease per additional stay day.
    pub duration_elasticity: Decimal,

    /// Upper bound on the duration reduction (step 2).
    pub duration_reduction_cap: Decimal,

    /// Fraction of the tourist count actually materializing, in (0, 1].
    pub occupancy: Decimal,

    /// Free-form adjustment applied to the total multiplier.
    pub custom_adjustment: Decimal,

    /// Special event this configuration was adjusted for, if any.
    pub event: Option<SpecialEvent>,
}

impl TourismWorksheetConfig {
    /// Creates a configuration from a scenario preset with full occupancy
    /// and no custom adjustment.
    pub fn for_scenario(scenario: Scenario) -> Self {
        let params = scenario.params();
        Self {
            base_multiplier: params.base_multiplier,
            sector_multiplier: params.sector_multiplier,
            seasonal_factor: params.seasonal_factor,
            city_elasticity: params.city_elasticity,
            duration_elasticity: params.duration_elasticity,
            duration_reduction_cap: dec!(0.3),
            occupancy: Decimal::ONE,
            custom_adjustment: Decimal::ONE,
            event: None,
        }
    }

    /// Applies the COP 30 event uplift: the sector multiplier gains 0.2 and
    /// the seasonal factor is raised by 30%.
    pub fn with_cop30_event(mut self) -> Self {
        self.sector_multiplier += COP30_SECTOR_UPLIFT;
        self.seasonal_factor *= COP30_SEASONAL_UPLIFT;
        self.event = Some(SpecialEvent::Cop30);
        self
    }

    /// Default COP 30 configuration: the optimistic scenario with the event
    /// uplift applied.
    pub fn cop30() -> Self {
        Self::for_scenario(Scenario::Optimistic).with_cop30_event()
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`TourismWorksheetError`] if:
    /// - `occupancy` is not in (0, 1]
    /// - `base_multiplier`, `seasonal_factor` or `custom_adjustment` is not positive
    /// - `sector_multiplier` or either elasticity is negative
    /// - `duration_reduction_cap` is not in [0, 1]
    pub fn validate(&self) -> Result<(), TourismWorksheetError> {
        if self.occupancy <= Decimal::ZERO || self.occupancy > Decimal::ONE {
            return Err(TourismWorksheetError::InvalidOccupancy(self.occupancy));
        }
        if self.base_multiplier <= Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidBaseMultiplier(
                self.base_multiplier,
            ));
        }
        if self.sector_multiplier < Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidSectorMultiplier(
                self.sector_multiplier,
            ));
        }
        if self.seasonal_factor <= Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidSeasonalFactor(
                self.seasonal_factor,
            ));
        }
        if self.city_elasticity < Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidCityElasticity(
                self.city_elasticity,
            ));
        }
        if self.duration_elasticity < Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidDurationElasticity(
                self.duration_elasticity,
            ));
        }
        if self.duration_reduction_cap < Decimal::ZERO || self.duration_reduction_cap > Decimal::ONE
        {
            return Err(TourismWorksheetError::InvalidDurationReductionCap(
                self.duration_reduction_cap,
            ));
        }
        if self.custom_adjustment <= Decimal::ZERO {
            return Err(TourismWorksheetError::InvalidCustomAdjustment(
                self.custom_adjustment,
            ));
        }
        Ok(())
    }
}

impl Default for TourismWorksheetConfig {
    fn default() -> Self {
        Self::for_scenario(Scenario::default())
    }
}

/// Input values for the tourism worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourismWorksheetInput {
    pub tourist_count: u64,
    pub daily_spend: Decimal,
    pub stay_days: u32,
    pub visited_cities: Vec<String>,
}

impl TourismWorksheetInput {
    fn validate(&self) -> Result<(), TourismWorksheetError> {
        if self.tourist_count == 0 {
            return Err(TourismWorksheetError::ZeroTourists);
        }
        if self.daily_spend < Decimal::ZERO {
            return Err(TourismWorksheetError::NegativeDailySpend(self.daily_spend));
        }
        if self.stay_days == 0 {
            return Err(TourismWorksheetError::ZeroStayDays);
        }
        if self.visited_cities.is_empty() {
            return Err(TourismWorksheetError::NoCitiesVisited);
        }
        Ok(())
    }
}

/// Result of tourism worksheet calculations.
///
/// Every intermediate step is carried for transparency; monetary amounts and
/// adjustments are rounded to two decimal places at assembly, the underlying
/// calculation runs exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourismResult {
    /// Step 1: daily-spend increase from visiting several cities.
    pub city_adjustment: Decimal,

    /// Step 2: marginal-spend reduction from the stay length, capped.
    pub duration_reduction: Decimal,

    /// Step 3: `1 − duration_reduction`.
    pub duration_adjustment: Decimal,

    /// Step 4: elasticity-adjusted average daily spend.
    pub adjusted_daily_spend: Decimal,

    /// Step 5: direct tourist spending over the whole stay.
    pub direct_spending: Decimal,

    /// Step 6: combined economic multiplier.
    pub total_multiplier: Decimal,

    /// Step 7: total economic impact.
    pub total_impact: Decimal,

    /// Step 8: impact share per visited city, in input order.
    pub per_city_impact: Vec<(String, Decimal)>,

    /// Event uplift the configuration carried, if any.
    pub special_event: Option<SpecialEvent>,
}

/// Calculator for the tourism impact worksheet.
#[derive(Debug, Clone)]
pub struct TourismWorksheet {
    config: TourismWorksheetConfig,
}

impl TourismWorksheet {
    /// Creates a new worksheet calculator with the given configuration.
    pub fn new(config: TourismWorksheetConfig) -> Self {
        Self { config }
    }

    /// Calculates the complete worksheet and returns the result.
    ///
    /// Validates the configuration and the input, then runs steps 1-8.
    ///
    /// # Errors
    ///
    /// Returns [`TourismWorksheetError`] if the configuration or the input
    /// is invalid.
    pub fn calculate(
        &self,
        input: &TourismWorksheetInput,
    ) -> Result<TourismResult, TourismWorksheetError> {
        self.config.validate()?;
        input.validate()?;

        let city_count = input.visited_cities.len() as u64;

        // Steps 1-3: elasticity adjustments
        let city_adjustment = self.city_adjustment(city_count);
        let duration_reduction = self.duration_reduction(input.stay_days);
        let duration_adjustment = Decimal::ONE - duration_reduction;

        // Step 4: adjusted daily spend
        let adjusted_daily_spend = input.daily_spend * city_adjustment * duration_adjustment;

        // Step 5: direct spending
        let direct_spending = adjusted_daily_spend
            * Decimal::from(input.stay_days)
            * Decimal::from(input.tourist_count)
            * self.config.occupancy;

        // Step 6: total multiplier
        let total_multiplier = (self.config.base_multiplier + self.config.sector_multiplier)
            * self.config.seasonal_factor
            * self.config.custom_adjustment;

        // Step 7: total impact
        let total_impact = direct_spending * total_multiplier;

        // Step 8: even split across the visited cities
        let city_share = total_impact / Decimal::from(city_count);
        let per_city_impact = input
            .visited_cities
            .iter()
            .map(|name| (name.clone(), round_half_up(city_share)))
            .collect();

        Ok(TourismResult {
            city_adjustment: round_half_up(city_adjustment),
            duration_reduction: round_half_up(duration_reduction),
            duration_adjustment: round_half_up(duration_adjustment),
            adjusted_daily_spend: round_half_up(adjusted_daily_spend),
            direct_spending: round_half_up(direct_spending),
            total_multiplier: round_half_up(total_multiplier),
            total_impact: round_half_up(total_impact),
            per_city_impact,
            special_event: self.config.event,
        })
    }

    /// Step 1: each city beyond the first raises daily spending by the city
    /// elasticity.
    fn city_adjustment(
        &self,
        city_count: u64,
    ) -> Decimal {
        Decimal::ONE + self.config.city_elasticity * Decimal::from(city_count - 1)
    }

    /// Step 2: each stay day beyond the first lowers marginal daily spending
    /// by the duration elasticity, bounded by the reduction cap.
    fn duration_reduction(
        &self,
        stay_days: u32,
    ) -> Decimal {
        let raw = self.config.duration_elasticity * Decimal::from(stay_days - 1);
        if raw > self.config.duration_reduction_cap {
            warn!(
                raw_reduction = %raw,
                cap = %self.config.duration_reduction_cap,
                stay_days,
                "duration reduction hit the cap"
            );
            return self.config.duration_reduction_cap;
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Realistic-scenario configuration used by most tests.
    fn test_config() -> TourismWorksheetConfig {
        TourismWorksheetConfig::for_scenario(Scenario::Realistic)
    }

    fn test_input() -> TourismWorksheetInput {
        TourismWorksheetInput {
            tourist_count: 100,
            daily_spend: dec!(200.00),
            stay_days: 5,
            visited_cities: vec!["Belém".to_string()],
        }
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // TourismWorksheetConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_every_scenario_preset() {
        for scenario in [
            Scenario::Conservative,
            Scenario::Realistic,
            Scenario::Optimistic,
        ] {
            let config = TourismWorksheetConfig::for_scenario(scenario);

            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_zero_occupancy() {
        let config = TourismWorksheetConfig {
            occupancy: dec!(0),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(result, Err(TourismWorksheetError::InvalidOccupancy(dec!(0))));
    }

    #[test]
    fn validate_rejects_occupancy_above_one() {
        let config = TourismWorksheetConfig {
            occupancy: dec!(1.5),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidOccupancy(dec!(1.5)))
        );
    }

    #[test]
    fn validate_rejects_zero_base_multiplier() {
        let config = TourismWorksheetConfig {
            base_multiplier: dec!(0),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidBaseMultiplier(dec!(0)))
        );
    }

    #[test]
    fn validate_rejects_negative_sector_multiplier() {
        let config = TourismWorksheetConfig {
            sector_multiplier: dec!(-0.1),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidSectorMultiplier(dec!(-0.1)))
        );
    }

    #[test]
    fn validate_rejects_negative_seasonal_factor() {
        let config = TourismWorksheetConfig {
            seasonal_factor: dec!(-1.0),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidSeasonalFactor(dec!(-1.0)))
        );
    }

    #[test]
    fn validate_rejects_negative_city_elasticity() {
        let config = TourismWorksheetConfig {
            city_elasticity: dec!(-0.15),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidCityElasticity(dec!(-0.15)))
        );
    }

    #[test]
    fn validate_rejects_negative_duration_elasticity() {
        let config = TourismWorksheetConfig {
            duration_elasticity: dec!(-0.05),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidDurationElasticity(dec!(-0.05)))
        );
    }

    #[test]
    fn validate_rejects_reduction_cap_above_one() {
        let config = TourismWorksheetConfig {
            duration_reduction_cap: dec!(1.1),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidDurationReductionCap(dec!(
                1.1
            )))
        );
    }

    #[test]
    fn validate_rejects_zero_custom_adjustment() {
        let config = TourismWorksheetConfig {
            custom_adjustment: dec!(0),
            ..test_config()
        };

        let result = config.validate();

        assert_eq!(
            result,
            Err(TourismWorksheetError::InvalidCustomAdjustment(dec!(0)))
        );
    }

    // =========================================================================
    // input validation tests
    // =========================================================================

    #[test]
    fn calculate_rejects_zero_tourists() {
        let worksheet = TourismWorksheet::new(test_config());
        let input = TourismWorksheetInput {
            tourist_count: 0,
            ..test_input()
        };

        let result = worksheet.calculate(&input);

        assert_eq!(result, Err(TourismWorksheetError::ZeroTourists));
    }

    #[test]
    fn calculate_rejects_negative_daily_spend() {
        let worksheet = TourismWorksheet::new(test_config());
        let input = TourismWorksheetInput {
            daily_spend: dec!(-100.00),
            ..test_input()
        };

        let result = worksheet.calculate(&input);

        assert_eq!(
            result,
            Err(TourismWorksheetError::NegativeDailySpend(dec!(-100.00)))
        );
    }

    #[test]
    fn calculate_rejects_zero_stay_days() {
        let worksheet = TourismWorksheet::new(test_config());
        let input = TourismWorksheetInput {
            stay_days: 0,
            ..test_input()
        };

        let result = worksheet.calculate(&input);

        assert_eq!(result, Err(TourismWorksheetError::ZeroStayDays));
    }

    #[test]
    fn calculate_rejects_empty_city_list() {
        let worksheet = TourismWorksheet::new(test_config());
        let input = TourismWorksheetInput {
            visited_cities: Vec::new(),
            ..test_input()
        };

        let result = worksheet.calculate(&input);

        assert_eq!(result, Err(TourismWorksheetError::NoCitiesVisited));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_realistic_baseline() {
        let worksheet = TourismWorksheet::new(test_config());

        let result = worksheet.calculate(&test_input()).unwrap();

        // One city: no city adjustment
        assert_eq!(result.city_adjustment, dec!(1.00));
        // Five days: reduction 0.05 × 4 = 0.20
        assert_eq!(result.duration_reduction, dec!(0.20));
        assert_eq!(result.duration_adjustment, dec!(0.80));
        // 200 × 1.0 × 0.8 = 160
        assert_eq!(result.adjusted_daily_spend, dec!(160.00));
        // 160 × 5 × 100 = 80 000
        assert_eq!(result.direct_spending, dec!(80000.00));
        // (2.5 + 0.3) × 1.0 = 2.8
        assert_eq!(result.total_multiplier, dec!(2.80));
        // 80 000 × 2.8 = 224 000
        assert_eq!(result.total_impact, dec!(224000.00));
        assert_eq!(
            result.per_city_impact,
            vec![("Belém".to_string(), dec!(224000.00))]
        );
        assert_eq!(result.special_event, None);
    }

    #[test]
    fn more_cities_increase_adjusted_daily_spend() {
        let worksheet = TourismWorksheet::new(test_config());
        let one_city = worksheet.calculate(&test_input()).unwrap();

        let input = TourismWorksheetInput {
            visited_cities: vec![
                "Belém".to_string(),
                "Santarém".to_string(),
                "Marabá".to_string(),
            ],
            ..test_input()
        };
        let three_cities = worksheet.calculate(&input).unwrap();

        assert!(three_cities.adjusted_daily_spend > one_city.adjusted_daily_spend);
        assert!(three_cities.total_impact > one_city.total_impact);
        assert_eq!(three_cities.per_city_impact.len(), 3);
    }

    #[test]
    fn longer_stay_reduces_adjusted_daily_spend_but_raises_total() {
        let worksheet = TourismWorksheet::new(test_config());
        let short = worksheet
            .calculate(&TourismWorksheetInput {
                stay_days: 2,
                ..test_input()
            })
            .unwrap();
        let long = worksheet
            .calculate(&TourismWorksheetInput {
                stay_days: 15,
                ..test_input()
            })
            .unwrap();

        assert!(long.adjusted_daily_spend < short.adjusted_daily_spend);
        assert!(long.total_impact > short.total_impact);
    }

    #[test]
    fn duration_reduction_never_exceeds_cap() {
        let _guard = init_test_tracing();
        let worksheet = TourismWorksheet::new(test_config());

        let result = worksheet
            .calculate(&TourismWorksheetInput {
                stay_days: 100,
                ..test_input()
            })
            .unwrap();

        // 0.05 × 99 = 4.95 raw, capped at 0.3 (warning logged)
        assert_eq!(result.duration_reduction, dec!(0.30));
        assert_eq!(result.duration_adjustment, dec!(0.70));
    }

    #[test]
    fn optimistic_scenario_beats_conservative() {
        let conservative =
            TourismWorksheet::new(TourismWorksheetConfig::for_scenario(Scenario::Conservative))
                .calculate(&test_input())
                .unwrap();
        let optimistic =
            TourismWorksheet::new(TourismWorksheetConfig::for_scenario(Scenario::Optimistic))
                .calculate(&test_input())
                .unwrap();

        assert!(optimistic.total_impact > conservative.total_impact);
        assert!(optimistic.total_multiplier > conservative.total_multiplier);
    }

    #[test]
    fn partial_occupancy_scales_total_proportionally() {
        let full = TourismWorksheet::new(test_config())
            .calculate(&test_input())
            .unwrap();
        let partial = TourismWorksheet::new(TourismWorksheetConfig {
            occupancy: dec!(0.7),
            ..test_config()
        })
        .calculate(&test_input())
        .unwrap();

        assert_eq!(partial.total_impact, full.total_impact * dec!(0.7));
    }

    #[test]
    fn custom_adjustment_scales_multiplier() {
        let adjusted = TourismWorksheet::new(TourismWorksheetConfig {
            custom_adjustment: dec!(0.9),
            ..test_config()
        })
        .calculate(&test_input())
        .unwrap();

        // (2.5 + 0.3) × 1.0 × 0.9 = 2.52
        assert_eq!(adjusted.total_multiplier, dec!(2.52));
    }

    #[test]
    fn per_city_split_is_even_and_sums_to_total() {
        let worksheet = TourismWorksheet::new(test_config());
        let input = TourismWorksheetInput {
            visited_cities: vec![
                "Belém".to_string(),
                "Santarém".to_string(),
                "Castanhal".to_string(),
            ],
            ..test_input()
        };

        let result = worksheet.calculate(&input).unwrap();

        let first_share = result.per_city_impact[0].1;
        for (_, share) in &result.per_city_impact {
            assert_eq!(*share, first_share);
        }
        let sum: Decimal = result.per_city_impact.iter().map(|(_, v)| *v).sum();
        // Equal rounded shares; the sum may differ from the rounded total by
        // at most one cent per city.
        assert!((sum - result.total_impact).abs() <= dec!(0.03));
    }

    // =========================================================================
    // COP 30 tests
    // =========================================================================

    #[test]
    fn cop30_uplift_increases_total_impact() {
        let base = TourismWorksheet::new(test_config())
            .calculate(&test_input())
            .unwrap();
        let cop30 = TourismWorksheet::new(test_config().with_cop30_event())
            .calculate(&test_input())
            .unwrap();

        assert!(cop30.total_impact > base.total_impact);
        assert_eq!(cop30.special_event, Some(SpecialEvent::Cop30));
    }

    #[test]
    fn cop30_default_config_starts_from_optimistic_preset() {
        let config = TourismWorksheetConfig::cop30();

        let optimistic = Scenario::Optimistic.params();
        assert_eq!(config.base_multiplier, optimistic.base_multiplier);
        // 0.4 + 0.2 event uplift
        assert_eq!(config.sector_multiplier, dec!(0.6));
        // 1.2 × 1.3 event uplift
        assert_eq!(config.seasonal_factor, dec!(1.56));
        assert_eq!(config.event, Some(SpecialEvent::Cop30));
    }

    #[test]
    fn cop30_multiplier_combines_uplifts() {
        let worksheet = TourismWorksheet::new(TourismWorksheetConfig::cop30());

        let result = worksheet.calculate(&test_input()).unwrap();

        // (3.0 + 0.6) × 1.56 = 5.616, rounded to 5.62
        assert_eq!(result.total_multiplier, dec!(5.62));
    }
}
