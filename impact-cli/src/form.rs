//! Estimator form state.
//!
//! Raw input arrives as text. Parsing collects human-readable error
//! messages instead of failing on the first problem, and the only numeric
//! sanitation is clamping negative values to their absolute value, with a
//! warning; everything else is the calculation layer's concern.

use impact_core::SimulationInputs;
use impact_core::models::City;
use rust_decimal::Decimal;
use tracing::warn;

/// Text form state for one estimator run.
#[derive(Debug, Clone, Default)]
pub struct SimulationForm {
    pub tourist_count: String,
    pub daily_spend: String,
    pub stay_days: String,

    // Validation errors from the last `validate` call
    pub errors: Vec<String>,
}

/// Numeric inputs parsed out of a [`SimulationForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub tourist_count: u64,
    pub daily_spend: Decimal,
    pub stay_days: u32,
}

impl ValidatedInputs {
    /// Pairs the parsed numbers with a city selection into the value the
    /// calculation layer consumes.
    pub fn with_cities(
        self,
        selected_cities: Vec<City>,
    ) -> SimulationInputs {
        SimulationInputs {
            tourist_count: self.tourist_count,
            daily_spend: self.daily_spend,
            stay_days: self.stay_days,
            selected_cities,
        }
    }
}

impl SimulationForm {
    /// A form pre-filled with the estimator's reset defaults.
    pub fn new() -> Self {
        Self {
            tourist_count: "50000".to_string(),
            daily_spend: "350".to_string(),
            stay_days: "5".to_string(),
            errors: Vec::new(),
        }
    }

    /// Parses the form into [`ValidatedInputs`], collecting errors.
    ///
    /// Negative numbers are clamped to their absolute value (the estimator
    /// never rejects a sign slip, it corrects it); empty or non-numeric
    /// fields produce an error message per field.
    pub fn validate(&mut self) -> Result<ValidatedInputs, ()> {
        self.errors.clear();

        let tourist_count = self.parse_count("Tourist count", &self.tourist_count.clone());
        let daily_spend = self.parse_amount("Daily spend", &self.daily_spend.clone());
        let stay_days = self.parse_days("Stay days", &self.stay_days.clone());

        if !self.errors.is_empty() {
            return Err(());
        }

        Ok(ValidatedInputs {
            tourist_count: tourist_count.unwrap(),
            daily_spend: daily_spend.unwrap(),
            stay_days: stay_days.unwrap(),
        })
    }

    fn parse_count(
        &mut self,
        field: &str,
        value: &str,
    ) -> Option<u64> {
        if value.trim().is_empty() {
            self.errors.push(format!("{field} is required"));
            return None;
        }
        match value.trim().parse::<i64>() {
            Ok(parsed) => {
                if parsed < 0 {
                    warn!(field, value = parsed, "negative count clamped to its absolute value");
                }
                Some(parsed.unsigned_abs())
            }
            Err(_) => {
                self.errors.push(format!("{field} must be a whole number"));
                None
            }
        }
    }

    fn parse_amount(
        &mut self,
        field: &str,
        value: &str,
    ) -> Option<Decimal> {
        if value.trim().is_empty() {
            self.errors.push(format!("{field} is required"));
            return None;
        }
        match value.trim().parse::<Decimal>() {
            Ok(parsed) => {
                if parsed < Decimal::ZERO {
                    warn!(field, %parsed, "negative amount clamped to its absolute value");
                    Some(parsed.abs())
                } else {
                    Some(parsed)
                }
            }
            Err(_) => {
                self.errors.push(format!("{field} must be a valid number"));
                None
            }
        }
    }

    fn parse_days(
        &mut self,
        field: &str,
        value: &str,
    ) -> Option<u32> {
        if value.trim().is_empty() {
            self.errors.push(format!("{field} is required"));
            return None;
        }
        match value.trim().parse::<i32>() {
            Ok(parsed) => {
                if parsed < 0 {
                    warn!(field, value = parsed, "negative day count clamped to its absolute value");
                }
                Some(parsed.unsigned_abs())
            }
            Err(_) => {
                self.errors.push(format!("{field} must be a whole number"));
                None
            }
        }
    }
}
