use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::{EnvironmentResult, ImpactResult, TourismResult};
use crate::models::SimulationInputs;

/// Magnitude band of a total impact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    Moderate,
    High,
}

impl ImpactLevel {
    /// Classifies a total impact amount: below 5 000 is low, below 20 000
    /// moderate, anything else high.
    pub fn from_total_impact(total: Decimal) -> Self {
        if total < dec!(5000) {
            Self::Low
        } else if total < dec!(20000) {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// A completed simulation: the inputs that produced it, every calculated
/// result, and a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub inputs: SimulationInputs,
    pub impact: ImpactResult,
    pub tourism: Option<TourismResult>,
    pub environment: Option<EnvironmentResult>,
    pub level: ImpactLevel,
    pub created_at: DateTime<Utc>,
}
