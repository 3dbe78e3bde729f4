//! Bar and pie dataset projections.
//!
//! The simulator's secondary charts: a single economic-impact bar, the
//! environmental footprint as horizontal bars, and the monetary-equivalent
//! breakdown as pie slices.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::EnvironmentResult;

/// One labeled bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: Decimal,
}

/// One labeled pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: Decimal,
}

/// Projects the total impact into the single-bar economic chart.
pub fn economic_bars(total_impact: Decimal) -> Vec<BarDatum> {
    vec![BarDatum {
        label: "Economic impact".to_string(),
        value: total_impact,
    }]
}

/// Projects the environmental footprint into bar data.
///
/// Water is charted in cubic meters; waste is converted from tonnes to
/// kilograms so both bars land on comparable magnitudes.
pub fn environmental_bars(result: &EnvironmentResult) -> Vec<BarDatum> {
    vec![
        BarDatum {
            label: "Water consumption (m³)".to_string(),
            value: result.water_m3,
        },
        BarDatum {
            label: "Waste production (kg)".to_string(),
            value: result.waste_tonnes * dec!(1000),
        },
    ]
}

/// Projects the impact and footprint into monetary-equivalent pie slices:
/// the direct economic impact next to the cost of treating the water and
/// managing the waste the same stay generates.
pub fn monetary_equivalent_slices(
    total_impact: Decimal,
    result: &EnvironmentResult,
) -> Vec<PieSlice> {
    vec![
        PieSlice {
            label: "Direct economic impact".to_string(),
            value: total_impact,
        },
        PieSlice {
            label: "Water treatment cost".to_string(),
            value: result.water_treatment_cost,
        },
        PieSlice {
            label: "Waste management cost".to_string(),
            value: result.waste_management_cost,
        },
    ]
}
