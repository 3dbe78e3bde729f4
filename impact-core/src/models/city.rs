use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: String,
    pub population: u64,
    pub gdp_per_capita: Decimal,
    /// Impact weight applied when this city is part of a selection.
    pub multiplier: Decimal,
}
