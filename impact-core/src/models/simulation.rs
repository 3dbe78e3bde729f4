use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::City;

/// One round of user-supplied estimator input, assembled fresh by the
/// presentation layer on every recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    pub tourist_count: u64,
    pub daily_spend: Decimal,
    pub stay_days: u32,
    pub selected_cities: Vec<City>,
}
