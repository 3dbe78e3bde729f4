//! Direct economic impact aggregates.
//!
//! This is the calculation behind the interactive estimator: tourist count,
//! average daily spend and the city selection factor combine into a per-day
//! aggregate, which the stay length turns into a total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a direct-impact estimate.
///
/// Values are stored exact. Rounding happens only at presentation
/// boundaries (chart projection, currency formatting), so the identities
/// `total_aggregate == per_day_aggregate * day_count` and
/// `per_day_aggregate == tourist_count * daily_spend * factor` hold without
/// tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// The city selection factor the estimate was computed with.
    pub factor: Decimal,

    /// Aggregate tourist spending per day of stay.
    pub per_day_aggregate: Decimal,

    /// Aggregate tourist spending over the whole stay.
    pub total_aggregate: Decimal,
}

/// Estimates aggregate tourist spending for a stay.
///
/// `per_day_aggregate = tourist_count * daily_spend * factor`, and
/// `total_aggregate = per_day_aggregate * day_count`.
///
/// Pure and total: there is no clamping and no rounding here, negative
/// inputs propagate arithmetically, and the function is safe to call on
/// every input change. Sanitizing raw user input is the presentation
/// layer's job.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::calculations::estimate_impact;
///
/// let result = estimate_impact(dec!(50000), dec!(350), 5, dec!(1.2));
///
/// assert_eq!(result.per_day_aggregate, dec!(21000000.0));
/// assert_eq!(result.total_aggregate, dec!(105000000.0));
/// ```
pub fn estimate_impact(
    tourist_count: Decimal,
    daily_spend: Decimal,
    day_count: u32,
    factor: Decimal,
) -> ImpactResult {
    let per_day_aggregate = tourist_count * daily_spend * factor;
    let total_aggregate = per_day_aggregate * Decimal::from(day_count);

    ImpactResult {
        factor,
        per_day_aggregate,
        total_aggregate,
    }
}
