//! City selection factor.

use rust_decimal::Decimal;

use crate::models::City;

/// Combined impact factor for a selection of cities.
///
/// Returns the arithmetic mean of the selected cities' impact multipliers.
/// An empty selection yields the neutral factor `1`, so an estimate with no
/// cities picked is simply unadjusted.
///
/// Multipliers are used as supplied; sanity of the reference data (positive
/// multipliers, unique names) is enforced where the data is loaded, not here.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use impact_core::City;
/// use impact_core::calculations::city_factor;
///
/// let belem = City {
///     name: "Belém".to_string(),
///     state: "Pará".to_string(),
///     population: 1_492_745,
///     gdp_per_capita: dec!(25847.50),
///     multiplier: dec!(1.2),
/// };
/// let santarem = City {
///     name: "Santarém".to_string(),
///     state: "Pará".to_string(),
///     population: 306_480,
///     gdp_per_capita: dec!(15678.90),
///     multiplier: dec!(1.0),
/// };
///
/// assert_eq!(city_factor(&[]), dec!(1));
/// assert_eq!(city_factor(&[belem.clone()]), dec!(1.2));
/// assert_eq!(city_factor(&[belem, santarem]), dec!(1.1));
/// ```
pub fn city_factor(selected: &[City]) -> Decimal {
    if selected.is_empty() {
        return Decimal::ONE;
    }

    let sum: Decimal = selected.iter().map(|city| city.multiplier).sum();
    sum / Decimal::from(selected.len())
}
