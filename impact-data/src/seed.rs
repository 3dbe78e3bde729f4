//! Built-in city reference set.
//!
//! The six Pará municipalities the simulator ships with, used whenever no
//! cities file is supplied. Population and GDP per capita come from the
//! municipal registry; the multiplier is the impact weight of hosting
//! visitors there, with the state capital weighted highest.

use impact_core::City;
use rust_decimal_macros::dec;

/// The default city reference set, in registry order.
pub fn default_cities() -> Vec<City> {
    vec![
        City {
            name: "Belém".to_string(),
            state: "Pará".to_string(),
            population: 1_492_745,
            gdp_per_capita: dec!(25847.50),
            multiplier: dec!(1.2),
        },
        City {
            name: "Ananindeua".to_string(),
            state: "Pará".to_string(),
            population: 535_547,
            gdp_per_capita: dec!(18234.80),
            multiplier: dec!(1.05),
        },
        City {
            name: "Santarém".to_string(),
            state: "Pará".to_string(),
            population: 306_480,
            gdp_per_capita: dec!(15678.90),
            multiplier: dec!(1.1),
        },
        City {
            name: "Marabá".to_string(),
            state: "Pará".to_string(),
            population: 275_086,
            gdp_per_capita: dec!(22145.70),
            multiplier: dec!(1.0),
        },
        City {
            name: "Parauapebas".to_string(),
            state: "Pará".to_string(),
            population: 208_273,
            gdp_per_capita: dec!(89234.60),
            multiplier: dec!(1.15),
        },
        City {
            name: "Castanhal".to_string(),
            state: "Pará".to_string(),
            population: 200_793,
            gdp_per_capita: dec!(16892.40),
            multiplier: dec!(0.95),
        },
    ]
}
