//! End-to-end checks: parse a cities CSV, build the table, and drive the
//! selection factor through it.

use impact_core::calculations::city_factor;
use impact_data::{CityLoader, CityLoaderError, CityTable, default_cities};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const CITIES_CSV: &str = r#"name,state,population,gdp_per_capita,multiplier
Belém,Pará,1492745,25847.50,1.2
Ananindeua,Pará,535547,18234.80,1.05
Santarém,Pará,306480,15678.90,1.1
Marabá,Pará,275086,22145.70,1.0
Parauapebas,Pará,208273,89234.60,1.15
Castanhal,Pará,200793,16892.40,0.95
"#;

#[test]
fn csv_round_trip_matches_seed_set() {
    let records = CityLoader::parse(CITIES_CSV.as_bytes()).expect("CSV must parse");
    let table = CityTable::from_records(records).expect("CSV data must be valid");

    let seed_table = CityTable::from_cities(default_cities()).expect("seed must be valid");

    let from_csv: Vec<_> = table.all().cloned().collect();
    let from_seed: Vec<_> = seed_table.all().cloned().collect();
    assert_eq!(from_csv, from_seed);
}

#[test]
fn selection_feeds_the_factor_calculation() {
    let records = CityLoader::parse(CITIES_CSV.as_bytes()).unwrap();
    let table = CityTable::from_records(records).unwrap();

    let selected = table
        .select(&["Belém".to_string(), "Santarém".to_string()])
        .unwrap();

    assert_eq!(city_factor(&selected), dec!(1.15));
}

#[test]
fn empty_selection_resolves_to_neutral_factor() {
    let table = CityTable::from_cities(default_cities()).unwrap();

    let selected = table.select(&[]).unwrap();

    assert!(selected.is_empty());
    assert_eq!(city_factor(&selected), dec!(1));
}

#[test]
fn unknown_name_in_selection_is_reported() {
    let table = CityTable::from_cities(default_cities()).unwrap();

    let result = table.select(&["Belém".to_string(), "Manaus".to_string()]);

    match result {
        Err(CityLoaderError::UnknownCity(name)) => assert_eq!(name, "Manaus"),
        other => panic!("expected UnknownCity, got {other:?}"),
    }
}

#[test]
fn corrupt_multiplier_fails_table_construction() {
    let csv = "name,state,population,gdp_per_capita,multiplier\nBelém,Pará,1492745,25847.50,-1.2";
    let records = CityLoader::parse(csv.as_bytes()).unwrap();

    let result = CityTable::from_records(records);

    assert!(matches!(
        result,
        Err(CityLoaderError::InvalidMultiplier(_, _))
    ));
}
