use std::collections::BTreeMap;
use std::io::Read;

use impact_core::City;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading city reference data.
#[derive(Debug, Error)]
pub enum CityLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Duplicate city '{0}' in reference data")]
    DuplicateCity(String),

    #[error("City '{0}' has non-positive multiplier {1}")]
    InvalidMultiplier(String, Decimal),

    #[error("Unknown city '{0}' (not present in the reference data)")]
    UnknownCity(String),
}

impl From<csv::Error> for CityLoaderError {
    fn from(err: csv::Error) -> Self {
        CityLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the cities CSV file.
///
/// The CSV format:
/// - `name`: the city name, unique within the file
/// - `state`: the federative unit the city belongs to
/// - `population`: resident population
/// - `gdp_per_capita`: GDP per capita in the local currency
/// - `multiplier`: the impact weight used by the selection factor; must be
///   positive
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CityRecord {
    pub name: String,
    pub state: String,
    pub population: u64,
    pub gdp_per_capita: Decimal,
    pub multiplier: Decimal,
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        City {
            name: record.name,
            state: record.state,
            population: record.population,
            gdp_per_capita: record.gdp_per_capita,
            multiplier: record.multiplier,
        }
    }
}

/// Loader for city reference data from CSV files.
pub struct CityLoader;

impl CityLoader {
    /// Parse city records from a CSV reader.
    ///
    /// Returns the records in file order. The reader can be any type that
    /// implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CityRecord>, CityLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: CityRecord = result?;
            records.push(record);
        }

        Ok(records)
    }
}

/// In-memory city reference table, keyed and iterated by name.
///
/// Building the table validates the reference data: names must be unique
/// and multipliers positive. The selection-factor calculation downstream
/// assumes both and enforces neither.
#[derive(Debug, Clone, Default)]
pub struct CityTable {
    cities: BTreeMap<String, City>,
}

impl CityTable {
    /// Builds a table from parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CityLoaderError`] on a duplicate name or a non-positive
    /// multiplier.
    pub fn from_records(records: Vec<CityRecord>) -> Result<Self, CityLoaderError> {
        let mut cities = BTreeMap::new();

        for record in records {
            if record.multiplier <= Decimal::ZERO {
                return Err(CityLoaderError::InvalidMultiplier(
                    record.name,
                    record.multiplier,
                ));
            }
            if cities.contains_key(&record.name) {
                return Err(CityLoaderError::DuplicateCity(record.name));
            }
            cities.insert(record.name.clone(), record.into());
        }

        Ok(Self { cities })
    }

    /// Builds a table from ready-made cities (the seed set).
    pub fn from_cities(cities: Vec<City>) -> Result<Self, CityLoaderError> {
        let records = cities
            .into_iter()
            .map(|city| CityRecord {
                name: city.name,
                state: city.state,
                population: city.population,
                gdp_per_capita: city.gdp_per_capita,
                multiplier: city.multiplier,
            })
            .collect();
        Self::from_records(records)
    }

    /// Looks up a single city by name.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&City> {
        self.cities.get(name)
    }

    /// Resolves a list of names into cities, preserving the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`CityLoaderError::UnknownCity`] for the first name not in
    /// the table.
    pub fn select(
        &self,
        names: &[String],
    ) -> Result<Vec<City>, CityLoaderError> {
        names
            .iter()
            .map(|name| {
                self.cities
                    .get(name)
                    .cloned()
                    .ok_or_else(|| CityLoaderError::UnknownCity(name.clone()))
            })
            .collect()
    }

    /// All cities, ordered by name.
    pub fn all(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"name,state,population,gdp_per_capita,multiplier
Belém,Pará,1492745,25847.50,1.2
Ananindeua,Pará,535547,18234.80,1.05
Santarém,Pará,306480,15678.90,1.1
"#;

    #[test]
    fn parse_csv_single_city() {
        let csv = "name,state,population,gdp_per_capita,multiplier\nBelém,Pará,1492745,25847.50,1.2";

        let records = CityLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            CityRecord {
                name: "Belém".to_string(),
                state: "Pará".to_string(),
                population: 1_492_745,
                gdp_per_capita: dec!(25847.50),
                multiplier: dec!(1.2),
            }
        );
    }

    #[test]
    fn parse_csv_preserves_file_order() {
        let records = CityLoader::parse(TEST_CSV.as_bytes()).expect("Failed to parse CSV");

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Belém", "Ananindeua", "Santarém"]);
    }

    #[test]
    fn parse_empty_csv() {
        let csv = "name,state,population,gdp_per_capita,multiplier\n";

        let records = CityLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert!(records.is_empty());
    }

    #[test]
    fn parse_invalid_csv_missing_column() {
        let csv = "name,state,population\nBelém,Pará,1492745";

        let result = CityLoader::parse(csv.as_bytes());

        let err = result.expect_err("Should fail for missing column");
        let CityLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            msg
        );
    }

    #[test]
    fn parse_invalid_csv_bad_number() {
        let csv = "name,state,population,gdp_per_capita,multiplier\nBelém,Pará,abc,25847.50,1.2";

        let result = CityLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(CityLoaderError::CsvParse(_))));
    }

    #[test]
    fn table_iterates_in_name_order() {
        let records = CityLoader::parse(TEST_CSV.as_bytes()).unwrap();

        let table = CityTable::from_records(records).unwrap();

        let names: Vec<&str> = table.all().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ananindeua", "Belém", "Santarém"]);
    }

    #[test]
    fn table_rejects_duplicate_names() {
        let csv = "name,state,population,gdp_per_capita,multiplier\n\
                   Belém,Pará,1492745,25847.50,1.2\n\
                   Belém,Pará,1492745,25847.50,1.3";
        let records = CityLoader::parse(csv.as_bytes()).unwrap();

        let result = CityTable::from_records(records);

        match result {
            Err(CityLoaderError::DuplicateCity(name)) => assert_eq!(name, "Belém"),
            other => panic!("expected DuplicateCity, got {other:?}"),
        }
    }

    #[test]
    fn table_rejects_zero_multiplier() {
        let csv = "name,state,population,gdp_per_capita,multiplier\nBelém,Pará,1492745,25847.50,0";
        let records = CityLoader::parse(csv.as_bytes()).unwrap();

        let result = CityTable::from_records(records);

        match result {
            Err(CityLoaderError::InvalidMultiplier(name, value)) => {
                assert_eq!(name, "Belém");
                assert_eq!(value, dec!(0));
            }
            other => panic!("expected InvalidMultiplier, got {other:?}"),
        }
    }

    #[test]
    fn select_preserves_requested_order() {
        let records = CityLoader::parse(TEST_CSV.as_bytes()).unwrap();
        let table = CityTable::from_records(records).unwrap();

        let selected = table
            .select(&["Santarém".to_string(), "Belém".to_string()])
            .unwrap();

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Santarém", "Belém"]);
    }

    #[test]
    fn select_unknown_city_errors() {
        let records = CityLoader::parse(TEST_CSV.as_bytes()).unwrap();
        let table = CityTable::from_records(records).unwrap();

        let result = table.select(&["Manaus".to_string()]);

        match result {
            Err(CityLoaderError::UnknownCity(name)) => assert_eq!(name, "Manaus"),
            other => panic!("expected UnknownCity, got {other:?}"),
        }
    }

    #[test]
    fn get_finds_city_by_exact_name() {
        let records = CityLoader::parse(TEST_CSV.as_bytes()).unwrap();
        let table = CityTable::from_records(records).unwrap();

        assert_eq!(table.get("Belém").map(|c| c.population), Some(1_492_745));
        assert_eq!(table.get("belém"), None);
    }
}
