use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use impact_data::{CityLoader, CityTable, default_cities};

/// Validate and list city reference data.
///
/// Reads a cities CSV file, checks it (unique names, positive multipliers),
/// and prints the resulting table. Without a file the built-in reference
/// set is listed instead. The CSV columns:
/// - name: the city name, unique within the file
/// - state: the federative unit
/// - population: resident population
/// - gdp_per_capita: GDP per capita in the local currency
/// - multiplier: the impact weight used by the selection factor
#[derive(Parser, Debug)]
#[command(name = "impact-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing city reference data
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let table = match &args.file {
        Some(path) => {
            println!("Loading cities from: {}", path.display());

            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

            let records = CityLoader::parse(file)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

            println!("Parsed {} records from CSV", records.len());

            CityTable::from_records(records).context("Invalid city reference data")?
        }
        None => {
            println!("No file given; listing the built-in reference set");
            CityTable::from_cities(default_cities()).context("Invalid built-in reference data")?
        }
    };

    println!("{} cities:", table.len());
    for city in table.all() {
        println!(
            "  - {} ({}): population {}, GDP per capita {}, multiplier {}",
            city.name, city.state, city.population, city.gdp_per_capita, city.multiplier
        );
    }

    Ok(())
}
