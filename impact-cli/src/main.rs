use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use impact_cli::chart_export;
use impact_cli::config::{SimulatorConfig, load_config};
use impact_cli::form::SimulationForm;
use impact_cli::report::render_report;
use impact_core::calculations::{
    EnvironmentWorksheet, EnvironmentWorksheetConfig, TourismWorksheet, TourismWorksheetConfig,
    TourismWorksheetInput, city_factor, estimate_impact,
};
use impact_core::chart::{
    ChartHandle, daily_spending_series, economic_bars, environmental_bars,
    monetary_equivalent_slices,
};
use impact_core::{ImpactLevel, Scenario, SimulationReport};
use impact_data::{CityLoader, CityTable, default_cities};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tourism economic impact simulator for the COP 30 host region.
///
/// Loads the city reference table, assembles the estimator inputs, runs the
/// impact calculations, and prints a report. Optionally exports the charts
/// as self-contained HTML files.
#[derive(Debug, Parser)]
struct Cli {
    /// Number of tourists expected.
    #[arg(long, default_value = "50000")]
    tourists: String,

    /// Average spend per tourist per day.
    #[arg(long, default_value = "350")]
    spend: String,

    /// Stay length in days.
    #[arg(long, default_value = "5")]
    days: String,

    /// City to include in the selection; repeat for several.
    /// With no selection the estimate runs unadjusted.
    #[arg(long = "city")]
    cities: Vec<String>,

    /// CSV file with city reference data (defaults to the built-in set).
    #[arg(long)]
    cities_file: Option<PathBuf>,

    /// Scenario preset for the full worksheet.
    #[arg(long, value_enum)]
    scenario: Option<ScenarioArg>,

    /// Apply the COP 30 event uplift (implies the optimistic scenario
    /// unless one is given explicitly).
    #[arg(long, default_value_t = false)]
    cop30: bool,

    /// Occupancy rate in (0, 1].
    #[arg(long)]
    occupancy: Option<Decimal>,

    /// Free-form adjustment applied to the total multiplier.
    #[arg(long)]
    adjustment: Option<Decimal>,

    /// TOML file overriding worksheet parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to write chart HTML files into.
    #[arg(long)]
    charts_out: Option<PathBuf>,

    /// Also export the monetary-equivalent pie chart.
    #[arg(long, default_value_t = false)]
    monetary_chart: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Conservative,
    Realistic,
    Optimistic,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Conservative => Scenario::Conservative,
            ScenarioArg::Realistic => Scenario::Realistic,
            ScenarioArg::Optimistic => Scenario::Optimistic,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── worksheet wiring ────────────────────────────────────────────────────────

/// Resolves the tourism configuration from the CLI flags and the optional
/// config-file overrides (flags first, file wins).
fn tourism_config(
    cli: &Cli,
    overrides: &SimulatorConfig,
) -> TourismWorksheetConfig {
    let mut config = match (cli.scenario, cli.cop30) {
        (None, true) => TourismWorksheetConfig::cop30(),
        (Some(scenario), true) => {
            TourismWorksheetConfig::for_scenario(scenario.into()).with_cop30_event()
        }
        (scenario, false) => {
            TourismWorksheetConfig::for_scenario(scenario.map(Scenario::from).unwrap_or_default())
        }
    };

    if let Some(occupancy) = cli.occupancy {
        config.occupancy = occupancy;
    }
    if let Some(adjustment) = cli.adjustment {
        config.custom_adjustment = adjustment;
    }

    overrides.tourism.apply(config)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let overrides = match &cli.config {
        Some(path) => load_config(path)?,
        None => SimulatorConfig::default(),
    };

    // Reference data
    let table = match &cli.cities_file {
        Some(path) => {
            debug!("loading cities from {}", path.display());
            let file =
                File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
            let records = CityLoader::parse(file)
                .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;
            CityTable::from_records(records).context("Invalid city reference data")?
        }
        None => CityTable::from_cities(default_cities()).context("Invalid built-in reference data")?,
    };

    let selected = table.select(&cli.cities)?;

    // Form input
    let mut form = SimulationForm {
        tourist_count: cli.tourists.clone(),
        daily_spend: cli.spend.clone(),
        stay_days: cli.days.clone(),
        errors: Vec::new(),
    };
    let Ok(inputs) = form.validate() else {
        bail!("invalid input: {}", form.errors.join("; "));
    };

    // Core estimate and chart projection
    let factor = city_factor(&selected);
    let impact = estimate_impact(
        Decimal::from(inputs.tourist_count),
        inputs.daily_spend,
        inputs.stay_days,
        factor,
    );
    let handle = ChartHandle::create(daily_spending_series(&impact, inputs.stay_days));

    // Scenario worksheet; it requires at least one visited city
    let tourism = if selected.is_empty() {
        info!("no cities selected; skipping the scenario worksheet");
        None
    } else {
        let worksheet = TourismWorksheet::new(tourism_config(&cli, &overrides));
        Some(worksheet.calculate(&TourismWorksheetInput {
            tourist_count: inputs.tourist_count,
            daily_spend: inputs.daily_spend,
            stay_days: inputs.stay_days,
            visited_cities: selected.iter().map(|city| city.name.clone()).collect(),
        })?)
    };

    let environment = EnvironmentWorksheet::new(
        overrides
            .environment
            .apply(EnvironmentWorksheetConfig::default()),
    )
    .calculate(inputs.tourist_count, inputs.stay_days)?;

    let level_total = tourism
        .as_ref()
        .map(|result| result.total_impact)
        .unwrap_or(impact.total_aggregate);

    let report = SimulationReport {
        inputs: inputs.with_cities(selected),
        impact,
        tourism,
        environment: Some(environment.clone()),
        level: ImpactLevel::from_total_impact(level_total),
        created_at: Utc::now(),
    };

    println!("{}", render_report(&report));

    // Chart export
    if let Some(dir) = &cli.charts_out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create chart directory '{}'", dir.display()))?;

        chart_export::save_chart(
            &chart_export::daily_spending_chart(&handle),
            "Aggregate spending per day",
            &dir.join("daily_spending.html"),
        )?;

        if let Some(tourism) = &report.tourism {
            chart_export::save_chart(
                &chart_export::bar_chart("Economic impact", &economic_bars(tourism.total_impact)),
                "Economic impact",
                &dir.join("economic_impact.html"),
            )?;
        }

        chart_export::save_chart(
            &chart_export::bar_chart(
                "Environmental footprint",
                &environmental_bars(&environment),
            ),
            "Environmental footprint",
            &dir.join("environmental_footprint.html"),
        )?;

        if cli.monetary_chart {
            chart_export::save_chart(
                &chart_export::pie_chart(
                    "Monetary equivalents",
                    &monetary_equivalent_slices(level_total, &environment),
                ),
                "Monetary equivalents",
                &dir.join("monetary_equivalent.html"),
            )?;
        }

        info!("charts written to {}", dir.display());
    }

    Ok(())
}
