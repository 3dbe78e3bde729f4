//! Plain-text simulation report.

use std::fmt::Write;

use impact_core::SimulationReport;

use crate::format::{format_brl, format_brl_cents, format_count};

/// Renders a simulation report for the terminal.
///
/// The headline estimate is always present; the scenario and environment
/// sections appear only when those worksheets ran.
pub fn render_report(report: &SimulationReport) -> String {
    let mut out = String::new();

    let cities = if report.inputs.selected_cities.is_empty() {
        "—".to_string()
    } else {
        report
            .inputs
            .selected_cities
            .iter()
            .map(|city| city.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let _ = writeln!(out, "=== Estimated impact ===");
    let _ = writeln!(out, "Tourists:            {}", format_count(report.inputs.tourist_count));
    let _ = writeln!(out, "Daily spend:         {}", format_brl_cents(report.inputs.daily_spend));
    let _ = writeln!(out, "Stay:                {} days", report.inputs.stay_days);
    let _ = writeln!(out, "Selected cities:     {cities}");
    let _ = writeln!(out, "City factor:         {:.2}", report.impact.factor);
    let _ = writeln!(out, "Aggregate per day:   {}", format_brl(report.impact.per_day_aggregate));
    let _ = writeln!(out, "Total aggregate:     {}", format_brl(report.impact.total_aggregate));
    let _ = writeln!(out, "Impact level:        {}", report.level.as_str());

    if let Some(tourism) = &report.tourism {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Scenario worksheet ===");
        let _ = writeln!(out, "Adjusted daily spend: {}", format_brl_cents(tourism.adjusted_daily_spend));
        let _ = writeln!(out, "Direct spending:      {}", format_brl_cents(tourism.direct_spending));
        let _ = writeln!(out, "Total multiplier:     {:.2}", tourism.total_multiplier);
        let _ = writeln!(out, "Total impact:         {}", format_brl_cents(tourism.total_impact));
        if tourism.special_event.is_some() {
            let _ = writeln!(out, "Special event:        COP 30 uplift applied");
        }
        let _ = writeln!(out, "Impact per city:");
        for (name, share) in &tourism.per_city_impact {
            let _ = writeln!(out, "  - {}: {}", name, format_brl_cents(*share));
        }
    }

    if let Some(environment) = &report.environment {
        let _ = writeln!(out);
        let _ = writeln!(out, "=== Environmental footprint ===");
        let _ = writeln!(out, "Water consumption:    {:.2} m³", environment.water_m3);
        let _ = writeln!(out, "Waste production:     {:.2} t", environment.waste_tonnes);
        let _ = writeln!(out, "Water treatment:      {}", format_brl_cents(environment.water_treatment_cost));
        let _ = writeln!(out, "Waste management:     {}", format_brl_cents(environment.waste_management_cost));
    }

    out
}
