//! Chart export.
//!
//! Builds ECharts visualizations from the projected datasets and writes
//! them as self-contained HTML files. All chart state lives in the values
//! passed in; this module only translates them for the renderer.

use std::path::Path;

use anyhow::{Context, Result};
use charming::{
    Chart, HtmlRenderer,
    component::{Axis, Title},
    element::AxisType,
    series::{Bar, Line, Pie},
};
use impact_core::chart::{BarDatum, ChartHandle, PieSlice};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// The daily aggregate-spending line chart.
pub fn daily_spending_chart(handle: &ChartHandle) -> Chart {
    let series = handle.series();

    Chart::new()
        .title(Title::new().text("Aggregate spending per day"))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Line::new().data(
                series
                    .values
                    .iter()
                    .map(|value| to_f64(*value))
                    .collect::<Vec<_>>(),
            ),
        )
}

/// A vertical bar chart from labeled bar data.
pub fn bar_chart(
    title: &str,
    data: &[BarDatum],
) -> Chart {
    let labels: Vec<String> = data.iter().map(|datum| datum.label.clone()).collect();
    let values: Vec<f64> = data.iter().map(|datum| to_f64(datum.value)).collect();

    Chart::new()
        .title(Title::new().text(title))
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(Bar::new().data(values))
}

/// A pie chart from labeled slices.
pub fn pie_chart(
    title: &str,
    slices: &[PieSlice],
) -> Chart {
    let data = slices
        .iter()
        .map(|slice| (to_f64(slice.value), slice.label.as_str()))
        .collect::<Vec<_>>();

    Chart::new()
        .title(Title::new().text(title))
        .series(Pie::new().radius("60%").data(data))
}

/// Writes a chart as a self-contained HTML file.
pub fn save_chart(
    chart: &Chart,
    title: &str,
    path: &Path,
) -> Result<()> {
    let mut renderer = HtmlRenderer::new(title, 900, 520);
    renderer
        .save(chart, path)
        .with_context(|| format!("cannot write chart '{}'", path.display()))?;
    Ok(())
}
