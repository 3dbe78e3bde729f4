//! Line-chart series projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::ImpactResult;
use crate::calculations::common::round_whole;

/// A labeled series for a line-chart renderer: one label per point, one
/// value per point, same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

impl ChartSeries {
    /// A series with no points.
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Projects an impact estimate into the daily-spending line series.
///
/// One point per stay day, labeled `"Day 1"` through `"Day {d}"` in day
/// order. Every value is the per-day aggregate rounded to whole units; the
/// model assumes uniform daily spend, so the line is flat. A zero-day stay
/// projects to an empty series, which is a valid chart, not an error.
///
/// Deterministic and stateless: equal inputs always produce an equal series.
pub fn daily_spending_series(
    result: &ImpactResult,
    day_count: u32,
) -> ChartSeries {
    let value = round_whole(result.per_day_aggregate);

    ChartSeries {
        labels: (1..=day_count).map(|day| format!("Day {day}")).collect(),
        values: (0..day_count).map(|_| value).collect(),
    }
}
