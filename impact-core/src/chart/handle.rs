//! Explicit chart handle.

use serde::{Deserialize, Serialize};

use crate::chart::series::ChartSeries;

/// The chart a renderer is currently showing, as a plain value.
///
/// The interactive flow is create-once, update-on-every-recalculation. The
/// caller creates the handle with the first projected series and threads it
/// through subsequent updates; the revision counter lets a renderer tell a
/// fresh chart (revision 0) from an in-place update. There is no hidden
/// chart state anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartHandle {
    series: ChartSeries,
    revision: u64,
}

impl ChartHandle {
    /// Creates a handle for a freshly drawn chart.
    pub fn create(series: ChartSeries) -> Self {
        Self {
            series,
            revision: 0,
        }
    }

    /// Replaces the displayed series, bumping the revision.
    pub fn update(
        mut self,
        series: ChartSeries,
    ) -> Self {
        self.series = series;
        self.revision += 1;
        self
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
