//! Chart data projection.
//!
//! Pure reshaping of calculation results into the labeled datasets a chart
//! renderer consumes. Nothing in here draws anything or keeps renderer
//! state; the handle a renderer needs is an explicit value owned by the
//! caller.

pub mod datasets;
pub mod handle;
pub mod series;

pub use datasets::{
    BarDatum, PieSlice, economic_bars, environmental_bars, monetary_equivalent_slices,
};
pub use handle::ChartHandle;
pub use series::{ChartSeries, daily_spending_series};
