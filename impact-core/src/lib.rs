pub mod calculations;
pub mod chart;
pub mod models;

pub use models::*;
