mod city;
mod report;
mod scenario;
mod simulation;

pub use city::City;
pub use report::{ImpactLevel, SimulationReport};
pub use scenario::{Scenario, ScenarioParams};
pub use simulation::SimulationInputs;
