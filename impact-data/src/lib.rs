pub mod loader;
pub mod seed;

pub use loader::{CityLoader, CityLoaderError, CityRecord, CityTable};
pub use seed::default_cities;
