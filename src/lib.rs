pub mod astronomy;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod math;
pub mod sky_errors;
pub mod time;

pub use astronomy::{ObservedSky, StarCatalogue};
pub use config::ViewingParams;
pub use sky_errors::SkyError;
