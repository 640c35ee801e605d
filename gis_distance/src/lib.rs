//! # GIS Distance - Library
//!
//! Computes the distance in kilometers between two latitude/longitude points,
//! either on a sphere of adjustable radius (haversine, spherical law of
//! cosines) or on the WGS-84 ellipsoid (Vincenty).
//!
//! ```
//! use gis_distance::{to_miles, DistanceCalculator};
//!
//! let mut calc = DistanceCalculator::new(40.47, 73.58, 34.3, 118.15)?;
//! let km = calc.distance()?;
//! assert!((km - 3952.39).abs() < 0.01);
//! assert!(to_miles(km) < km);
//! # Ok::<(), gis_distance::DistanceError>(())
//! ```
//!
// Define the modules in this library
pub mod calculator;
pub mod coordinate;
pub mod error;
pub mod formula;
pub mod geodesy;
pub mod settings;

pub use calculator::DistanceCalculator;
pub use coordinate::{Coordinate, CoordinateRole};
pub use error::{DistanceError, Result};
pub use formula::Formula;
pub use settings::{DistanceSettings, DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM};

/// The version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of statute miles in one kilometer
pub const KM_TO_MILES: f64 = 0.621371192;

/// Converts a distance in kilometers, as returned by
/// [`DistanceCalculator::distance`], to statute miles.
pub fn to_miles(kilometers: f64) -> f64 {
    kilometers * KM_TO_MILES
}

/// Unit conversion for a kilometer distance. Only in scope where imported,
/// so `calc.distance()?.to_miles()` reads like the rest of the chain.
pub trait DistanceExt {
    fn to_miles(self) -> f64;
}

impl DistanceExt for f64 {
    fn to_miles(self) -> f64 {
        to_miles(self)
    }
}
