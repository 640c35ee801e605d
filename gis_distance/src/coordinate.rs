//! Coordinates
//!
//! A validated latitude/longitude pair in degrees, and the checks applied to
//! raw values before a [`Coordinate`] is built.

// External imports
use std::fmt;

// Internal imports
use crate::error::{DistanceError, Result};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Which half of a coordinate a value was supplied for. Used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRole {
    Latitude,
    Longitude,
}

impl fmt::Display for CoordinateRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoordinateRole::Latitude => write!(f, "Latitude"),
            CoordinateRole::Longitude => write!(f, "Longitude"),
        }
    }
}

/// A point on the Earth's surface, in degrees.
///
/// Latitude is within [-90, 90] and longitude within [-180, 180], both
/// inclusive. There is no way to change either after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: impl Into<f64>, longitude: impl Into<f64>) -> Result<Self> {
        let latitude = latitude.into();
        let longitude = longitude.into();
        check_finite(CoordinateRole::Latitude, latitude)?;
        check_finite(CoordinateRole::Longitude, longitude)?;
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude and longitude converted to radians, in that order.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

/// Validates the four raw values for a pair of points and builds the two
/// coordinates.
///
/// Checks run in a fixed order and the first failure is reported:
/// 1. every value is finite (lat1, lon1, lat2, lon2)
/// 2. both latitudes are in range (lat1, lat2)
/// 3. both longitudes are in range (lon1, lon2)
pub fn validate_pair(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<(Coordinate, Coordinate)> {
    check_finite(CoordinateRole::Latitude, lat1)?;
    check_finite(CoordinateRole::Longitude, lon1)?;
    check_finite(CoordinateRole::Latitude, lat2)?;
    check_finite(CoordinateRole::Longitude, lon2)?;

    for lat in [lat1, lat2] {
        check_latitude(lat)?;
    }
    for lon in [lon1, lon2] {
        check_longitude(lon)?;
    }

    Ok((
        Coordinate {
            latitude: lat1,
            longitude: lon1,
        },
        Coordinate {
            latitude: lat2,
            longitude: lon2,
        },
    ))
}

fn check_finite(role: CoordinateRole, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(DistanceError::Validation {
            role,
            value,
            reason: "is not a finite number".to_string(),
        });
    }
    Ok(())
}

fn check_latitude(lat: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        return Err(DistanceError::Validation {
            role: CoordinateRole::Latitude,
            value: lat,
            reason: format!("is invalid - must be between {MIN_LATITUDE} and {MAX_LATITUDE}"),
        });
    }
    Ok(())
}

fn check_longitude(lon: f64) -> Result<()> {
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        return Err(DistanceError::Validation {
            role: CoordinateRole::Longitude,
            value: lon,
            reason: format!("is invalid - must be between {MIN_LONGITUDE} and {MAX_LONGITUDE}"),
        });
    }
    Ok(())
}
