//! Settings
//!
//! Adjustable configuration of a [`DistanceCalculator`](crate::DistanceCalculator)
//! and the bounds it is checked against.

// Internal imports
use crate::error::{DistanceError, Result};
use crate::formula::Formula;

/// Default radius of the Earth in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 6367.45;
/// Smallest accepted radius in kilometers, a little under the polar radius
pub const MIN_RADIUS_KM: f64 = 6357.0;
/// Largest accepted radius in kilometers, a little under the equatorial radius
pub const MAX_RADIUS_KM: f64 = 6378.0;

/// Calculator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistanceSettings {
    /// Radius of the Earth in kilometers. Only the spherical formulas use it.
    pub radius: f64,
    pub formula: Formula,
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS_KM,
            formula: Formula::default(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DistanceSettings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            radius: f64,
            formula: Formula,
        }
        let raw = Raw::deserialize(deserializer)?;
        let settings = DistanceSettings {
            radius: raw.radius,
            formula: raw.formula,
        };
        settings.validate().map_err(serde::de::Error::custom)?;
        Ok(settings)
    }
}

impl DistanceSettings {
    pub fn validate(&self) -> Result<()> {
        check_radius(self.radius)
    }
}

/// Fails with [`DistanceError::Range`] unless `radius` lies within
/// [`MIN_RADIUS_KM`, `MAX_RADIUS_KM`] inclusive. NaN is rejected.
pub fn check_radius(radius: f64) -> Result<()> {
    if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&radius) {
        return Err(DistanceError::Range {
            value: radius,
            min: MIN_RADIUS_KM,
            max: MAX_RADIUS_KM,
        });
    }
    Ok(())
}
