//! Distance calculator
//!
//! Holds a fixed pair of points plus the adjustable radius and formula, and
//! memoizes the computed distance for each (formula, radius) combination.

// External imports
use std::collections::BTreeMap;
use tracing::debug;

// Internal imports
use crate::coordinate::{validate_pair, Coordinate};
use crate::error::Result;
use crate::formula::Formula;
use crate::geodesy;
use crate::settings::{check_radius, DistanceSettings};

/// Cache key. The radius is stored by its bit pattern so the key is `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CacheKey {
    formula: Formula,
    radius_bits: u64,
}

impl CacheKey {
    fn new(formula: Formula, radius: f64) -> Self {
        Self {
            formula,
            radius_bits: radius.to_bits(),
        }
    }
}

/// Computes the distance between two points given at construction.
///
/// The calculator is meant for a single owner. The mutators and
/// [`distance`](Self::distance) take `&mut self`; wrap it in a `Mutex` to
/// share it across threads.
#[derive(Debug, Clone)]
pub struct DistanceCalculator {
    start: Coordinate,
    end: Coordinate,
    settings: DistanceSettings,
    cache: BTreeMap<CacheKey, f64>,
}

impl DistanceCalculator {
    /// Validates both points and creates a calculator with the default
    /// radius and formula.
    pub fn new(
        lat1: impl Into<f64>,
        lon1: impl Into<f64>,
        lat2: impl Into<f64>,
        lon2: impl Into<f64>,
    ) -> Result<Self> {
        Self::with_settings(lat1, lon1, lat2, lon2, DistanceSettings::default())
    }

    pub fn with_settings(
        lat1: impl Into<f64>,
        lon1: impl Into<f64>,
        lat2: impl Into<f64>,
        lon2: impl Into<f64>,
        settings: DistanceSettings,
    ) -> Result<Self> {
        let (start, end) = validate_pair(lat1.into(), lon1.into(), lat2.into(), lon2.into())?;
        settings.validate()?;
        Ok(Self {
            start,
            end,
            settings,
            cache: BTreeMap::new(),
        })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn settings(&self) -> DistanceSettings {
        self.settings
    }

    /// Radius of the Earth in kilometers
    pub fn radius(&self) -> f64 {
        self.settings.radius
    }

    /// Sets the radius of the Earth in kilometers. The Earth is not a perfect
    /// sphere, so this may be tuned between the polar and equatorial radii.
    ///
    /// On failure the previous radius is kept.
    pub fn set_radius(&mut self, radius: impl Into<f64>) -> Result<()> {
        let radius = radius.into();
        check_radius(radius)?;
        if radius != self.settings.radius {
            debug!(old = self.settings.radius, new = radius, "Radius changed");
            self.settings.radius = radius;
            self.invalidate();
        }
        Ok(())
    }

    pub fn formula(&self) -> Formula {
        self.settings.formula
    }

    /// Selects the formula by name, case-insensitively. See
    /// [`Formula::SUPPORTED`].
    ///
    /// On failure the previous formula is kept.
    pub fn set_formula(&mut self, formula: impl AsRef<str>) -> Result<()> {
        let formula = formula.as_ref().parse::<Formula>()?;
        self.set_formula_kind(formula);
        Ok(())
    }

    pub fn set_formula_kind(&mut self, formula: Formula) {
        if formula != self.settings.formula {
            debug!(old = %self.settings.formula, new = %formula, "Formula changed");
            self.settings.formula = formula;
            self.invalidate();
        }
    }

    /// Distance between the two points in kilometers, using the current
    /// formula and radius.
    ///
    /// [`Formula::Vincenty`] always uses the WGS-84 ellipsoid and ignores the
    /// configured radius.
    pub fn distance(&mut self) -> Result<f64> {
        let key = CacheKey::new(self.settings.formula, self.settings.radius);
        if let Some(&distance) = self.cache.get(&key) {
            return Ok(distance);
        }

        debug!(
            formula = %self.settings.formula,
            radius = self.settings.radius,
            "Computing distance"
        );
        let distance = match self.settings.formula {
            Formula::Haversine => geodesy::haversine(self.settings.radius, &self.start, &self.end),
            Formula::LawOfCosines => {
                geodesy::law_of_cosines(self.settings.radius, &self.start, &self.end)
            }
            Formula::Vincenty => geodesy::vincenty(&self.start, &self.end)?,
        };
        self.cache.insert(key, distance);
        Ok(distance)
    }

    /// Number of memoized results
    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn invalidate(&mut self) {
        if !self.cache.is_empty() {
            debug!(entries = self.cache.len(), "Clearing distance cache");
            self.cache.clear();
        }
    }
}
