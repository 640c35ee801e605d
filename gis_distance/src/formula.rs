//! Formula selection
//!
//! The set of supported distance formulas, and parsing of their string
//! identifiers.

// External imports
use std::fmt;
use std::str::FromStr;

// Internal imports
use crate::error::DistanceError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Formula {
    /// Great-circle distance on a sphere using half-angle sines.
    #[default]
    Haversine,
    /// Great-circle distance via the spherical law of cosines. Loses
    /// precision for points very close together.
    LawOfCosines,
    /// Geodesic distance on the WGS-84 ellipsoid. Ignores the configured
    /// radius.
    Vincenty,
}

impl Formula {
    /// Identifiers accepted by [`Formula::from_str`], lowercase.
    pub const SUPPORTED: [&'static str; 3] = ["haversine", "cosines", "vincenty"];

    pub const ALL: [Formula; 3] = [Formula::Haversine, Formula::LawOfCosines, Formula::Vincenty];

    /// Canonical identifier for this formula
    pub fn as_str(&self) -> &'static str {
        match self {
            Formula::Haversine => "haversine",
            Formula::LawOfCosines => "cosines",
            Formula::Vincenty => "vincenty",
        }
    }

    /// True if the result depends on the calculator's radius. Callers can use
    /// this to skip radius tuning when it would have no effect.
    pub fn uses_radius(&self) -> bool {
        match self {
            Formula::Haversine | Formula::LawOfCosines => true,
            Formula::Vincenty => false,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Formula {
    type Err = DistanceError;

    /// Matches case-insensitively against [`Formula::SUPPORTED`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "haversine" => Ok(Formula::Haversine),
            "cosines" => Ok(Formula::LawOfCosines),
            "vincenty" => Ok(Formula::Vincenty),
            _ => Err(DistanceError::UnsupportedFormula {
                formula: s.to_string(),
                supported: Formula::SUPPORTED.to_vec(),
            }),
        }
    }
}

impl TryFrom<String> for Formula {
    type Error = DistanceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Formula> for &'static str {
    fn from(formula: Formula) -> Self {
        formula.as_str()
    }
}
