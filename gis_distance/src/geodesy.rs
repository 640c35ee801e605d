//! Distance formulas
//!
//! Pure functions computing the distance between two [`Coordinate`]s. The
//! spherical formulas scale with the radius they are given. Vincenty works on
//! the fixed WGS-84 ellipsoid and takes no radius at all.

// External imports
use tracing::{trace, warn};

// Internal imports
use crate::coordinate::Coordinate;
use crate::error::{DistanceError, Result};

/// WGS-84 reference ellipsoid
pub struct Wgs84;

impl Wgs84 {
    /// Semi-major axis (equatorial radius) in meters
    pub const A: f64 = 6378137.0;
    /// Flattening
    pub const F: f64 = 1.0 / 298.257223563;
    /// Semi-minor axis (polar radius) in meters
    pub const B: f64 = (1.0 - Self::F) * Self::A;
}

/// Stop iterating once lambda moves by no more than this, in radians.
pub const VINCENTY_TOLERANCE: f64 = 1e-12;
pub const VINCENTY_MAX_ITERATIONS: u32 = 100;

/// Compute the haversine distance between two points on a sphere with the
/// given radius. Result is in the same unit as `radius`.
///
/// See https://en.wikipedia.org/wiki/Haversine_formula
///
/// hav(theta) = (sin(theta / 2)) ^ 2
/// a = hav(lat2 - lat1) + cos(lat1) * cos(lat2) * hav(lon2 - lon1)
/// c = 2 * atan2(sqrt(a), sqrt(1 - a))
/// d = r * c
///
/// Identical points give a = 0 and so exactly 0.0.
pub fn haversine(radius: f64, from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    haversine_rads(radius, lat1, lon1, lat2, lon2)
}

fn haversine_rads(radius: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push a a hair past 1 for antipodal points
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius * c
}

/// Compute the great-circle distance using the spherical law of cosines.
///
/// central_angle = acos(sin(lat1) * sin(lat2) + cos(lat1) * cos(lat2) * cos(lon2 - lon1))
/// d = r * central_angle
///
/// acos is badly conditioned near 1.0, so distances under a few meters come
/// out noticeably wrong. Prefer haversine or Vincenty at short range.
pub fn law_of_cosines(radius: f64, from: &Coordinate, to: &Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon2 - lon1).cos();
    // Keep acos in its domain when rounding overshoots
    let central_angle = cos_angle.clamp(-1.0, 1.0).acos();
    radius * central_angle
}

/// Compute the geodesic distance in kilometers on the WGS-84 ellipsoid using
/// Vincenty's inverse formula.
///
/// See https://en.wikipedia.org/wiki/Vincenty%27s_formulae
///
/// Lambda (the longitude difference on the auxiliary sphere) is refined
/// until it changes by at most [`VINCENTY_TOLERANCE`]. Nearly antipodal
/// points may never settle, in which case [`DistanceError::Convergence`] is
/// returned after [`VINCENTY_MAX_ITERATIONS`] rounds.
pub fn vincenty(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    let (a, b, f) = (Wgs84::A, Wgs84::B, Wgs84::F);
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let l = lon2 - lon1;
    // Reduced latitudes
    let u1 = ((1.0 - f) * lat1.tan()).atan();
    let u2 = ((1.0 - f) * lat2.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut iterations = 0;
    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        if iterations == VINCENTY_MAX_ITERATIONS {
            warn!(%from, %to, iterations, "Vincenty iteration did not converge");
            return Err(DistanceError::Convergence { iterations });
        }
        iterations += 1;

        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Coincident points
            return Ok(0.0);
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha.powi(2);
        // Both points on the equator make cos_sq_alpha zero
        let cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if (lambda - lambda_prev).abs() <= VINCENTY_TOLERANCE {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha, cos_2sigma_m);
        }
    };
    trace!(iterations, "Vincenty iteration converged");

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma.powi(2))
                        * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));

    let meters = b * big_a * (sigma - delta_sigma);
    Ok(meters / 1000.0)
}
