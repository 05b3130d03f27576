//! Great-circle distance on a spherical Earth.
//!
//! This module provides [`Coordinate`] and the haversine distance used to
//! rank schools. The model assumes a sphere of radius [`EARTH_RADIUS_KM`],
//! which is accurate enough for ordering results but not for survey-grade
//! geodesy.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchoolError};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Largest possible great-circle separation (half the circumference).
pub const MAX_DISTANCE_KM: f64 = std::f64::consts::PI * EARTH_RADIUS_KM;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, expected in [-90, 90].
    pub latitude: f64,
    /// Longitude, expected in [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate. No range check is performed.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are within their geographic ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use nearschool::Coordinate;
    ///
    /// assert!(Coordinate::new(51.5, -0.12).is_in_range());
    /// assert!(!Coordinate::new(91.0, 0.0).is_in_range());
    /// assert!(!Coordinate::new(0.0, -180.5).is_in_range());
    /// ```
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Return an error naming the first component outside its range.
    pub fn validate_range(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SchoolError::OutOfRange {
                field: "latitude",
                value: self.latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(SchoolError::OutOfRange {
                field: "longitude",
                value: self.longitude,
                min: -180.0,
                max: 180.0,
            });
        }
        Ok(())
    }
}

/// Great-circle distance in kilometres between two coordinates.
///
/// Uses the haversine formula. Identical points give `0.0`; antipodal points
/// give [`MAX_DISTANCE_KM`].
///
/// # Examples
///
/// ```
/// use nearschool::geo::haversine_km;
/// use nearschool::Coordinate;
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let quarter = Coordinate::new(0.0, 90.0);
/// assert!((haversine_km(origin, quarter) - 10007.543).abs() < 0.01);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    // Convert before subtracting: degree differences can overflow to infinity
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let d_lat = to_lat - from_lat;
    let d_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1.0 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
