//! School records and their validated insert payload.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::Coordinate;
use crate::validate::{require_number, require_text};

/// A persisted school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "mysql", derive(sqlx::FromRow))]
pub struct School {
    /// Identifier assigned by the store.
    pub id: i64,
    /// School name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl School {
    /// Location of the school.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A school that passed boundary validation and has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewSchool {
    /// Create a payload from values the caller has already validated.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Validate raw textual input.
    ///
    /// Fields are checked in order (name, address, latitude, longitude) and
    /// the first failure is returned. Text is trimmed; coordinates must parse
    /// as finite numbers. Ranges are not checked here.
    ///
    /// # Examples
    ///
    /// ```
    /// use nearschool::NewSchool;
    ///
    /// let school = NewSchool::parse(Some("Lycée"), Some("Paris"), Some("48.85"), Some("2.35")).unwrap();
    /// assert_eq!(school.latitude, 48.85);
    ///
    /// assert!(NewSchool::parse(Some("Lycée"), Some("Paris"), Some("48.85"), None).is_err());
    /// ```
    pub fn parse(
        name: Option<&str>,
        address: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            name: require_text("name", name)?,
            address: require_text("address", address)?,
            latitude: require_number("latitude", latitude)?,
            longitude: require_number("longitude", longitude)?,
        })
    }

    /// Location of the school.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Attach a store-assigned id.
    pub fn into_school(self, id: i64) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A school annotated with its distance from a reference point.
///
/// Serializes flat: the school's fields followed by `distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    /// Great-circle distance in kilometres.
    pub distance: f64,
}
