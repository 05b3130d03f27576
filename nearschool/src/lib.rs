//! # nearschool - Schools ranked by distance
//!
//! Library behind the nearschool HTTP service and CLI. It stores school
//! records (name, address, coordinates) and returns them ordered by
//! great-circle distance from a reference point.
//!
//! ## Features
//!
//! - **Ranking**: haversine distance on a spherical Earth, full scan and sort
//! - **Validation**: explicit parsing of untrusted input, no silent coercion
//! - **Stores**: in-memory store, plus MySQL via sqlx with the `mysql` feature
//! - **GeoJSON**: ranked results as a `FeatureCollection` with the `geojson` feature
//!
//! ## Quick Start
//!
//! ```
//! use nearschool::{rank_by_distance, Coordinate, NewSchool};
//!
//! let schools = vec![
//!     NewSchool::new("Paris School", "Paris", 48.8566, 2.3522).into_school(1),
//!     NewSchool::new("London School", "London", 51.5074, -0.1278).into_school(2),
//! ];
//!
//! let ranked = rank_by_distance(Coordinate::new(51.5, -0.12), schools);
//! assert_eq!(ranked[0].school.name, "London School");
//! assert!(ranked[1].distance > 340.0);
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod rank;
pub mod school;
pub mod store;
pub mod validate;

#[cfg(feature = "geojson")]
pub mod geojson;

// Re-export main types at crate root for convenience
pub use config::StoreConfig;
pub use error::{Result, SchoolError};
pub use geo::Coordinate;
pub use rank::rank_by_distance;
pub use school::{NewSchool, RankedSchool, School};
#[cfg(feature = "mysql")]
pub use store::MySqlSchoolStore;
pub use store::{MemorySchoolStore, SchoolStore};
