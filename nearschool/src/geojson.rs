//! GeoJSON export of ranked schools.
//!
//! Enable the `geojson` feature to use this module.
//!
//! # Example
//!
//! ```ignore
//! use nearschool::{rank_by_distance, Coordinate};
//! use nearschool::geojson::ranked_to_feature_collection;
//!
//! let ranked = rank_by_distance(Coordinate::new(51.5, -0.12), schools);
//! let collection = ranked_to_feature_collection(&ranked);
//! println!("{}", collection);
//! ```

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value as GeoJsonValue};

use crate::school::RankedSchool;

/// Convert a ranking into a `FeatureCollection` of points.
///
/// Features keep the ranking order. Each point uses GeoJSON axis order
/// `[longitude, latitude]` and carries `rank` (1-based), `id`, `name`,
/// `address` and `distance` (km) as properties.
pub fn ranked_to_feature_collection(ranked: &[RankedSchool]) -> FeatureCollection {
    let features = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| ranked_to_feature(i + 1, r))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn ranked_to_feature(rank: usize, ranked: &RankedSchool) -> Feature {
    let school = &ranked.school;

    let mut properties = JsonObject::new();
    properties.insert("rank".to_string(), JsonValue::from(rank));
    properties.insert("id".to_string(), JsonValue::from(school.id));
    properties.insert("name".to_string(), JsonValue::from(school.name.clone()));
    properties.insert(
        "address".to_string(),
        JsonValue::from(school.address.clone()),
    );
    properties.insert("distance".to_string(), JsonValue::from(ranked.distance));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(GeoJsonValue::Point(vec![
            school.longitude,
            school.latitude,
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
