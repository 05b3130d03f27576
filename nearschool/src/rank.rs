//! Proximity ranking.

use crate::geo::{haversine_km, Coordinate};
use crate::school::{RankedSchool, School};

/// Annotate every school with its distance from `reference` and sort
/// ascending by that distance.
///
/// The output contains each input school exactly once. Equal distances keep
/// their input order, though callers should not depend on it. Non-finite
/// coordinates never panic but produce an unspecified order.
///
/// # Examples
///
/// ```
/// use nearschool::{rank_by_distance, Coordinate, NewSchool};
///
/// let schools = vec![
///     NewSchool::new("Far", "x", 0.0, 90.0).into_school(1),
///     NewSchool::new("Near", "y", 0.0, 0.0).into_school(2),
/// ];
/// let ranked = rank_by_distance(Coordinate::new(0.0, 0.0), schools);
/// assert_eq!(ranked[0].school.name, "Near");
/// assert_eq!(ranked[0].distance, 0.0);
/// ```
pub fn rank_by_distance(reference: Coordinate, schools: Vec<School>) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .into_iter()
        .map(|school| {
            let distance = haversine_km(reference, school.coordinate());
            RankedSchool { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
