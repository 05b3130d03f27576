//! HTTP request handlers for the school service.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use nearschool::geojson::ranked_to_feature_collection;
use nearschool::validate::{check_range, require_finite, require_number, require_text};
use nearschool::{rank_by_distance, Coordinate, NewSchool, RankedSchool, SchoolError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::AppState;

/// A coordinate as sent by clients: a JSON number or a numeric string.
///
/// Any other JSON value lands in `Other` and fails validation as not numeric.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberOrText {
    fn parse(&self, field: &'static str) -> nearschool::Result<f64> {
        match self {
            NumberOrText::Number(n) => require_finite(field, *n),
            NumberOrText::Text(s) => require_number(field, Some(s.as_str())),
            NumberOrText::Other(value) => Err(SchoolError::NotNumeric {
                field,
                value: value.to_string(),
            }),
        }
    }
}

/// Request body for creating a school.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddSchoolRequest {
    /// School name (non-empty).
    pub name: Option<String>,
    /// Postal address (non-empty).
    pub address: Option<String>,
    /// Latitude in decimal degrees, as a number or numeric string.
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<NumberOrText>,
    /// Longitude in decimal degrees, as a number or numeric string.
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<NumberOrText>,
}

impl AddSchoolRequest {
    /// Turn the raw body into a validated [`NewSchool`].
    pub fn validate(&self, strict_coordinates: bool) -> nearschool::Result<NewSchool> {
        let name = require_text("name", self.name.as_deref())?;
        let address = require_text("address", self.address.as_deref())?;
        let latitude = coordinate_field("latitude", self.latitude.as_ref())?;
        let longitude = coordinate_field("longitude", self.longitude.as_ref())?;

        let school = NewSchool::new(name, address, latitude, longitude);
        check_range(school.coordinate(), strict_coordinates)?;
        Ok(school)
    }
}

fn coordinate_field(field: &'static str, value: Option<&NumberOrText>) -> nearschool::Result<f64> {
    value
        .ok_or(SchoolError::MissingField { field })?
        .parse(field)
}

/// Successful create response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddSchoolResponse {
    /// Confirmation message.
    pub message: String,
    /// Identifier assigned by the store.
    pub id: i64,
}

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    /// Reference latitude in decimal degrees.
    #[param(value_type = f64)]
    pub latitude: Option<String>,
    /// Reference longitude in decimal degrees.
    #[param(value_type = f64)]
    pub longitude: Option<String>,
    /// Response format: `json` (default) or `geojson`.
    pub format: Option<String>,
}

/// Output format for the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Json,
    GeoJson,
}

impl ListSchoolsQuery {
    /// Parse the reference point.
    pub fn reference(&self, strict_coordinates: bool) -> nearschool::Result<Coordinate> {
        let latitude = require_number("latitude", self.latitude.as_deref())?;
        let longitude = require_number("longitude", self.longitude.as_deref())?;
        check_range(Coordinate::new(latitude, longitude), strict_coordinates)
    }

    /// Parse the requested output format.
    pub fn output_format(&self) -> Result<ListFormat, String> {
        match self.format.as_deref().map(str::trim) {
            None | Some("") => Ok(ListFormat::Json),
            Some(f) if f.eq_ignore_ascii_case("json") => Ok(ListFormat::Json),
            Some(f) if f.eq_ignore_ascii_case("geojson") => Ok(ListFormat::GeoJson),
            Some(f) => Err(format!(
                "Unsupported format: {:?} (expected \"json\" or \"geojson\")",
                f
            )),
        }
    }
}

/// A school with its distance from the reference point.
#[derive(Debug, Serialize, ToSchema)]
pub struct RankedSchoolResponse {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance in kilometres.
    pub distance: f64,
}

impl From<RankedSchool> for RankedSchoolResponse {
    fn from(ranked: RankedSchool) -> Self {
        let RankedSchool { school, distance } = ranked;
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            latitude: school.latitude,
            longitude: school.longitude,
            distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Create a school.
///
/// # Returns
///
/// - `201 Created` with the new identifier
/// - `400 Bad Request` if a field is missing, blank or not numeric
/// - `500 Internal Server Error` if the store rejects the write
#[utoipa::path(
    post,
    path = "/addSchool",
    tag = "schools",
    request_body = AddSchoolRequest,
    responses(
        (status = 201, description = "School stored", body = AddSchoolResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn add_school(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddSchoolRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddSchoolResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let school = request
        .validate(state.strict_coordinates)
        .map_err(ApiError::from)?;

    let id = state
        .store
        .insert(&school)
        .await
        .map_err(|e| ApiError::store("Database insertion error", e))?;

    tracing::info!(school_id = id, name = %school.name, "School added");

    Ok((
        StatusCode::CREATED,
        Json(AddSchoolResponse {
            message: "School added successfully!".to_string(),
            id,
        }),
    ))
}

/// List every school ordered by distance from a reference point.
///
/// # Query Parameters
///
/// - `latitude`: Reference latitude in decimal degrees
/// - `longitude`: Reference longitude in decimal degrees
/// - `format`: Optional `json` (default) or `geojson`
///
/// # Returns
///
/// - `200 OK` with every school, nearest first
/// - `400 Bad Request` if the reference point is missing or not numeric
/// - `500 Internal Server Error` if the store cannot be read
#[utoipa::path(
    get,
    path = "/listSchools",
    tag = "schools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "Schools ordered by ascending distance", body = Vec<RankedSchoolResponse>),
        (status = 400, description = "Invalid reference point", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListSchoolsQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let reference = query
        .reference(state.strict_coordinates)
        .map_err(ApiError::from)?;
    let format = query.output_format().map_err(ApiError::BadRequest)?;

    tracing::debug!(
        lat = reference.latitude,
        lon = reference.longitude,
        ?format,
        "List schools query"
    );

    let schools = state
        .store
        .list_all()
        .await
        .map_err(|e| ApiError::store("Internal server error", e))?;

    let ranked = rank_by_distance(reference, schools);
    tracing::debug!(count = ranked.len(), "Schools ranked");

    let response = match format {
        ListFormat::Json => {
            let body: Vec<RankedSchoolResponse> =
                ranked.into_iter().map(RankedSchoolResponse::from).collect();
            Json(body).into_response()
        }
        ListFormat::GeoJson => (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/geo+json"),
            )],
            Json(ranked_to_feature_collection(&ranked)),
        )
            .into_response(),
    };

    Ok(response)
}

/// Plain-text liveness probe.
pub async fn home() -> &'static str {
    "Home route working fine"
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_accepts_numbers_and_strings() {
        let json = r#"{"name": "Oak", "address": "1 Road", "latitude": 12.5, "longitude": "-7.25"}"#;
        let request: AddSchoolRequest = serde_json::from_str(json).unwrap();
        let school = request.validate(false).unwrap();
        assert_eq!(school.latitude, 12.5);
        assert_eq!(school.longitude, -7.25);
    }

    #[test]
    fn test_add_request_missing_longitude() {
        let json = r#"{"name": "Oak", "address": "1 Road", "latitude": 12.5}"#;
        let request: AddSchoolRequest = serde_json::from_str(json).unwrap();
        let err = request.validate(false).unwrap_err();
        assert!(matches!(err, SchoolError::MissingField { field: "longitude" }));
    }

    #[test]
    fn test_add_request_null_is_missing() {
        let json = r#"{"name": "Oak", "address": "1 Road", "latitude": null, "longitude": 1}"#;
        let request: AddSchoolRequest = serde_json::from_str(json).unwrap();
        let err = request.validate(false).unwrap_err();
        assert!(matches!(err, SchoolError::MissingField { field: "latitude" }));
    }

    #[test]
    fn test_add_request_strict_range() {
        let json = r#"{"name": "Oak", "address": "1 Road", "latitude": 95, "longitude": 1}"#;
        let request: AddSchoolRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate(false).is_ok());
        assert!(matches!(
            request.validate(true),
            Err(SchoolError::OutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn test_add_request_non_numeric_json_names_field() {
        for raw in ["true", "[1, 2]", "{\"deg\": 1}"] {
            let json = format!(
                r#"{{"name": "Oak", "address": "1 Road", "latitude": {}, "longitude": 1}}"#,
                raw
            );
            let request: AddSchoolRequest = serde_json::from_str(&json).unwrap();
            let err = request.validate(false).unwrap_err();
            assert!(matches!(err, SchoolError::NotNumeric { field: "latitude", .. }), "{}", raw);
        }
    }

    #[test]
    fn test_list_query_format() {
        let query = ListSchoolsQuery {
            latitude: Some("1".to_string()),
            longitude: Some("2".to_string()),
            format: None,
        };
        assert_eq!(query.output_format().unwrap(), ListFormat::Json);

        let query = ListSchoolsQuery {
            format: Some("GeoJSON".to_string()),
            ..query
        };
        assert_eq!(query.output_format().unwrap(), ListFormat::GeoJson);

        let query = ListSchoolsQuery {
            format: Some("xml".to_string()),
            ..query
        };
        assert!(query.output_format().is_err());
    }

    #[test]
    fn test_ranked_response_serialize() {
        let ranked = RankedSchool {
            school: NewSchool::new("Oak", "1 Road", 1.0, 2.0).into_school(3),
            distance: 4.5,
        };
        let json = serde_json::to_string(&RankedSchoolResponse::from(ranked)).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"distance\":4.5"));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }
}
