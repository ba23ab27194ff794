//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::timetable::Departure;

/// Query string accepted by the departure endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DeparturesQuery {
    /// Number of departures to return (1-20)
    pub limit: Option<usize>,
}

/// JSON form of a departure list.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<Departure>,
}

/// JSON form of a station list.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// JSON form of the configured directions.
#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    pub directions: Vec<String>,
}
