//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::trace::TraceLayer;

use crate::domain::ClockTime;
use crate::error::ScheduleError;
use crate::service::{render_departures, render_stations};
use crate::source::DocumentSource;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
///
/// The path layout matches what the watch app already requests:
/// `/p/{stn}/{direction}/{time}/` and `/p/list/{direction}/`.
pub fn create_router<S: DocumentSource>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/p/directions/", get(list_directions::<S>))
        .route("/p/list/:direction/", get(list_stations::<S>))
        .route("/p/:stn/:direction/:time/", get(grab_times::<S>))
        .route("/now/:stn/:direction/", get(grab_times_now::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request asks for JSON.
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

/// Configured direction names.
async fn list_directions<S: DocumentSource>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Response {
    let directions: Vec<String> = state
        .service
        .directions()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    if accepts_json(&headers) {
        Json(DirectionsResponse { directions }).into_response()
    } else {
        render_stations(&directions).into_response()
    }
}

/// Stations of a direction, in travel order.
async fn list_stations<S: DocumentSource>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Path(direction): Path<String>,
) -> Result<Response, AppError> {
    let stations = state.service.list_stations(&direction).await?;

    if accepts_json(&headers) {
        Ok(Json(StationsResponse { stations }).into_response())
    } else {
        Ok(render_stations(&stations).into_response())
    }
}

/// Next departures from a station after the client's wall-clock time.
///
/// The client sends its own time because its clock, not the server's,
/// decides which train it can still catch.
async fn grab_times<S: DocumentSource>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Path((stn, direction, time)): Path<(String, String, String)>,
    query: Result<Query<DeparturesQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let reference: ClockTime = time.parse().map_err(ScheduleError::from)?;
    departures(&state, &headers, &stn, &direction, reference, query).await
}

/// Next departures from a station after the server's local time.
async fn grab_times_now<S: DocumentSource>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Path((stn, direction)): Path<(String, String)>,
    query: Result<Query<DeparturesQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let reference = ClockTime::from(Local::now().time());
    departures(&state, &headers, &stn, &direction, reference, query).await
}

async fn departures<S: DocumentSource>(
    state: &AppState<S>,
    headers: &HeaderMap,
    station: &str,
    direction: &str,
    reference: ClockTime,
    query: DeparturesQuery,
) -> Result<Response, AppError> {
    let limit = query.limit.unwrap_or(state.default_limit);
    let departures = state
        .service
        .query_departures(direction, station, reference, limit)
        .await?;

    if accepts_json(headers) {
        Ok(Json(DeparturesResponse { departures }).into_response())
    } else {
        Ok(render_departures(&departures).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Directions;
    use crate::service::ScheduleService;
    use crate::source::MemorySource;
    use crate::timetable::fixtures::WEEKDAY_HTML;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let source = MemorySource::new().with_page("JSQ_33rd_Weekday", WEEKDAY_HTML);
        let service = ScheduleService::new(source, Directions::default());
        create_router(AppState::new(service, 2))
    }

    async fn call(uri: &str, accept: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        let response = app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(call("/health", None).await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn station_list() {
        let (status, body) = call("/p/list/jsq_33rd/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[JSQ,Grove St,Newport]");
    }

    #[tokio::test]
    async fn station_list_json() {
        let (status, body) = call("/p/list/jsq_33rd/", Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["stations"][1], "Grove St");
    }

    #[tokio::test]
    async fn direction_list() {
        let (status, body) = call("/p/directions/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[33rd_jsq,jsq_33rd]");
    }

    #[tokio::test]
    async fn departures_use_default_limit() {
        let (status, body) = call("/p/JSQ/jsq_33rd/6:00AM/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "6:00AM,0 mins left;7:30AM,90 mins left;");
    }

    #[tokio::test]
    async fn departures_with_limit_and_encoded_station() {
        let (status, body) = call("/p/Grove%20St/jsq_33rd/7:00AM/?limit=1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "7:33AM,33 mins left;");
    }

    #[tokio::test]
    async fn departures_json() {
        let (status, body) = call("/p/JSQ/jsq_33rd/11:45PM/", Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["departures"][0]["time"], "11:50PM");
        assert_eq!(json["departures"][0]["minutes_until"], 5);
        assert_eq!(json["departures"][1]["time"], "5:15AM");
        assert_eq!(json["departures"][1]["minutes_until"], 330);
    }

    #[tokio::test]
    async fn departures_now() {
        let (status, body) = call("/now/JSQ/jsq_33rd/?limit=1", None).await;
        // Depends on the wall clock: either the next train or none left today.
        match status {
            StatusCode::OK => assert!(body.ends_with(" mins left;")),
            StatusCode::NOT_FOUND => assert!(body.starts_with("error: ")),
            other => panic!("unexpected status {other}"),
        }
    }

    #[tokio::test]
    async fn unknown_direction() {
        let (status, body) = call("/p/list/hob_wtc/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "error: unable to find loc: \"hob_wtc\"");
    }

    #[tokio::test]
    async fn unknown_station() {
        let (status, body) = call("/p/Hoboken/jsq_33rd/6:00AM/", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "error: invalid stn: \"Hoboken\"");
    }

    #[tokio::test]
    async fn bad_time_token() {
        let (status, body) = call("/p/JSQ/jsq_33rd/6:00/", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("error: invalid 'time'"));
    }

    #[tokio::test]
    async fn bad_limit() {
        let (status, body) = call("/p/JSQ/jsq_33rd/6:00AM/?limit=21", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.starts_with("error: invalid limit"));
    }

    #[tokio::test]
    async fn unparsable_limit_keeps_error_prefix() {
        for uri in [
            "/p/JSQ/jsq_33rd/6:00AM/?limit=abc",
            "/p/JSQ/jsq_33rd/6:00AM/?limit=-1",
            "/now/JSQ/jsq_33rd/?limit=abc",
        ] {
            let (status, body) = call(uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body.starts_with("error: "), "{uri}: {body}");
        }
    }

    #[tokio::test]
    async fn missing_page_is_internal_error() {
        let (status, body) = call("/p/list/33rd_jsq/", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("error: failed to fetch memory:33rd_JSQ_Weekday"));
    }
}
