//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::clusters::StopClusters;
use crate::config::ServerConfig;
use crate::diagram::DiagramLayout;
use crate::domain::{StationId, Trip};
use crate::layout::LayoutError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/layout", post(layout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute station order and positions for a set of trips.
async fn layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    let (trips, clusters) = parse_request(req, &state.config)?;
    debug!(
        trips = trips.len(),
        clusters = clusters.len(),
        "layout requested"
    );

    let layout = tokio::task::spawn_blocking(move || DiagramLayout::compute(&trips, &clusters))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("layout task failed: {e}"),
        })??;

    Ok(Json(LayoutResponse::from_layout(&layout)))
}

/// Validate a request and convert it to domain types.
fn parse_request(
    req: LayoutRequest,
    config: &ServerConfig,
) -> Result<(Vec<Trip>, StopClusters), AppError> {
    if req.trips.len() > config.max_trips {
        return Err(AppError::BadRequest {
            message: format!(
                "too many trips: {} (at most {})",
                req.trips.len(),
                config.max_trips
            ),
        });
    }

    let mut trips = Vec::with_capacity(req.trips.len());
    for (idx, trip) in req.trips.into_iter().enumerate() {
        let name = trip.id.unwrap_or_else(|| format!("#{idx}"));

        if trip.stops.len() > config.max_stops_per_trip {
            return Err(AppError::BadRequest {
                message: format!(
                    "trip {name} has too many stops: {} (at most {})",
                    trip.stops.len(),
                    config.max_stops_per_trip
                ),
            });
        }

        let context = format!("trip {name}");
        let stops = trip
            .stops
            .iter()
            .map(|s| parse_station(s, &context))
            .collect::<Result<Vec<_>, _>>()?;
        trips.push(Trip::new(stops));
    }

    let mut clusters = StopClusters::new();
    for cluster in req.clusters {
        let key = parse_station(&cluster.key, "cluster key")?;
        let context = format!("cluster {key}");
        let members = cluster
            .members
            .iter()
            .map(|s| parse_station(s, &context))
            .collect::<Result<Vec<_>, _>>()?;
        clusters.insert(key, members);
    }

    Ok((trips, clusters))
}

fn parse_station(s: &str, context: &str) -> Result<StationId, AppError> {
    StationId::parse(s).map_err(|e| AppError::BadRequest {
        message: format!("{context}: {e}: {s:?}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<LayoutError> for AppError {
    fn from(e: LayoutError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(ServerConfig::default())
    }

    fn request(json: serde_json::Value) -> Json<LayoutRequest> {
        Json(serde_json::from_value(json).unwrap())
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn layout_orders_and_positions_stops() {
        let req = request(serde_json::json!({
            "trips": [
                {"id": "up", "stops": ["A", "B", "C"]},
                {"id": "up2", "stops": ["A", "B", "C"]},
                {"id": "down", "stops": ["C", "B", "A"]}
            ]
        }));

        let Json(response) = layout(State(state()), req).await.unwrap();
        assert_eq!(response.order, vec!["A", "B", "C"]);
        assert_eq!(response.segments, 3);
        assert!(response.flipped_edges.is_empty());

        let xs: Vec<(&str, f64)> = response
            .positions
            .iter()
            .map(|p| (p.station.as_str(), p.x))
            .collect();
        assert_eq!(xs, vec![("A", 0.0), ("B", 1.0), ("C", 2.0)]);
    }

    #[tokio::test]
    async fn layout_applies_clusters() {
        let req = request(serde_json::json!({
            "trips": [{"stops": ["A", "p1", "C"]}, {"stops": ["A", "p2", "C"]}],
            "clusters": [{"key": "hub", "members": ["p1", "p2"]}]
        }));

        let Json(response) = layout(State(state()), req).await.unwrap();
        assert_eq!(response.order, vec!["A", "hub", "C"]);
        let stations: Vec<&str> = response
            .positions
            .iter()
            .map(|p| p.station.as_str())
            .collect();
        assert_eq!(stations, vec!["A", "p1", "p2", "C"]);
    }

    #[tokio::test]
    async fn empty_layout_is_ok() {
        let req = request(serde_json::json!({"trips": []}));
        let Json(response) = layout(State(state()), req).await.unwrap();
        assert!(response.order.is_empty());
        assert!(response.positions.is_empty());
    }

    #[tokio::test]
    async fn too_many_trips_rejected() {
        let state = AppState::new(ServerConfig {
            max_trips: 1,
            ..ServerConfig::default()
        });
        let req = request(serde_json::json!({
            "trips": [{"stops": ["A", "B"]}, {"stops": ["B", "C"]}]
        }));

        let err = layout(State(state), req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn too_many_stops_rejected() {
        let state = AppState::new(ServerConfig {
            max_stops_per_trip: 2,
            ..ServerConfig::default()
        });
        let req = request(serde_json::json!({
            "trips": [{"id": "long", "stops": ["A", "B", "C"]}]
        }));

        let err = layout(State(state), req).await.unwrap_err();
        match err {
            AppError::BadRequest { message } => assert!(message.contains("trip long")),
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_station_rejected() {
        let req = request(serde_json::json!({"trips": [{"stops": ["A", ""]}]}));

        let err = layout(State(state()), req).await.unwrap_err();
        match err {
            AppError::BadRequest { message } => {
                assert_eq!(message, "trip #0: invalid station id: must not be empty: \"\"")
            }
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_cluster_key_rejected() {
        let req = request(serde_json::json!({
            "trips": [],
            "clusters": [{"key": " hub", "members": []}]
        }));

        let err = layout(State(state()), req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn layout_error_is_internal() {
        let err = AppError::from(LayoutError::CyclicPlacement {
            placed: 1,
            total: 2,
        });
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
