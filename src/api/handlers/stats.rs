use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info, warn};
use std::sync::Arc;

use super::AppState;
use crate::api::models::ErrorBody;
use crate::stats::{StatsError, StatsParams};

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    params: Result<Query<StatsParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(params)) => respond(state, params).await,
        Err(rejection) => malformed_query(rejection),
    }
}

/// Same as [`get_stats`], with the tour taken from the path.
pub async fn get_tour_stats(
    State(state): State<Arc<AppState>>,
    Path(tour): Path<String>,
    params: Result<Query<StatsParams>, QueryRejection>,
) -> Response {
    match params {
        Ok(Query(mut params)) => {
            params.tour = Some(tour);
            respond(state, params).await
        }
        Err(rejection) => malformed_query(rejection),
    }
}

async fn respond(state: Arc<AppState>, params: StatsParams) -> Response {
    let result = tokio::task::spawn_blocking(move || state.stats.get_stats(params)).await;

    match result {
        Ok(Ok(response)) => {
            info!("Served {} pbp stats rows", response.data.len());
            Json(response).into_response()
        }
        Ok(Err(e)) => error_response(e),
        Err(e) => {
            error!("Stats task panicked: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new("stats query failed")))
                .into_response()
        }
    }
}

/// Query strings that do not even deserialize (`pageSize=abc`) are rejected
/// with the same JSON body as any other invalid parameter.
fn malformed_query(rejection: QueryRejection) -> Response {
    let message = rejection.body_text();
    warn!("Rejected pbp stats request: {}", message);
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

fn error_response(e: StatsError) -> Response {
    let status = if e.is_rejection() {
        warn!("Rejected pbp stats request: {}", e);
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorBody::new(e.to_string()))).into_response()
}
