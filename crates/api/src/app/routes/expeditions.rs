use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use shopforge_expeditions::{astronaut_assignments, crew_count_by_station};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/assignments", get(assignments))
        .route("/crew-counts", get(crew_counts))
}

pub async fn assignments(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let expeditions = match services.expeditions.active_expeditions().await {
        Ok(expeditions) => expeditions,
        Err(e) => return errors::expedition_error_to_response(e),
    };

    match astronaut_assignments(&expeditions) {
        Ok(assignments) => {
            let total = assignments.len();
            (
                StatusCode::OK,
                Json(serde_json::json!({ "assignments": assignments, "total": total })),
            )
                .into_response()
        }
        Err(e) => errors::expedition_error_to_response(e),
    }
}

pub async fn crew_counts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let expeditions = match services.expeditions.active_expeditions().await {
        Ok(expeditions) => expeditions,
        Err(e) => return errors::expedition_error_to_response(e),
    };

    match crew_count_by_station(&expeditions) {
        Ok(counts) => (
            StatusCode::OK,
            Json(serde_json::json!({ "crew_counts": counts })),
        )
            .into_response(),
        Err(e) => errors::expedition_error_to_response(e),
    }
}
