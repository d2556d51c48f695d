use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shopforge_core::CatalogError;
use shopforge_expeditions::ExpeditionError;

/// The one place error kinds are mapped to HTTP status codes.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::Validation {
            field,
            rejected,
            reason,
        } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "validation_error",
                "field": field,
                "rejected": rejected,
                "message": reason,
            })),
        )
            .into_response(),
        CatalogError::Conflict { field, value } => (
            StatusCode::CONFLICT,
            axum::Json(json!({
                "error": "conflict",
                "field": field,
                "value": value,
                "message": format!("{value:?} is already in use"),
            })),
        )
            .into_response(),
        CatalogError::InsufficientStock {
            item_id,
            requested,
            available,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "insufficient_stock",
                "item_id": item_id.to_string(),
                "requested": requested,
                "available": available,
            })),
        )
            .into_response(),
        CatalogError::NotFound { id } => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("item {id} not found"))
        }
        CatalogError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        CatalogError::Storage(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
    }
}

pub fn expedition_error_to_response(err: ExpeditionError) -> axum::response::Response {
    match err {
        ExpeditionError::Http(e) => {
            json_error(StatusCode::BAD_GATEWAY, "upstream_error", e.to_string())
        }
        ExpeditionError::MissingField { path } => json_error(
            StatusCode::BAD_GATEWAY,
            "malformed_upstream_data",
            format!("missing required field at {path}"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
