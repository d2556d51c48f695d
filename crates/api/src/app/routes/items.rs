use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use chrono::Utc;

use shopforge_catalog::CatalogItem;
use shopforge_core::ItemId;
use shopforge_store::ItemStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/search", get(search_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/stock", put(set_stock))
        .route("/:id/reserve", post(reserve_stock))
        .route("/:id/restock", post(restock))
}

fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>()
        .map_err(errors::catalog_error_to_response)
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let item = match CatalogItem::create(body.into_draft(), Utc::now()) {
        Ok(item) => item,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // The store owns SKU uniqueness among live items.
    let saved = match services.store.save(item) {
        Ok(item) => item,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    let location = format!("/items/{}", saved.id_typed());
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(dto::item_to_json(&saved)),
    )
        .into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match services.store.find_by_id(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = match services.store.list() {
        Ok(items) => items,
        Err(e) => return errors::catalog_error_to_response(e),
    };
    let total = items.len();
    let items: Vec<_> = items.iter().map(dto::item_to_json).collect();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": items, "total": total })),
    )
        .into_response()
}

pub async fn search_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::SearchQuery>,
) -> axum::response::Response {
    let items = match services.store.search_by_name(&query.name) {
        Ok(items) => items,
        Err(e) => return errors::catalog_error_to_response(e),
    };
    let total = items.len();
    let items: Vec<_> = items.iter().map(dto::item_to_json).collect();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "items": items, "total": total })),
    )
        .into_response()
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let current = match services.store.find_by_id(id) {
        Ok(item) => item,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // Fail closed: a store failure counts as "code in use" here, and `save`
    // re-checks uniqueness under the store lock anyway.
    let code_in_use =
        |sku: &shopforge_catalog::SkuCode| services.store.code_in_use_by_other(sku, id).unwrap_or(true);

    let updated = match current.apply_update(body.into_draft(), code_in_use, Utc::now()) {
        Ok(item) => item,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    match services.store.save(updated) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match services.store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn set_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetStockRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let result = services
        .store
        .mutate(id, &mut |item| item.with_stock(body.quantity, Utc::now()));
    match result {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn reserve_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let result = services
        .store
        .mutate(id, &mut |item| item.reserve(body.amount, Utc::now()));
    match result {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn restock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let result = services
        .store
        .mutate(id, &mut |item| item.restock(body.amount, Utc::now()));
    match result {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
