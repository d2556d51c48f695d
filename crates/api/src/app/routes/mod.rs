use axum::Router;

pub mod expeditions;
pub mod items;
pub mod system;

/// Router for all application endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/expeditions", expeditions::router())
}
