use axum::Router;

pub mod inventory;
pub mod sales;
pub mod sweets;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/sales", sales::router())
        .nest("/sweets", sweets::router())
}
