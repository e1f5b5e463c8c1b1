use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use sweetshop_core::DomainError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/add", post(add_sweet))
        .route("/sell", post(sell_sweet))
}

pub async fn add_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddSweetRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let req = match dto::AddSweet::try_from(body) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(DomainError::from(e)),
    };

    match services.add_sweet(&req.name, req.quantity, req.price) {
        Ok(_) => (StatusCode::OK, Json(dto::success("Sweet added successfully"))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn sell_sweet(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SellSweetRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let req = match dto::SellSweet::try_from(body) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(DomainError::from(e)),
    };

    match services.sell_sweet(&req.name, req.quantity) {
        Ok(_) => (StatusCode::OK, Json(dto::success("Sweet sold successfully"))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
