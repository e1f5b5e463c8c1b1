use std::sync::Arc;

use axum::{extract::Extension, routing::get, Json, Router};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_sales))
}

pub async fn get_sales(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    Json(dto::sales_report_to_json(services.sales_report()))
}
