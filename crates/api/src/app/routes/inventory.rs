use std::sync::Arc;

use axum::{extract::Extension, routing::get, Json, Router};

use sweetshop_ledger::InventorySnapshot;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_inventory))
}

/// Name -> `{quantity, price}` for every sweet ever stocked.
pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> Json<InventorySnapshot> {
    Json(services.inventory())
}
