use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::map::handlers;
use crate::features::map::services::MapService;

/// Create routes for the map feature
pub fn routes(service: Arc<MapService>) -> Router {
    Router::new()
        .route("/api/map", get(handlers::get_map))
        .with_state(service)
}
