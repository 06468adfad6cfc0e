use axum::{routing::get, Router};

use crate::features::districts::handlers;
use crate::features::districts::services::DistrictService;

/// Create routes for the districts feature
pub fn routes(service: DistrictService) -> Router {
    Router::new()
        .route("/api/districts", get(handlers::list_districts))
        .route(
            "/api/districts/{district}/divisions",
            get(handlers::list_divisions),
        )
        .with_state(service)
}
