use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::districts::DistrictService;
use crate::features::report_form::handlers::{self, ReportFormState};
use crate::features::report_form::services::{LocationService, SubmissionService};

/// Create routes for the report form feature
pub fn routes(
    districts: DistrictService,
    location_service: Arc<LocationService>,
    submission_service: Arc<SubmissionService>,
) -> Router {
    let state = ReportFormState {
        districts,
        location_service,
        submission_service,
    };

    Router::new()
        .route("/api/form", post(handlers::new_form))
        .route("/api/form/events", post(handlers::apply_event))
        .route("/api/form/validate", post(handlers::validate_form))
        .route("/api/form/locate", post(handlers::locate))
        .route("/api/form/submit", post(handlers::submit_form))
        .with_state(state)
}
