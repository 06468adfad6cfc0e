use utoipa::{Modify, OpenApi};

use crate::features::districts::{dtos as districts_dtos, handlers as districts_handlers};
use crate::features::map::{dtos as map_dtos, handlers as map_handlers, models as map_models};
use crate::features::report_form::{
    dtos as report_form_dtos, handlers as report_form_handlers, models as report_form_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Districts
        districts_handlers::list_districts,
        districts_handlers::list_divisions,
        // Report form
        report_form_handlers::new_form,
        report_form_handlers::apply_event,
        report_form_handlers::validate_form,
        report_form_handlers::locate,
        report_form_handlers::submit_form,
        // Map
        map_handlers::get_map,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Districts
            districts_dtos::DistrictResponseDto,
            districts_dtos::DivisionListResponseDto,
            ApiResponse<Vec<districts_dtos::DistrictResponseDto>>,
            ApiResponse<districts_dtos::DivisionListResponseDto>,
            // Report form
            report_form_models::ReportForm,
            report_form_models::FormEvent,
            report_form_models::FormField,
            report_form_models::FieldErrors,
            report_form_models::SubmissionPhase,
            report_form_dtos::FormEventDto,
            report_form_dtos::FormStateDto,
            report_form_dtos::LocateFormDto,
            report_form_dtos::FormControlsDto,
            report_form_dtos::FormResponseDto,
            report_form_dtos::ValidationResponseDto,
            ApiResponse<report_form_dtos::FormResponseDto>,
            ApiResponse<report_form_dtos::ValidationResponseDto>,
            // Map
            map_models::Marker,
            map_models::MarkerKind,
            map_models::MarkerPopup,
            map_dtos::MapCenterDto,
            map_dtos::MapViewDto,
            ApiResponse<map_dtos::MapViewDto>,
        )
    ),
    tags(
        (name = "districts", description = "Sri Lankan districts and Divisional Secretariat divisions"),
        (name = "report-form", description = "Citizen symptom report form: events, validation, GPS auto-fill and submission"),
        (name = "map", description = "Alert and aid request map"),
    ),
    info(
        title = "Disaster Report Gateway",
        version = "0.1.0",
        description = "Citizen disaster reporting form and alert map API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&str> = openapi.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/districts",
            "/api/districts/{district}/divisions",
            "/api/form",
            "/api/form/events",
            "/api/form/validate",
            "/api/form/locate",
            "/api/form/submit",
            "/api/map",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier() {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Reports".to_string(),
            version: "9.9.9".to_string(),
            description: "staging".to_string(),
        }
        .modify(&mut openapi);

        assert_eq!(openapi.info.title, "Reports");
        assert_eq!(openapi.info.description.as_deref(), Some("staging"));
    }
}
