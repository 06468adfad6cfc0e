use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::ValidatedJson;
use crate::features::districts::DistrictService;
use crate::features::report_form::dtos::{
    FormEventDto, FormResponseDto, FormStateDto, LocateFormDto, ValidationResponseDto,
};
use crate::features::report_form::models::ReportForm;
use crate::features::report_form::services::validation::{selection_errors, validate_report};
use crate::features::report_form::services::{LocationService, SubmissionService};
use crate::shared::types::ApiResponse;

/// State for report form handlers
#[derive(Clone)]
pub struct ReportFormState {
    pub districts: DistrictService,
    pub location_service: Arc<LocationService>,
    pub submission_service: Arc<SubmissionService>,
}

/// Start a new, empty report form
#[utoipa::path(
    post,
    path = "/api/form",
    responses(
        (status = 200, description = "Empty form", body = ApiResponse<FormResponseDto>)
    ),
    tag = "report-form"
)]
pub async fn new_form(
    State(state): State<ReportFormState>,
) -> Result<Json<ApiResponse<FormResponseDto>>> {
    let dto = FormResponseDto::render(ReportForm::new(), &state.districts);
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Apply a user action to the form
#[utoipa::path(
    post,
    path = "/api/form/events",
    request_body = FormEventDto,
    responses(
        (status = 200, description = "Updated form", body = ApiResponse<FormResponseDto>),
        (status = 400, description = "Malformed event, or district or division not in the reference table")
    ),
    tag = "report-form"
)]
pub async fn apply_event(
    State(state): State<ReportFormState>,
    ValidatedJson(dto): ValidatedJson<FormEventDto>,
) -> Result<Json<ApiResponse<FormResponseDto>>> {
    let form = dto.form.apply(dto.event, &state.districts)?;
    let dto = FormResponseDto::render(form, &state.districts);
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Run the full validation pass without submitting
#[utoipa::path(
    post,
    path = "/api/form/validate",
    request_body = FormStateDto,
    responses(
        (status = 200, description = "Validation result", body = ApiResponse<ValidationResponseDto>)
    ),
    tag = "report-form"
)]
pub async fn validate_form(
    State(state): State<ReportFormState>,
    ValidatedJson(dto): ValidatedJson<FormStateDto>,
) -> Result<Json<ApiResponse<ValidationResponseDto>>> {
    let errors = validate_report(&dto.form);
    let response = ValidationResponseDto {
        valid: errors.is_empty(),
        errors,
        selection_errors: selection_errors(&dto.form, &state.districts),
    };
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Fill district and division from a GPS position
#[utoipa::path(
    post,
    path = "/api/form/locate",
    request_body = LocateFormDto,
    responses(
        (status = 200, description = "Form with location applied; misses are reported in location_error", body = ApiResponse<FormResponseDto>),
        (status = 400, description = "Coordinates out of range")
    ),
    tag = "report-form"
)]
pub async fn locate(
    State(state): State<ReportFormState>,
    ValidatedJson(dto): ValidatedJson<LocateFormDto>,
) -> Result<Json<ApiResponse<FormResponseDto>>> {
    let form = state
        .location_service
        .autofill(dto.form, dto.latitude, dto.longitude)
        .await;
    let dto = FormResponseDto::render(form, &state.districts);
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

/// Validate and submit the report to the backend
#[utoipa::path(
    post,
    path = "/api/form/submit",
    request_body = FormStateDto,
    responses(
        (status = 200, description = "Resulting form: success, failure notice, or validation errors", body = ApiResponse<FormResponseDto>),
        (status = 409, description = "A submission is already in progress")
    ),
    tag = "report-form"
)]
pub async fn submit_form(
    State(state): State<ReportFormState>,
    ValidatedJson(dto): ValidatedJson<FormStateDto>,
) -> Result<Json<ApiResponse<FormResponseDto>>> {
    let form = state.submission_service.submit(dto.form).await?;
    let message = form
        .confirmation()
        .map(str::to_string)
        .or_else(|| (!form.failure_notice.is_empty()).then(|| form.failure_notice.clone()));
    let dto = FormResponseDto::render(form, &state.districts);
    Ok(Json(ApiResponse::success(Some(dto), message, None)))
}
