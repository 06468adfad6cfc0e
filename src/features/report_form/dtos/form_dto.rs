use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::districts::DistrictService;
use crate::features::report_form::models::{FieldErrors, FormEvent, ReportForm};

/// Request DTO for applying one user action to the form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FormEventDto {
    #[serde(default)]
    pub form: ReportForm,
    pub event: FormEvent,
}

/// Request DTO carrying the current form state
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FormStateDto {
    #[serde(default)]
    pub form: ReportForm,
}

/// Request DTO for GPS auto-fill
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LocateFormDto {
    #[serde(default)]
    pub form: ReportForm,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Widget state derived from the form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormControlsDto {
    pub division_enabled: bool,
    pub gps_enabled: bool,
    pub submit_enabled: bool,
    /// Divisions of the selected district, empty when none is selected
    pub division_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
}

/// Form state plus what the client needs to render it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormResponseDto {
    pub form: ReportForm,
    pub controls: FormControlsDto,
}

impl FormResponseDto {
    pub fn render(form: ReportForm, districts: &DistrictService) -> Self {
        let division_options = districts
            .divisions_of(&form.district)
            .unwrap_or_default()
            .iter()
            .map(|d| d.to_string())
            .collect();

        let controls = FormControlsDto {
            division_enabled: form.division_enabled(),
            gps_enabled: form.gps_enabled(),
            submit_enabled: form.submit_enabled(),
            division_options,
            confirmation: form.confirmation().map(str::to_string),
        };

        Self { form, controls }
    }
}

/// Outcome of a full validation pass
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationResponseDto {
    /// Name, contact number and description are all acceptable
    pub valid: bool,
    pub errors: FieldErrors,
    /// Missing district, division or date-time. These also block submission.
    pub selection_errors: FieldErrors,
}
