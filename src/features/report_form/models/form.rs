use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{MSG_SUBMIT_FAILED, MSG_SUBMIT_SUCCEEDED};

/// Fields that can carry an inline error
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    ReporterName,
    ContactNo,
    District,
    DsDivision,
    DateTime,
    Description,
}

/// Inline error messages keyed by field. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy every error from `other`, overwriting on conflict
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

impl SubmissionPhase {
    /// A submission is underway and a new one must not start
    pub fn is_in_flight(self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::Submitting)
    }
}

/// Complete state of the symptom report form.
///
/// Values are replaced, never mutated in place by callers: every user action
/// goes through [`ReportForm::apply`] and every workflow step through the
/// transition methods below, each returning the next state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ReportForm {
    pub reporter_name: String,
    pub contact_no: String,
    pub district: String,
    pub ds_division: String,
    /// `datetime-local` value as entered, e.g. `2024-05-01T10:30`
    pub date_time: String,
    pub description: String,
    /// Name of the selected file, shown even when it is not an image
    pub file_name: String,
    /// Local preview reference of the selected image, empty when none
    pub image: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub errors: FieldErrors,
    /// A GPS position request is outstanding
    pub locating: bool,
    pub location_error: String,
    pub phase: SubmissionPhase,
    /// Success confirmation is visible until dismissed
    pub show_success: bool,
    pub failure_notice: String,
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The division selector only works once a district is chosen
    pub fn division_enabled(&self) -> bool {
        !self.district.is_empty()
    }

    pub fn gps_enabled(&self) -> bool {
        !self.locating
    }

    pub fn submit_enabled(&self) -> bool {
        !self.phase.is_in_flight()
    }

    /// Empty every input, keeping the submission and GPS indicators
    pub fn cleared(self) -> Self {
        Self {
            locating: self.locating,
            phase: self.phase,
            show_success: self.show_success,
            failure_notice: self.failure_notice,
            ..Self::default()
        }
    }

    /// `Idle → Validating`. `None` while a submission is already in flight.
    pub fn begin_validation(self) -> Option<Self> {
        if self.phase.is_in_flight() {
            return None;
        }

        Some(Self {
            phase: SubmissionPhase::Validating,
            failure_notice: String::new(),
            show_success: false,
            ..self
        })
    }

    /// `Validating → Submitting` when `errors` is empty, otherwise back to `Idle`
    /// with the errors shown
    pub fn finish_validation(self, errors: FieldErrors) -> Self {
        let phase = if errors.is_empty() {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        };

        Self {
            phase,
            errors,
            ..self
        }
    }

    /// `Submitting → Success`: a fresh form with the confirmation visible
    pub fn succeed(self) -> Self {
        Self {
            phase: SubmissionPhase::Success,
            show_success: true,
            locating: self.locating,
            ..Self::default()
        }
    }

    /// `Submitting → Failed`: inputs are kept for a retry
    pub fn fail(self) -> Self {
        Self {
            phase: SubmissionPhase::Failed,
            failure_notice: MSG_SUBMIT_FAILED.to_string(),
            ..self
        }
    }

    /// Text of the confirmation dialog, when visible
    pub fn confirmation(&self) -> Option<&'static str> {
        self.show_success.then_some(MSG_SUBMIT_SUCCEEDED)
    }
}
