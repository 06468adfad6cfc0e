use crate::features::districts::DistrictService;
use crate::features::report_form::models::{FieldErrors, FormField, ReportForm};
use crate::shared::constants::{
    DESCRIPTION_MIN_LENGTH, MSG_CONTACT_NO_LENGTH, MSG_DATE_TIME_REQUIRED,
    MSG_DESCRIPTION_LENGTH, MSG_DESCRIPTION_REQUIRED, MSG_DISTRICT_REQUIRED,
    MSG_DIVISION_REQUIRED, MSG_NAME_CHARSET, MSG_NAME_REQUIRED,
};
use crate::shared::validation::{CONTACT_NO_REGEX, NAME_REGEX};

pub fn validate_reporter_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(MSG_NAME_REQUIRED)
    } else if !NAME_REGEX.is_match(trimmed) {
        Some(MSG_NAME_CHARSET)
    } else {
        None
    }
}

/// Not trimmed: the stored value is exactly what gets sent
pub fn validate_contact_no(value: &str) -> Option<&'static str> {
    if CONTACT_NO_REGEX.is_match(value) {
        None
    } else {
        Some(MSG_CONTACT_NO_LENGTH)
    }
}

pub fn validate_description(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(MSG_DESCRIPTION_REQUIRED)
    } else if trimmed.chars().count() < DESCRIPTION_MIN_LENGTH {
        Some(MSG_DESCRIPTION_LENGTH)
    } else {
        None
    }
}

/// Validate a single field in isolation, as on blur
pub fn validate_field(
    form: &ReportForm,
    field: FormField,
    districts: &DistrictService,
) -> Option<&'static str> {
    match field {
        FormField::ReporterName => validate_reporter_name(&form.reporter_name),
        FormField::ContactNo => validate_contact_no(&form.contact_no),
        FormField::Description => validate_description(&form.description),
        // exact table spelling; the division lookup relies on it
        FormField::District => districts
            .divisions_of(&form.district)
            .is_none()
            .then_some(MSG_DISTRICT_REQUIRED),
        FormField::DsDivision => (!districts.is_valid_division(&form.district, &form.ds_division))
            .then_some(MSG_DIVISION_REQUIRED),
        FormField::DateTime => form
            .date_time
            .trim()
            .is_empty()
            .then_some(MSG_DATE_TIME_REQUIRED),
    }
}

/// Full validation of the free-text fields.
///
/// Passes when the returned map is empty, which happens exactly when the
/// name, contact number and description are all acceptable.
pub fn validate_report(form: &ReportForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = validate_reporter_name(&form.reporter_name) {
        errors.set(FormField::ReporterName, message);
    }
    if let Some(message) = validate_contact_no(&form.contact_no) {
        errors.set(FormField::ContactNo, message);
    }
    if let Some(message) = validate_description(&form.description) {
        errors.set(FormField::Description, message);
    }

    errors
}

/// Required selections: district, a division listed for it, and a date-time
pub fn selection_errors(form: &ReportForm, districts: &DistrictService) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in [FormField::District, FormField::DsDivision, FormField::DateTime] {
        if let Some(message) = validate_field(form, field, districts) {
            errors.set(field, message);
        }
    }

    errors
}

/// Everything that blocks a submission
pub fn submission_errors(form: &ReportForm, districts: &DistrictService) -> FieldErrors {
    let mut errors = validate_report(form);
    errors.extend(selection_errors(form, districts));
    errors
}
