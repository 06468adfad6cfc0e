use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::core::error::{AppError, Result};
use crate::features::report_form::models::ReportForm;
use crate::modules::backend::SymptomReport;
use crate::shared::constants::REPORT_ACTION_PENDING;

/// Formats a `datetime-local` input can produce
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Turn the entered date-time into an absolute instant.
///
/// Values with an explicit offset are taken as is; bare local values are read
/// in `offset`.
pub fn normalize_date_time(raw: &str, offset: &FixedOffset) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| AppError::Validation(format!("Invalid date and time '{}'", raw)))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::Validation(format!("Ambiguous date and time '{}'", raw)))
}

/// Wire payload for a validated form
pub fn build_payload(form: &ReportForm, offset: &FixedOffset) -> Result<SymptomReport> {
    Ok(SymptomReport {
        reporter_name: form.reporter_name.clone(),
        contact_no: form.contact_no.clone(),
        district: form.district.clone(),
        ds_division: form.ds_division.clone(),
        date_time: normalize_date_time(&form.date_time, offset)?,
        description: form.description.clone(),
        image: form.image.clone(),
        latitude: form.latitude.unwrap_or(0.0),
        longitude: form.longitude.unwrap_or(0.0),
        action: REPORT_ACTION_PENDING.to_string(),
    })
}
