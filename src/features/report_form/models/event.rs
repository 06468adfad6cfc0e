use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::form::FormField;

/// A user action on the report form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    EditName { value: String },
    EditContactNo { value: String },
    EditDescription { value: String },
    EditDateTime { value: String },
    /// Field lost focus
    Blur { field: FormField },
    /// Empty value clears the district
    SelectDistrict { district: String },
    /// Empty value clears the division
    SelectDivision { ds_division: String },
    /// File picked; the preview only survives for `image/*` types
    SelectFile {
        file_name: String,
        #[serde(default)]
        mime_type: String,
        #[serde(default)]
        preview_url: String,
    },
    RemoveFile,
    /// GPS button pressed
    GpsRequested,
    /// The device has no geolocation support
    GpsUnsupported,
    /// The device could not produce a position
    GpsFailed { message: String },
    DismissConfirmation,
    Clear,
}
