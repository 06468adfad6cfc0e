/// Status every new symptom report is created with
pub const REPORT_ACTION_PENDING: &str = "Pending";

/// Contact numbers are exactly this many digits
pub const CONTACT_NO_LENGTH: usize = 10;

/// Minimum trimmed length of a symptom description
pub const DESCRIPTION_MIN_LENGTH: usize = 10;

// =============================================================================
// FORM MESSAGES
// =============================================================================

pub const MSG_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_NAME_CHARSET: &str = "Name can only contain letters and spaces";
pub const MSG_CONTACT_NO_LENGTH: &str = "Phone number must be exactly 10 digits";
pub const MSG_DESCRIPTION_REQUIRED: &str = "Symptoms description is required";
pub const MSG_DESCRIPTION_LENGTH: &str = "Symptoms should be at least 10 characters long";

pub const MSG_DISTRICT_REQUIRED: &str = "Please select a district";
pub const MSG_DIVISION_REQUIRED: &str = "Please select a DS division";
pub const MSG_DATE_TIME_REQUIRED: &str = "Please enter the date and time";

pub const MSG_GEOLOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser";
pub const MSG_GEOLOCATION_FAILED_PREFIX: &str = "Failed to get GPS location: ";
pub const MSG_AREA_NOT_DETECTED: &str = "Could not detect your administrative area.";
pub const MSG_DISTRICT_NOT_MATCHED_PREFIX: &str = "Could not match district: ";

pub const MSG_SUBMIT_FAILED: &str = "Failed to submit symptoms. Please try again.";
pub const MSG_ALREADY_SUBMITTING: &str = "A submission for this report is already in progress";
pub const MSG_SUBMIT_SUCCEEDED: &str = "Symptoms submitted successfully!";
