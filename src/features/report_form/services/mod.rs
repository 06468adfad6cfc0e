pub mod form_events;
pub mod location_service;
pub mod payload;
pub mod submission_service;
pub mod validation;

pub use location_service::LocationService;
pub use submission_service::SubmissionService;
