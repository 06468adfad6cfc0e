mod event;
mod form;

pub use event::FormEvent;
pub use form::{FieldErrors, FormField, ReportForm, SubmissionPhase};
