//! Citizen symptom report form.
//!
//! The form is a plain value: clients send the current [`ReportForm`] along
//! with a user action and get the next state back, together with the widget
//! state needed to render it.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/form` | Fresh empty form |
//! | POST | `/api/form/events` | Apply an edit, blur, selection, file or GPS event |
//! | POST | `/api/form/validate` | Full validation pass |
//! | POST | `/api/form/locate` | Auto-fill district and division from coordinates |
//! | POST | `/api/form/submit` | Validate and send the report to the backend |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::{FormEvent, ReportForm};
pub use services::{LocationService, SubmissionService};
