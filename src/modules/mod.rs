//! Modules layer - clients for the external collaborators
//!
//! The disaster backend owns symptom reports, alerts and aid requests;
//! Nominatim turns GPS coordinates into administrative area names.

pub mod backend;
pub mod geocoding;
