//! Disaster backend integration
//!
//! Read access to alerts and approved aid requests, and symptom report
//! submission. Callers depend on the [`DisasterBackend`] trait so tests can
//! substitute an in-memory backend.

mod client;
mod models;

pub use client::{DisasterBackend, HttpDisasterBackend};
pub use models::{AidRequest, Alert, SubmissionReceipt, SymptomReport};
