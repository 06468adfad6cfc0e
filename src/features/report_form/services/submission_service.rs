use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::FixedOffset;

use super::payload::build_payload;
use super::validation::submission_errors;
use crate::core::error::{AppError, Result};
use crate::features::districts::DistrictService;
use crate::features::report_form::models::{ReportForm, SubmissionPhase};
use crate::modules::backend::{DisasterBackend, SymptomReport};
use crate::shared::constants::MSG_ALREADY_SUBMITTING;

/// Runs a form through `Validating → Submitting → Success | Failed`
pub struct SubmissionService {
    backend: Arc<dyn DisasterBackend>,
    districts: DistrictService,
    utc_offset: FixedOffset,
    /// Fingerprints of payloads currently being posted
    in_flight: Mutex<HashSet<String>>,
}

/// Holds a payload fingerprint in the in-flight set until dropped
struct InFlight<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlight<'a> {
    fn claim(set: &'a Mutex<HashSet<String>>, report: &SymptomReport) -> Result<Self> {
        let key = serde_json::to_string(report)
            .map_err(|e| AppError::Internal(format!("Failed to fingerprint report: {}", e)))?;

        let mut guard = set.lock().unwrap_or_else(PoisonError::into_inner);
        if !guard.insert(key.clone()) {
            return Err(AppError::Conflict(MSG_ALREADY_SUBMITTING.to_string()));
        }

        Ok(Self { set, key })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

impl SubmissionService {
    pub fn new(
        backend: Arc<dyn DisasterBackend>,
        districts: DistrictService,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            backend,
            districts,
            utc_offset,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Submit the form once.
    ///
    /// Returns the resulting state: `Idle` with errors when validation fails
    /// (nothing is sent), `Success` with a fresh form, or `Failed` with the
    /// inputs untouched. A form already validating or submitting, or an
    /// identical report still being posted by another request, is rejected
    /// with [`AppError::Conflict`].
    pub async fn submit(&self, form: ReportForm) -> Result<ReportForm> {
        let form = form
            .begin_validation()
            .ok_or_else(|| AppError::Conflict(MSG_ALREADY_SUBMITTING.to_string()))?;

        let errors = submission_errors(&form, &self.districts);
        let form = form.finish_validation(errors);
        if form.phase != SubmissionPhase::Submitting {
            tracing::debug!(
                "Submission blocked by {} validation error(s)",
                form.errors.len()
            );
            return Ok(form);
        }

        let payload = match build_payload(&form, &self.utc_offset) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Could not build symptom report payload: {}", e);
                return Ok(form.fail());
            }
        };

        let _claim = InFlight::claim(&self.in_flight, &payload).inspect_err(|_| {
            tracing::warn!(
                "Duplicate submission for {} / {} rejected while the first is in flight",
                payload.district,
                payload.ds_division
            );
        })?;

        match self.backend.submit_symptoms(&payload).await {
            Ok(receipt) => {
                tracing::info!(
                    "Symptom report for {} / {} accepted (status {}): {}",
                    payload.district,
                    payload.ds_division,
                    receipt.status,
                    receipt.message.as_deref().unwrap_or("no message")
                );
                Ok(form.succeed())
            }
            Err(e) => {
                tracing::error!("Symptom report submission failed: {}", e);
                Ok(form.fail())
            }
        }
    }
}
