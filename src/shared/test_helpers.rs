#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{AppError, Result};
#[cfg(test)]
use crate::modules::backend::{AidRequest, Alert, DisasterBackend, SubmissionReceipt, SymptomReport};
#[cfg(test)]
use crate::modules::geocoding::{AreaGuess, ReverseGeocoder};

/// Geocoder that always answers with the same guess
#[cfg(test)]
pub struct FakeGeocoder {
    guess: Option<AreaGuess>,
}

#[cfg(test)]
impl FakeGeocoder {
    pub fn new(guess: Option<AreaGuess>) -> Self {
        Self { guess }
    }
}

#[cfg(test)]
#[async_trait]
impl ReverseGeocoder for FakeGeocoder {
    async fn guess_area(&self, _latitude: f64, _longitude: f64) -> Option<AreaGuess> {
        self.guess.clone()
    }
}

/// In-memory backend recording every submission it receives.
/// `None` collections fail their fetch.
#[cfg(test)]
pub struct FakeBackend {
    pub alerts: Option<Vec<Alert>>,
    pub aid_requests: Option<Option<Vec<AidRequest>>>,
    pub accept_submissions: bool,
    /// Yield to the runtime between recording a submission and replying
    pub yield_on_submit: bool,
    pub submissions: Mutex<Vec<SymptomReport>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl FakeBackend {
    pub fn accepting() -> Self {
        Self {
            alerts: Some(Vec::new()),
            aid_requests: Some(None),
            accept_submissions: true,
            yield_on_submit: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn slow() -> Self {
        Self {
            yield_on_submit: true,
            ..Self::accepting()
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept_submissions: false,
            ..Self::accepting()
        }
    }

    pub fn with_alerts(alerts: Vec<Alert>) -> Self {
        Self {
            alerts: Some(alerts),
            ..Self::accepting()
        }
    }

    pub fn submitted(&self) -> Vec<SymptomReport> {
        self.submissions.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl DisasterBackend for FakeBackend {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        self.alerts
            .clone()
            .ok_or_else(|| AppError::ExternalServiceError("alerts unavailable".to_string()))
    }

    async fn fetch_aid_requests(&self) -> Result<Option<Vec<AidRequest>>> {
        self.aid_requests
            .clone()
            .ok_or_else(|| AppError::ExternalServiceError("aid requests unavailable".to_string()))
    }

    async fn submit_symptoms(&self, report: &SymptomReport) -> Result<SubmissionReceipt> {
        self.submissions.lock().unwrap().push(report.clone());
        if self.yield_on_submit {
            tokio::task::yield_now().await;
        }

        if self.accept_submissions {
            Ok(SubmissionReceipt {
                status: 201,
                message: None,
            })
        } else {
            Err(AppError::ExternalServiceError(
                "HTTP error! 500: boom".to_string(),
            ))
        }
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn alert(id: i64, latitude: f64, longitude: f64) -> Alert {
    Alert {
        id,
        title: format!("Alert {}", id),
        description: "Flooding reported".to_string(),
        latitude,
        longitude,
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn aid_request(aid_id: i64, latitude: f64, longitude: f64) -> AidRequest {
    AidRequest {
        aid_id,
        full_name: "Sunil Silva".to_string(),
        type_support: "Dry rations".to_string(),
        district: "Galle".to_string(),
        divisional_secretariat: "Habaraduwa".to_string(),
        latitude,
        longitude,
    }
}

/// Serve `router` on an ephemeral local port, returning its base URL
#[cfg(test)]
#[allow(dead_code)]
pub async fn serve_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Nothing listens on port 1, so connections are refused
#[cfg(test)]
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
