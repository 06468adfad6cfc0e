use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{AidRequest, Alert, SubmissionReceipt, SymptomReport};
use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};

/// Operations the gateway needs from the disaster backend
#[async_trait]
pub trait DisasterBackend: Send + Sync {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>>;

    /// Approved aid requests. `Ok(None)` when the backend exposes no such collection.
    async fn fetch_aid_requests(&self) -> Result<Option<Vec<AidRequest>>>;

    /// Single attempt, no retry
    async fn submit_symptoms(&self, report: &SymptomReport) -> Result<SubmissionReceipt>;
}

/// reqwest-backed [`DisasterBackend`]
pub struct HttpDisasterBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpDisasterBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Backend request to {} failed: {:?}", url, e);
            AppError::ExternalServiceError(format!("Backend request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Backend returned status {} for {}",
                status, path
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse backend response from {}: {:?}", url, e);
            AppError::ExternalServiceError(format!("Failed to parse backend response: {}", e))
        })
    }
}

#[async_trait]
impl DisasterBackend for HttpDisasterBackend {
    async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        self.get_json(&self.config.alerts_path).await
    }

    async fn fetch_aid_requests(&self) -> Result<Option<Vec<AidRequest>>> {
        match self.config.aid_requests_path.as_deref() {
            Some(path) => self.get_json(path).await.map(Some),
            None => Ok(None),
        }
    }

    async fn submit_symptoms(&self, report: &SymptomReport) -> Result<SubmissionReceipt> {
        let url = self.config.url(&self.config.symptoms_path);
        tracing::debug!(
            "Submitting symptom report for district '{}' to {}",
            report.district,
            url
        );

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .json(report)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Symptom submission request failed: {:?}", e);
                AppError::ExternalServiceError(format!("Symptom submission failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to read submission response: {}", e))
        })?;

        interpret_submission(status, &body)
    }
}

/// Decide whether the backend accepted a submission.
///
/// Non-2xx and non-JSON bodies are failures. Otherwise the submission is
/// accepted when the body carries `"success": true` or the status is 200/201.
pub fn interpret_submission(status: StatusCode, body: &str) -> Result<SubmissionReceipt> {
    if !status.is_success() {
        return Err(AppError::ExternalServiceError(format!(
            "HTTP error! {}: {}",
            status.as_u16(),
            body
        )));
    }

    let value: Value = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalServiceError(format!("Malformed submission response: {}", e))
    })?;

    if value.is_null() {
        return Err(AppError::ExternalServiceError(
            "Malformed submission response: null body".to_string(),
        ));
    }

    let flagged = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);

    if flagged || status == StatusCode::OK || status == StatusCode::CREATED {
        Ok(SubmissionReceipt {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(AppError::ExternalServiceError(
            message.unwrap_or_else(|| "Submission failed".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_without_flag_is_accepted() {
        let receipt = interpret_submission(StatusCode::CREATED, r#"{"id": 7}"#).unwrap();
        assert_eq!(receipt.status, 201);
    }

    #[test]
    fn test_receipt_keeps_backend_message() {
        let receipt =
            interpret_submission(StatusCode::OK, r#"{"success": true, "message": "Saved"}"#)
                .unwrap();
        assert_eq!(receipt.message.as_deref(), Some("Saved"));
    }

    #[test]
    fn test_accepted_status_needs_success_flag() {
        assert!(interpret_submission(StatusCode::ACCEPTED, r#"{"success": true}"#).is_ok());

        let err = interpret_submission(
            StatusCode::ACCEPTED,
            r#"{"success": false, "message": "queue full"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(ref m) if m == "queue full"));
    }

    #[test]
    fn test_error_status_is_rejected() {
        let err = interpret_submission(StatusCode::BAD_REQUEST, "contact_no invalid").unwrap_err();
        assert!(
            matches!(err, AppError::ExternalServiceError(ref m) if m == "HTTP error! 400: contact_no invalid")
        );
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        assert!(interpret_submission(StatusCode::OK, "<html>ok</html>").is_err());
        assert!(interpret_submission(StatusCode::OK, "").is_err());
        assert!(interpret_submission(StatusCode::OK, "null").is_err());
    }

    #[test]
    fn test_alert_description_defaults_to_empty() {
        let alerts: Vec<Alert> = serde_json::from_str(
            r#"[{"id": 1, "title": "Flood", "latitude": 6.9, "longitude": 79.8}]"#,
        )
        .unwrap();
        assert_eq!(alerts[0].description, "");
    }

    #[test]
    fn test_symptom_report_wire_format() {
        use chrono::{TimeZone, Utc};

        let report = SymptomReport {
            reporter_name: "Nimal Perera".to_string(),
            contact_no: "0771234567".to_string(),
            district: "Colombo".to_string(),
            ds_division: "Dehiwala".to_string(),
            date_time: Utc.with_ymd_and_hms(2024, 5, 1, 5, 0, 0).unwrap(),
            description: "High fever and rash".to_string(),
            image: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            action: "Pending".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["date_time"], "2024-05-01T05:00:00.000Z");
        assert_eq!(json["action"], "Pending");
        assert_eq!(json["ds_division"], "Dehiwala");
    }

    mod http {
        use super::*;
        use crate::core::config::MapConfig;
        use crate::features::map::MapService;
        use crate::shared::test_helpers::{serve_stub, UNREACHABLE_URL};
        use axum::{routing::get, routing::post, Json, Router};
        use serde_json::json;
        use std::sync::Arc;
        use std::time::Duration;

        fn backend(base_url: &str) -> HttpDisasterBackend {
            HttpDisasterBackend::new(BackendConfig {
                base_url: base_url.to_string(),
                alerts_path: "/Alerts/all".to_string(),
                symptoms_path: "/Symptoms/create".to_string(),
                aid_requests_path: Some("/AidRequests/approved".to_string()),
                timeout: Duration::from_secs(2),
            })
            .unwrap()
        }

        fn stub_router() -> Router {
            Router::new()
                .route(
                    "/Alerts/all",
                    get(|| async {
                        Json(json!([{"id": 1, "title": "Flood", "latitude": 6.9, "longitude": 79.8}]))
                    }),
                )
                .route(
                    "/AidRequests/approved",
                    get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
                )
                .route(
                    "/Symptoms/create",
                    post(|| async { (StatusCode::CREATED, r#"{"id": 9}"#) }),
                )
        }

        #[tokio::test]
        async fn test_unreachable_backend_is_external_error() {
            let backend = backend(UNREACHABLE_URL);

            let err = backend.fetch_alerts().await.unwrap_err();
            assert!(matches!(err, AppError::ExternalServiceError(_)));
            assert!(backend.fetch_aid_requests().await.is_err());
        }

        #[tokio::test]
        async fn test_fetch_alerts_from_backend() {
            let backend = backend(&serve_stub(stub_router()).await);

            let alerts = backend.fetch_alerts().await.unwrap();
            assert_eq!(alerts.len(), 1);
            assert_eq!(alerts[0].title, "Flood");
        }

        #[tokio::test]
        async fn test_error_status_is_external_error() {
            let backend = backend(&serve_stub(stub_router()).await);

            let err = backend.fetch_aid_requests().await.unwrap_err();
            assert!(matches!(err, AppError::ExternalServiceError(ref m) if m.contains("500")));
        }

        #[tokio::test]
        async fn test_malformed_json_is_external_error() {
            let router = Router::new().route("/Alerts/all", get(|| async { "<html>down</html>" }));
            let backend = backend(&serve_stub(router).await);

            let err = backend.fetch_alerts().await.unwrap_err();
            assert!(matches!(err, AppError::ExternalServiceError(_)));
        }

        #[tokio::test]
        async fn test_submit_symptoms_round_trip() {
            let client = backend(&serve_stub(stub_router()).await);
            let report = SymptomReport {
                reporter_name: "Nimal Perera".to_string(),
                contact_no: "0771234567".to_string(),
                district: "Colombo".to_string(),
                ds_division: "Dehiwala".to_string(),
                date_time: chrono::Utc::now(),
                description: "High fever and rash".to_string(),
                image: String::new(),
                latitude: 0.0,
                longitude: 0.0,
                action: "Pending".to_string(),
            };

            let receipt = client.submit_symptoms(&report).await.unwrap();
            assert_eq!(receipt.status, 201);

            let err = backend(UNREACHABLE_URL)
                .submit_symptoms(&report)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::ExternalServiceError(_)));
        }

        #[tokio::test]
        async fn test_map_is_empty_when_backend_unreachable() {
            let service = MapService::new(Arc::new(backend(UNREACHABLE_URL)), MapConfig::default());

            let map = service.load_markers(true).await;
            assert!(map.markers.is_empty());
        }
    }
}
