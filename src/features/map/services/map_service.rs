use std::sync::Arc;

use futures::future;
use rand::Rng;

use crate::core::config::MapConfig;
use crate::features::map::models::{spread_coinciding, Marker};
use crate::modules::backend::{AidRequest, Alert, DisasterBackend};

/// Markers for one map request, plus whether the aid-request collection was
/// actually available
#[derive(Debug, Clone)]
pub struct MapMarkers {
    pub markers: Vec<Marker>,
    pub aid_requests_available: bool,
}

/// Builds the alert map from backend collections. Nothing is cached.
pub struct MapService {
    backend: Arc<dyn DisasterBackend>,
    config: MapConfig,
}

impl MapService {
    pub fn new(backend: Arc<dyn DisasterBackend>, config: MapConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Fetch alerts, and aid requests when `include_aid_requests` is set,
    /// concurrently. A failed fetch contributes no markers.
    pub async fn load_markers(&self, include_aid_requests: bool) -> MapMarkers {
        let aid_requests = async {
            if include_aid_requests {
                self.fetch_aid_requests().await
            } else {
                None
            }
        };

        let (alerts, aid_requests) = future::join(self.fetch_alerts(), aid_requests).await;

        build_markers(
            &alerts,
            aid_requests.as_deref(),
            self.config.jitter_degrees,
            &mut rand::thread_rng(),
        )
    }

    async fn fetch_alerts(&self) -> Vec<Alert> {
        match self.backend.fetch_alerts().await {
            Ok(alerts) => {
                tracing::debug!("Fetched {} alerts", alerts.len());
                alerts
            }
            Err(e) => {
                tracing::error!("Failed to fetch alerts: {}", e);
                Vec::new()
            }
        }
    }

    /// `None` when the backend has no aid-request collection configured
    async fn fetch_aid_requests(&self) -> Option<Vec<AidRequest>> {
        match self.backend.fetch_aid_requests().await {
            Ok(Some(requests)) => {
                tracing::debug!("Fetched {} aid requests", requests.len());
                Some(requests)
            }
            Ok(None) => {
                tracing::warn!("Aid requests requested but no aid request endpoint is configured");
                None
            }
            Err(e) => {
                tracing::error!("Failed to fetch aid requests: {}", e);
                Some(Vec::new())
            }
        }
    }
}

/// Alerts first, then aid requests. Display positions are spread only in the
/// combined view.
pub fn build_markers<R: Rng>(
    alerts: &[Alert],
    aid_requests: Option<&[AidRequest]>,
    jitter_degrees: f64,
    rng: &mut R,
) -> MapMarkers {
    let mut markers: Vec<Marker> = alerts.iter().map(Marker::from).collect();

    if let Some(aid_requests) = aid_requests {
        markers.extend(aid_requests.iter().map(Marker::from));
        spread_coinciding(&mut markers, jitter_degrees, rng);
    }

    MapMarkers {
        markers,
        aid_requests_available: aid_requests.is_some(),
    }
}
