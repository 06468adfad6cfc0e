use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};

/// Nominatim `reverse` response
#[derive(Debug, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: Option<String>,
    pub address: Option<NominatimAddress>,
}

/// Address components Nominatim reports for a Sri Lankan coordinate
#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub county: Option<String>,
    pub state_district: Option<String>,
    pub district: Option<String>,
    pub suburb: Option<String>,
    pub village: Option<String>,
    pub town: Option<String>,
    pub hamlet: Option<String>,
}

fn first_present(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_default()
}

impl NominatimAddress {
    /// District guess: county, then state_district, then district
    pub fn district_guess(&self) -> String {
        first_present(&[&self.county, &self.state_district, &self.district])
    }

    /// Division guess: suburb, then village, then town, then hamlet
    pub fn division_guess(&self) -> String {
        first_present(&[&self.suburb, &self.village, &self.town, &self.hamlet])
    }
}

/// Free-text district/division names guessed for a coordinate.
/// Either part may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AreaGuess {
    pub district: String,
    pub ds_division: String,
}

impl From<&NominatimAddress> for AreaGuess {
    fn from(address: &NominatimAddress) -> Self {
        Self {
            district: address.district_guess(),
            ds_division: address.division_guess(),
        }
    }
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Best-effort guess; `None` when the lookup fails for any reason
    async fn guess_area(&self, latitude: f64, longitude: f64) -> Option<AreaGuess>;
}

/// Client for the Nominatim reverse geocoding API
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn reverse_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/reverse?lat={}&lon={}&format=json",
            self.base_url,
            urlencoding::encode(&latitude.to_string()),
            urlencoding::encode(&longitude.to_string())
        )
    }

    /// Reverse geocode a coordinate
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<NominatimReverseResponse> {
        let url = self.reverse_url(latitude, longitude);
        tracing::debug!("Reverse geocoding ({}, {}) -> {}", latitude, longitude, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Nominatim request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Nominatim request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        response.json::<NominatimReverseResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse Nominatim response: {}", e))
        })
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimClient {
    async fn guess_area(&self, latitude: f64, longitude: f64) -> Option<AreaGuess> {
        match self.reverse(latitude, longitude).await {
            Ok(NominatimReverseResponse {
                display_name,
                address: Some(address),
            }) => {
                tracing::debug!("Reverse geocoded to {:?}", display_name);
                Some(AreaGuess::from(&address))
            }
            Ok(_) => {
                tracing::warn!(
                    "Nominatim returned no address for ({}, {})",
                    latitude,
                    longitude
                );
                None
            }
            Err(e) => {
                tracing::warn!("Reverse geocoding failed: {}", e);
                None
            }
        }
    }
}
