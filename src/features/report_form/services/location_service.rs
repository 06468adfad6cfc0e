use std::sync::Arc;

use crate::features::districts::services::AreaResolution;
use crate::features::districts::DistrictService;
use crate::features::report_form::models::ReportForm;
use crate::modules::geocoding::ReverseGeocoder;
use crate::shared::constants::{MSG_AREA_NOT_DETECTED, MSG_DISTRICT_NOT_MATCHED_PREFIX};

/// Fills district and division from a GPS position
pub struct LocationService {
    geocoder: Arc<dyn ReverseGeocoder>,
    districts: DistrictService,
}

impl LocationService {
    pub fn new(geocoder: Arc<dyn ReverseGeocoder>, districts: DistrictService) -> Self {
        Self {
            geocoder,
            districts,
        }
    }

    /// Store the coordinates, reverse geocode them and pre-select the matching
    /// district and division. Never fails: every miss ends as a location error
    /// with the GPS request finished.
    pub async fn autofill(&self, form: ReportForm, latitude: f64, longitude: f64) -> ReportForm {
        let form = ReportForm {
            latitude: Some(latitude),
            longitude: Some(longitude),
            locating: false,
            location_error: String::new(),
            ..form
        };

        let Some(guess) = self.geocoder.guess_area(latitude, longitude).await else {
            return ReportForm {
                location_error: MSG_AREA_NOT_DETECTED.to_string(),
                ..form
            };
        };

        match self.districts.resolve(&guess) {
            AreaResolution::Matched {
                district,
                ds_division,
            } => {
                tracing::info!(
                    "Auto-filled location ({}, {}) as {} / {}",
                    latitude,
                    longitude,
                    district,
                    ds_division.unwrap_or("-")
                );
                ReportForm {
                    district: district.to_string(),
                    ds_division: ds_division.unwrap_or_default().to_string(),
                    ..form
                }
            }
            AreaResolution::DistrictNotMatched { raw_guess } => ReportForm {
                district: String::new(),
                ds_division: String::new(),
                location_error: format!("{}{}", MSG_DISTRICT_NOT_MATCHED_PREFIX, raw_guess),
                ..form
            },
        }
    }
}
