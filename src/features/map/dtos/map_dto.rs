use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::map::models::Marker;

/// Query parameters for the map view
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct MapQuery {
    /// Include approved aid requests alongside alerts
    #[serde(default)]
    pub aid_requests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapCenterDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything needed to draw the alert map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MapViewDto {
    pub center: MapCenterDto,
    pub zoom: u8,
    /// False when aid requests were asked for but the backend offers none
    pub aid_requests_available: bool,
    pub markers: Vec<Marker>,
}
