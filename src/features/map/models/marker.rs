use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::backend::{AidRequest, Alert};

pub const MARKER_RADIUS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Alert,
    AidRequest,
}

impl MarkerKind {
    pub fn color(self) -> &'static str {
        match self {
            MarkerKind::Alert => "red",
            MarkerKind::AidRequest => "green",
        }
    }
}

/// Popup content of a marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerPopup {
    Alert {
        title: String,
        description: String,
    },
    AidRequest {
        heading: String,
        recipient: String,
        support_type: String,
        district: String,
        division: String,
    },
}

/// A read-only circle marker.
///
/// `latitude`/`longitude` are the entity's recorded position. The display
/// position may be nudged to keep coinciding markers apart and must not be
/// used as location data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Marker {
    /// Unique across kinds, e.g. `alert-3`, `aid-7`
    pub key: String,
    pub kind: MarkerKind,
    pub color: String,
    pub radius: u8,
    pub latitude: f64,
    pub longitude: f64,
    pub display_latitude: f64,
    pub display_longitude: f64,
    pub popup: MarkerPopup,
}

impl Marker {
    fn new(key: String, kind: MarkerKind, latitude: f64, longitude: f64, popup: MarkerPopup) -> Self {
        Self {
            key,
            kind,
            color: kind.color().to_string(),
            radius: MARKER_RADIUS,
            latitude,
            longitude,
            display_latitude: latitude,
            display_longitude: longitude,
            popup,
        }
    }

    fn same_position(&self, other: &Marker) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl From<&Alert> for Marker {
    fn from(alert: &Alert) -> Self {
        Marker::new(
            format!("alert-{}", alert.id),
            MarkerKind::Alert,
            alert.latitude,
            alert.longitude,
            MarkerPopup::Alert {
                title: alert.title.clone(),
                description: alert.description.clone(),
            },
        )
    }
}

impl From<&AidRequest> for Marker {
    fn from(aid: &AidRequest) -> Self {
        Marker::new(
            format!("aid-{}", aid.aid_id),
            MarkerKind::AidRequest,
            aid.latitude,
            aid.longitude,
            MarkerPopup::AidRequest {
                heading: "Aid Request".to_string(),
                recipient: aid.full_name.clone(),
                support_type: aid.type_support.clone(),
                district: aid.district.clone(),
                division: aid.divisional_secretariat.clone(),
            },
        )
    }
}

/// Nudge the display position of every marker that sits exactly on an
/// earlier one by up to `magnitude / 2` degrees on each axis
pub fn spread_coinciding<R: Rng>(markers: &mut [Marker], magnitude: f64, rng: &mut R) {
    if magnitude <= 0.0 {
        return;
    }

    let half = magnitude / 2.0;
    for i in 1..markers.len() {
        let (earlier, rest) = markers.split_at_mut(i);
        let marker = &mut rest[0];
        if earlier.iter().any(|other| other.same_position(marker)) {
            marker.display_latitude = marker.latitude + rng.gen_range(-half..=half);
            marker.display_longitude = marker.longitude + rng.gen_range(-half..=half);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{aid_request, alert};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alert_marker() {
        let marker = Marker::from(&alert(3, 6.9, 79.8));
        assert_eq!(marker.key, "alert-3");
        assert_eq!(marker.color, "red");
        assert_eq!(marker.radius, 10);
        assert_eq!(marker.display_latitude, 6.9);
        assert!(matches!(marker.popup, MarkerPopup::Alert { ref title, .. } if title == "Alert 3"));
    }

    #[test]
    fn test_aid_marker_popup() {
        let marker = Marker::from(&aid_request(7, 6.0, 80.2));
        assert_eq!(marker.key, "aid-7");
        assert_eq!(marker.color, "green");
        assert_eq!(
            marker.popup,
            MarkerPopup::AidRequest {
                heading: "Aid Request".to_string(),
                recipient: "Sunil Silva".to_string(),
                support_type: "Dry rations".to_string(),
                district: "Galle".to_string(),
                division: "Habaraduwa".to_string(),
            }
        );
    }

    #[test]
    fn test_spread_only_moves_duplicates_within_bounds() {
        let mut markers = vec![
            Marker::from(&alert(1, 6.9, 79.8)),
            Marker::from(&alert(2, 7.2, 80.6)),
            Marker::from(&aid_request(1, 6.9, 79.8)),
            Marker::from(&aid_request(2, 6.9, 79.8)),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        spread_coinciding(&mut markers, 0.001, &mut rng);

        assert_eq!(markers[0].display_latitude, 6.9);
        assert_eq!(markers[0].display_longitude, 79.8);
        assert_eq!(markers[1].display_latitude, 7.2);

        for marker in &markers[2..] {
            assert_eq!(marker.latitude, 6.9);
            assert_eq!(marker.longitude, 79.8);
            assert!((marker.display_latitude - 6.9).abs() <= 0.0005 + 1e-9);
            assert!((marker.display_longitude - 79.8).abs() <= 0.0005 + 1e-9);
        }
    }

    #[test]
    fn test_spread_is_deterministic_for_seed() {
        let build = || {
            vec![
                Marker::from(&alert(1, 6.9, 79.8)),
                Marker::from(&aid_request(1, 6.9, 79.8)),
            ]
        };
        let mut first = build();
        let mut second = build();
        spread_coinciding(&mut first, 0.001, &mut StdRng::seed_from_u64(7));
        spread_coinciding(&mut second, 0.001, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_magnitude_keeps_positions() {
        let mut markers = vec![
            Marker::from(&alert(1, 6.9, 79.8)),
            Marker::from(&alert(2, 6.9, 79.8)),
        ];
        spread_coinciding(&mut markers, 0.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(markers[1].display_latitude, 6.9);
    }
}
