use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::map::dtos::{MapCenterDto, MapQuery, MapViewDto};
use crate::features::map::services::MapService;
use crate::shared::types::{ApiResponse, Meta};

/// Get the alert map
#[utoipa::path(
    get,
    path = "/api/map",
    params(MapQuery),
    responses(
        (status = 200, description = "Map view; unavailable collections yield no markers", body = ApiResponse<MapViewDto>)
    ),
    tag = "map"
)]
pub async fn get_map(
    State(service): State<Arc<MapService>>,
    Query(query): Query<MapQuery>,
) -> Result<Json<ApiResponse<MapViewDto>>> {
    let loaded = service.load_markers(query.aid_requests).await;
    let config = service.config();

    let meta = Meta {
        total: loaded.markers.len() as i64,
    };
    let dto = MapViewDto {
        center: MapCenterDto {
            latitude: config.center_lat,
            longitude: config.center_lon,
        },
        zoom: config.zoom,
        aid_requests_available: loaded.aid_requests_available,
        markers: loaded.markers,
    };

    Ok(Json(ApiResponse::success(Some(dto), None, Some(meta))))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::Value;

    use crate::core::config::MapConfig;
    use crate::features::map::routes;
    use crate::features::map::services::MapService;
    use crate::shared::test_helpers::{aid_request, alert, FakeBackend};

    fn server(backend: FakeBackend) -> TestServer {
        let service = MapService::new(Arc::new(backend), MapConfig::default());
        TestServer::new(routes::routes(Arc::new(service))).unwrap()
    }

    #[tokio::test]
    async fn test_get_map_defaults() {
        let response = server(FakeBackend::with_alerts(vec![alert(1, 6.9, 79.8)]))
            .get("/api/map")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["center"]["latitude"], 7.8731);
        assert_eq!(body["data"]["center"]["longitude"], 80.7718);
        assert_eq!(body["data"]["zoom"], 8);
        assert_eq!(body["meta"]["total"], 1);

        let marker = &body["data"]["markers"][0];
        assert_eq!(marker["color"], "red");
        assert_eq!(marker["radius"], 10);
        assert_eq!(marker["popup"]["kind"], "alert");
        assert_eq!(marker["popup"]["title"], "Alert 1");
    }

    #[tokio::test]
    async fn test_get_map_with_aid_requests() {
        let backend = FakeBackend {
            aid_requests: Some(Some(vec![aid_request(4, 6.0, 80.2)])),
            ..FakeBackend::with_alerts(vec![alert(1, 6.9, 79.8)])
        };
        let response = server(backend)
            .get("/api/map")
            .add_query_param("aid_requests", true)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["aid_requests_available"], true);
        assert_eq!(body["data"]["markers"][1]["key"], "aid-4");
        assert_eq!(body["data"]["markers"][1]["color"], "green");
        assert_eq!(body["data"]["markers"][1]["popup"]["heading"], "Aid Request");
        assert_eq!(body["data"]["markers"][1]["popup"]["recipient"], "Sunil Silva");
    }

    #[tokio::test]
    async fn test_get_map_backend_down() {
        let backend = FakeBackend {
            alerts: None,
            ..FakeBackend::accepting()
        };
        let response = server(backend).get("/api/map").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["markers"], serde_json::json!([]));
        assert_eq!(body["meta"]["total"], 0);
    }
}
