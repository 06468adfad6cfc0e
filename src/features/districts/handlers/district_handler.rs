use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::districts::dtos::{DistrictResponseDto, DivisionListResponseDto};
use crate::features::districts::services::DistrictService;
use crate::shared::types::{ApiResponse, Meta};

/// List districts with their divisions
#[utoipa::path(
    get,
    path = "/api/districts",
    responses(
        (status = 200, description = "Districts in selector order", body = ApiResponse<Vec<DistrictResponseDto>>)
    ),
    tag = "districts"
)]
pub async fn list_districts(
    State(service): State<DistrictService>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let dtos: Vec<DistrictResponseDto> = service.entries().iter().map(Into::into).collect();
    let meta = Meta {
        total: dtos.len() as i64,
    };
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}

/// List the divisions of one district
#[utoipa::path(
    get,
    path = "/api/districts/{district}/divisions",
    params(
        ("district" = String, Path, description = "District name (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Divisions of the district", body = ApiResponse<DivisionListResponseDto>),
        (status = 404, description = "Unknown district")
    ),
    tag = "districts"
)]
pub async fn list_divisions(
    State(service): State<DistrictService>,
    Path(district): Path<String>,
) -> Result<Json<ApiResponse<DivisionListResponseDto>>> {
    let canonical = service
        .canonical_district(&district)
        .ok_or_else(|| AppError::NotFound(format!("District '{}' not found", district)))?;

    let divisions = service
        .divisions_of(canonical)
        .unwrap_or_default()
        .iter()
        .map(|d| d.to_string())
        .collect();

    let dto = DivisionListResponseDto {
        district: canonical.to_string(),
        divisions,
    };

    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}

#[cfg(test)]
mod tests {
    use crate::features::districts::routes;
    use crate::features::districts::services::DistrictService;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        TestServer::new(routes::routes(DistrictService::new())).unwrap()
    }

    #[tokio::test]
    async fn test_list_districts() {
        let response = server().get("/api/districts").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 25);
        assert_eq!(body["data"][0]["name"], "Ampara");
    }

    #[tokio::test]
    async fn test_list_divisions_case_insensitive() {
        let response = server().get("/api/districts/nuwara%20eliya/divisions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["district"], "Nuwara Eliya");
        assert_eq!(body["data"]["divisions"][3], "Nuwara Eliya");
    }

    #[tokio::test]
    async fn test_list_divisions_unknown_district() {
        let response = server().get("/api/districts/Atlantis/divisions").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
