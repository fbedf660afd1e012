use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{BankRoutesDto, BranchRoutesDto, OverviewDto};

pub static OVERVIEW_TAG: &str = "overview";

/// List the available API routes
#[utoipa::path(
    get,
    path = "/api/",
    tag = OVERVIEW_TAG,
    responses(
        (status = 200, description = "Map of the API routes", body = OverviewDto)
    ),
)]
pub async fn get_overview() -> impl IntoResponse {
    let overview = OverviewDto {
        banks: BankRoutesDto {
            list: "/api/banks/".to_string(),
            detail: "/api/banks/{id}/".to_string(),
            branches: "/api/banks/{id}/branches/".to_string(),
        },
        branches: BranchRoutesDto {
            list: "/api/branches/".to_string(),
            detail: "/api/branches/{ifsc}/".to_string(),
            search_by_code: "/api/branches/search/?code={ifsc}".to_string(),
            search_by_city: "/api/branches/search/?city={city_name}".to_string(),
        },
    };

    (StatusCode::OK, Json(overview))
}
