use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        branch::{BranchDetailDto, BranchSearchDto, BranchSummaryDto},
    },
    server::{
        controller::{ApiPath, ApiQuery, PageParams},
        error::Error,
        model::app::AppState,
        service::branch::{BranchSearch, BranchService},
    },
};

pub static BRANCH_TAG: &str = "branch";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BranchSearchParams {
    /// IFSC to match exactly, ignoring case. Takes precedence over `ifsc` and `city`.
    pub code: Option<String>,
    /// Same as `code`, used when `code` is absent
    pub ifsc: Option<String>,
    /// Fragment of the city name to match, ignoring case
    pub city: Option<String>,
}

/// List every branch
#[utoipa::path(
    get,
    path = "/api/branches/",
    tag = BRANCH_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of branches", body = PageDto<BranchSummaryDto>),
        (status = 404, description = "Page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_branches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let branch_service = BranchService::new(&state.db);

    let page = branch_service
        .list_branches(params.into_request(state.page_size))
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a branch by IFSC
#[utoipa::path(
    get,
    path = "/api/branches/{ifsc}/",
    tag = BRANCH_TAG,
    params(("ifsc" = String, Path, description = "IFSC of the branch")),
    responses(
        (status = 200, description = "The requested branch", body = BranchDetailDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_branch(
    State(state): State<AppState>,
    ApiPath(ifsc): ApiPath<String>,
) -> Result<impl IntoResponse, Error> {
    let branch_service = BranchService::new(&state.db);

    let branch = branch_service.get_branch(&ifsc).await?;

    Ok((StatusCode::OK, Json(branch)))
}

/// Search branches by IFSC or city
///
/// A code search returns the single matching branch under `branch`, a city search returns every
/// branch whose city contains the fragment under `branches`.
#[utoipa::path(
    get,
    path = "/api/branches/search/",
    tag = BRANCH_TAG,
    params(BranchSearchParams),
    responses(
        (status = 200, description = "Search results", body = BranchSearchDto),
        (status = 400, description = "Neither code nor city provided", body = ErrorDto),
        (status = 404, description = "No branches found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_branches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BranchSearchParams>,
) -> Result<impl IntoResponse, Error> {
    let branch_service = BranchService::new(&state.db);

    let search = BranchSearch::from_params(
        params.code.as_deref(),
        params.ifsc.as_deref(),
        params.city.as_deref(),
    )?;
    let results = branch_service.search(search).await?;

    Ok((StatusCode::OK, Json(results)))
}
