use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{
        api::{ErrorDto, PageDto},
        bank::{BankDetailDto, BankDto},
        branch::BranchSummaryDto,
    },
    server::{
        controller::{ApiPath, ApiQuery, PageParams},
        error::Error,
        model::app::AppState,
        service::{bank::BankService, branch::BranchService},
    },
};

pub static BANK_TAG: &str = "bank";

/// Related data that can be embedded in a bank detail response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BankExpand {
    Branches,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BankDetailParams {
    /// Embed the branches of the bank with `expand=branches`
    pub expand: Option<BankExpand>,
}

/// List banks ordered by name
#[utoipa::path(
    get,
    path = "/api/banks/",
    tag = BANK_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of banks", body = PageDto<BankDto>),
        (status = 404, description = "Page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_banks(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let bank_service = BankService::new(&state.db);

    let page = bank_service
        .list_banks(params.into_request(state.page_size))
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Get a bank by ID
///
/// With `expand=branches` the response also contains every branch of the bank and their count.
#[utoipa::path(
    get,
    path = "/api/banks/{id}/",
    tag = BANK_TAG,
    params(
        ("id" = i64, Path, description = "ID of the bank"),
        BankDetailParams
    ),
    responses(
        (status = 200, description = "The requested bank", body = BankDetailDto),
        (status = 404, description = "Bank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bank(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<BankDetailParams>,
) -> Result<impl IntoResponse, Error> {
    let bank_service = BankService::new(&state.db);

    let bank = match params.expand {
        Some(BankExpand::Branches) => {
            BankDetailDto::WithBranches(bank_service.get_bank_with_branches(id).await?)
        }
        None => BankDetailDto::Bank(bank_service.get_bank(id).await?),
    };

    Ok((StatusCode::OK, Json(bank)))
}

/// List the branches of a bank
///
/// An unknown bank yields an empty page.
#[utoipa::path(
    get,
    path = "/api/banks/{id}/branches/",
    tag = BANK_TAG,
    params(
        ("id" = i64, Path, description = "ID of the bank"),
        PageParams
    ),
    responses(
        (
            status = 200,
            description = "Page of the bank's branches",
            body = PageDto<BranchSummaryDto>
        ),
        (status = 404, description = "Page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bank_branches(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let branch_service = BranchService::new(&state.db);

    let page = branch_service
        .list_branches_for_bank(id, params.into_request(state.page_size))
        .await?;

    Ok((StatusCode::OK, Json(page)))
}
