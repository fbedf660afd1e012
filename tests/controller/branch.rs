use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use bankdir::{
    model::{
        api::{ErrorDto, PageDto},
        branch::{BranchDetailDto, BranchSummaryDto},
    },
    server::controller::{
        branch::{get_branch, list_branches, search_branches, BranchSearchParams},
        ApiPath, ApiQuery, PageParams,
    },
};

use super::*;

async fn sbi_mumbai() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;
    test.directory()
        .insert_bank(1, "State Bank of India", Some("SBI"))
        .await?;
    test.directory()
        .insert_branch("SBIN0000001", 1, "Mumbai Main Branch", "Mumbai")
        .await?;

    Ok(test)
}

/// Expect 200 with a page of branches
#[tokio::test]
async fn list_branches_returns_page() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = list_branches(State(app_state(&test)), ApiQuery(PageParams::default())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<BranchSummaryDto> = json_body(resp).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].bank_name, "State Bank of India");

    Ok(())
}

/// Expect 200 with the detail of the branch
#[tokio::test]
async fn get_branch_returns_detail() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = get_branch(State(app_state(&test)), ApiPath("SBIN0000001".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let branch: BranchDetailDto = json_body(resp).await;
    assert_eq!(branch.bank.code.as_deref(), Some("SBI"));

    Ok(())
}

/// Expect 404 for an unknown branch
#[tokio::test]
async fn get_branch_not_found() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = get_branch(State(app_state(&test)), ApiPath("XXXX0000000".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with a single branch for a lowercase code
#[tokio::test]
async fn search_by_code_ignores_case() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = search_branches(
        State(app_state(&test)),
        ApiQuery(BranchSearchParams {
            code: Some("sbin0000001".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["branch"]["ifsc"], "SBIN0000001");

    Ok(())
}

/// Expect 200 with a list of branches for a city fragment
#[tokio::test]
async fn search_by_city_returns_list() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = search_branches(
        State(app_state(&test)),
        ApiQuery(BranchSearchParams {
            city: Some("mum".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["branches"].as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Expect 400 without search criteria
#[tokio::test]
async fn search_without_criteria_is_bad_request() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = search_branches(
        State(app_state(&test)),
        ApiQuery(BranchSearchParams::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect 404 when nothing matches
#[tokio::test]
async fn search_without_matches_is_not_found() -> Result<(), TestError> {
    let test = sbi_mumbai().await?;

    let result = search_branches(
        State(app_state(&test)),
        ApiQuery(BranchSearchParams {
            city: Some("Kolkata".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
