use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use bankdir::{
    model::{
        api::PageDto,
        bank::{BankDto, BankWithBranchesDto},
        branch::BranchSummaryDto,
    },
    server::controller::{
        bank::{get_bank, list_bank_branches, list_banks, BankDetailParams, BankExpand},
        ApiPath, ApiQuery, PageParams,
    },
};

use super::*;

/// Expect 200 with a page of banks
#[tokio::test]
async fn list_banks_returns_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_bank(1)
        .with_mock_bank(2)
        .build()
        .await?;

    let result = list_banks(State(app_state(&test)), ApiQuery(PageParams::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<BankDto> = json_body(resp).await;
    assert_eq!(page.count, 2);
    assert_eq!(page.results.len(), 2);

    Ok(())
}

/// Expect 404 for a page past the end
#[tokio::test]
async fn list_banks_rejects_page_past_end() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_bank(1)
        .build()
        .await?;

    let result = list_banks(
        State(app_state(&test)),
        ApiQuery(PageParams { page: Some(5) }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with the bank when it exists
#[tokio::test]
async fn get_bank_returns_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;
    test.directory()
        .insert_bank(1, "State Bank of India", Some("SBI"))
        .await?;

    let result = get_bank(
        State(app_state(&test)),
        ApiPath(1),
        ApiQuery(BankDetailParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let bank: BankDto = json_body(resp).await;
    assert_eq!(bank.id, 1);
    assert_eq!(bank.code.as_deref(), Some("SBI"));

    Ok(())
}

/// Expect the branches of the bank with `expand=branches`
#[tokio::test]
async fn get_bank_expands_branches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_branch("SBIN0000001", 1)
        .with_mock_branch("SBIN0000002", 1)
        .build()
        .await?;

    let result = get_bank(
        State(app_state(&test)),
        ApiPath(1),
        ApiQuery(BankDetailParams {
            expand: Some(BankExpand::Branches),
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let bank: BankWithBranchesDto = json_body(resp).await;
    assert_eq!(bank.branch_count, 2);

    Ok(())
}

/// Expect 404 for an unknown bank
#[tokio::test]
async fn get_bank_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;

    let result = get_bank(
        State(app_state(&test)),
        ApiPath(999),
        ApiQuery(BankDetailParams::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the database is not usable
#[tokio::test]
async fn get_bank_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_bank(
        State(app_state(&test)),
        ApiPath(1),
        ApiQuery(BankDetailParams::default()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 200 with only the branches of the requested bank
#[tokio::test]
async fn list_bank_branches_filters_by_bank() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .with_mock_branch("SBIN0000001", 1)
        .with_mock_branch("HDFC0000001", 2)
        .build()
        .await?;

    let result = list_bank_branches(
        State(app_state(&test)),
        ApiPath(2),
        ApiQuery(PageParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<BranchSummaryDto> = json_body(resp).await;
    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].ifsc, "HDFC0000001");

    Ok(())
}

/// Expect 200 with an empty page for an unknown bank
#[tokio::test]
async fn list_bank_branches_empty_for_unknown_bank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;

    let result = list_bank_branches(
        State(app_state(&test)),
        ApiPath(999),
        ApiQuery(PageParams::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageDto<BranchSummaryDto> = json_body(resp).await;
    assert!(page.results.is_empty());

    Ok(())
}
