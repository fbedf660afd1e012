//! End-to-end requests through the full router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use bankdir::server::{model::app::AppState, router::routes, service::seed::SeedService};
use bankdir_test_utils::prelude::*;
use tower::ServiceExt;

async fn seeded_app() -> Result<Router, TestError> {
    let test = TestBuilder::new().with_directory_tables().build().await?;
    SeedService::new(&test.db).seed().await.unwrap();

    let state: AppState = test.to_app_state();

    Ok(routes().with_state(state))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Expect the overview at the API root
#[tokio::test]
async fn serves_overview() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["Banks"].is_object());

    Ok(())
}

/// Expect the sample Mumbai branch through code search, with `ifsc` accepted as the parameter
#[tokio::test]
async fn searches_sbi_mumbai_by_code() -> Result<(), TestError> {
    let app = seeded_app().await?;

    for uri in [
        "/api/branches/search/?code=SBIN0000001",
        "/api/branches/search/?ifsc=sbin0000001",
    ] {
        let (status, body) = get(app.clone(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["branch"]["city"], "Mumbai");
        assert_eq!(body["branch"]["bank"]["name"], "State Bank of India");
    }

    Ok(())
}

/// Expect city search to return summaries under `branches`
#[tokio::test]
async fn searches_by_city() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/branches/search/?city=MUMBAI").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["branches"][0]["ifsc"], "SBIN0000001");
    assert_eq!(body["branches"][0]["bank_code"], "SBI");

    Ok(())
}

/// Expect 400 with an error body for a search without criteria
#[tokio::test]
async fn rejects_search_without_criteria() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/branches/search/?code=&city=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 404 for an unknown bank
#[tokio::test]
async fn unknown_bank_is_not_found() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/banks/999/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect a paginated listing with a link to the next page
#[tokio::test]
async fn paginates_branches() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app.clone(), "/api/branches/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 10);
    assert_eq!(body["next"], serde_json::Value::Null);

    let (status, _) = get(app, "/api/branches/?page=2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the branch listing of a bank to contain only its branches
#[tokio::test]
async fn lists_branches_of_bank() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (_, banks) = get(app.clone(), "/api/banks/").await;
    let sbi_id = banks["results"]
        .as_array()
        .and_then(|banks| banks.iter().find(|b| b["code"] == "SBI"))
        .map(|b| b["id"].clone())
        .unwrap();

    let (status, body) = get(app, &format!("/api/banks/{}/branches/", sbi_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/branches/search/"].is_object());

    Ok(())
}

/// Expect `code` to win when both `code` and `ifsc` are given
#[tokio::test]
async fn code_wins_over_ifsc() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(
        app,
        "/api/branches/search/?code=SBIN0000001&ifsc=HDFC0000001",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["branch"]["ifsc"], "SBIN0000001");

    Ok(())
}

/// Expect 404 with an error body for a bank ID that is not a number
#[tokio::test]
async fn non_numeric_bank_id_is_not_found() -> Result<(), TestError> {
    let app = seeded_app().await?;

    for uri in ["/api/banks/abc/", "/api/banks/abc/branches/"] {
        let (status, body) = get(app.clone(), uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    Ok(())
}

/// Expect 400 with an error body for a page that is not a number
#[tokio::test]
async fn non_numeric_page_is_bad_request() -> Result<(), TestError> {
    let app = seeded_app().await?;

    let (status, body) = get(app, "/api/branches/?page=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}
