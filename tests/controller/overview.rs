use axum::{http::StatusCode, response::IntoResponse};
use bankdir::server::controller::overview::get_overview;

use super::*;

/// Expect the route map keyed by resource
#[tokio::test]
async fn lists_routes() {
    let resp = get_overview().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["Banks"]["List all banks"], "/api/banks/");
    assert_eq!(body["Branches"]["List all branches"], "/api/branches/");
}
