//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted parameters, verifying status codes and that
//! service errors surface as the right responses.

mod bank;
mod branch;
mod overview;

use axum::{body::to_bytes, response::Response};
use bankdir::server::model::app::AppState;
use bankdir_test_utils::prelude::*;
use serde::de::DeserializeOwned;

/// Reads a JSON response body.
async fn json_body<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}
