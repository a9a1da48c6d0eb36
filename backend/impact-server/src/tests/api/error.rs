use crate::ApiError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_json_returns_400_with_fixed_detail() {
    let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let (status, json) = body_json(ApiError::from(source)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid JSON format");
    assert_eq!(
        json["errors"],
        serde_json::json!(["Request body must be valid JSON"])
    );
}

#[tokio::test]
async fn test_validation_returns_400_with_every_error() {
    let error = ApiError::validation(vec![
        "@context is required in JSON-LD".into(),
        "status is required".into(),
    ]);
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation failed or invalid JSON-LD");
    assert_eq!(
        json["errors"],
        serde_json::json!(["@context is required in JSON-LD", "status is required"])
    );
}

#[test]
fn test_validation_display_joins_errors() {
    let error = ApiError::validation(vec!["A".into(), "B".into()]);

    assert!(error.to_string().starts_with("Validation failed: A, B"));
}
