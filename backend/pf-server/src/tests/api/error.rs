use crate::ApiError;

use pf_core::ProjectDraft;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_error_message() {
    let error = ApiError::not_found("Project not found");

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_that!(json["error"], eq(&Value::from("Project not found")));
}

#[tokio::test]
async fn given_unauthorized_when_rendered_then_401_with_only_error_key() {
    let error = ApiError::Unauthorized {
        message: "Unauthorized - please log in to create projects".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_that!(json.as_object().unwrap().len(), eq(1));
    assert_that!(
        json["error"],
        eq(&Value::from("Unauthorized - please log in to create projects"))
    );
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_cause_is_not_leaked() {
    let error = ApiError::internal("Failed to fetch projects", "disk I/O error at /var/db");

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_that!(json["error"], eq(&Value::from("Failed to fetch projects")));
}

#[tokio::test]
async fn given_missing_title_when_converted_then_400_with_required_message() {
    let core_error = ProjectDraft::new(None, None, Some("https://x/1.png".into()), None).unwrap_err();

    let response = ApiError::from(core_error).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_that!(
        json["error"],
        eq(&Value::from("Title and image URL are required"))
    );
}

#[test]
fn given_each_variant_then_status_matches_taxonomy() {
    let location = || ErrorLocation::from(Location::caller());

    let cases = [
        (
            ApiError::BadRequest {
                message: "x".into(),
                location: location(),
            },
            StatusCode::BAD_REQUEST,
        ),
        (
            ApiError::Forbidden {
                message: "x".into(),
                location: location(),
            },
            StatusCode::FORBIDDEN,
        ),
        (
            ApiError::Internal {
                message: "x".into(),
                location: location(),
            },
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, status) in cases {
        assert_eq!(error.status(), status);
    }
}
