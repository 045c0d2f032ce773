// SPDX-License-Identifier: MIT

//! API input validation and ownership-parameter tests.
//!
//! These run against offline mock services, so they exercise exactly the
//! paths that must reject a request before any external call is made.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn trip_body(firebase_uid: Option<&str>, days: u32) -> serde_json::Value {
    let mut body = serde_json::json!({
        "source": "Lisbon",
        "destination": "Rome",
        "days": days,
        "budget": "medium",
        "itinerary": {
            "flightTime": 3,
            "distance": 1860,
            "days": [
                {
                    "day": 1,
                    "activities": [{"time": "Morning", "description": "Walk the old town"}]
                }
            ]
        }
    });
    if let Some(uid) = firebase_uid {
        body["firebaseUID"] = uid.into();
    }
    body
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_save_trip_without_uid_is_unauthorized() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_json("/api/trips", &trip_body(None, 3)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "unauthorized");
}

#[tokio::test]
async fn test_save_trip_with_blank_uid_is_unauthorized() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_json("/api/trips", &trip_body(Some("   "), 3)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_save_trip_rejects_bad_day_count() {
    let (app, _state) = common::create_test_app();

    for days in [0, 99] {
        let response = app
            .clone()
            .oneshot(post_json("/api/trips", &trip_body(Some("uid-1"), days)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "days={days}");
    }
}

#[tokio::test]
async fn test_get_trip_without_uid_is_unauthorized() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/trips/64b1f0a0a0a0a0a0a0a0a0a0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_trip_rejects_malformed_id() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/trips/not-an-id?firebaseUID=uid-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_trip_without_uid_is_unauthorized() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/trips/64b1f0a0a0a0a0a0a0a0a0a0")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_generate_itinerary_rejects_bad_day_count() {
    let (app, _state) = common::create_test_app();

    let body = serde_json::json!({
        "source": "Lisbon",
        "destination": "Rome",
        "days": 0,
        "budget": "low"
    });

    let response = app
        .oneshot(post_json("/api/travel/generate-itinerary", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_currency_requires_all_parameters() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/travel/convert-currency?amount=100&from=USD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert_currency_rejects_bad_codes() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/travel/convert-currency?amount=100&from=US&to=EURO")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_rejects_invalid_email() {
    let (app, _state) = common::create_test_app();

    let body = serde_json::json!({
        "name": "Ada",
        "email": "not-an-email",
        "firebaseUID": "uid-1"
    });

    let response = app
        .oneshot(post_json("/api/users/auth", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_offline_database_surfaces_internal_error() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/trips/user/uid-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "database_error");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
}
