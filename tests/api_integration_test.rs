mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_receipt(body: String) -> Request<Body> {
    Request::post("/receipts/process")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_points(id: &str) -> Request<Body> {
    Request::get(format!("/receipts/{}/points", id))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_process_then_points() {
    let app = test_app();

    for (receipt, expected) in [(target_receipt(), 28), (corner_market_receipt(), 109)] {
        let response = app
            .clone()
            .oneshot(post_receipt(receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let id = json["id"].as_str().expect("id should be a string").to_string();
        assert!(!id.is_empty());

        let response = app.clone().oneshot(get_points(&id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["points"], expected);
    }
}

#[tokio::test]
async fn test_unknown_id_is_404() {
    let app = test_app();

    let response = app
        .oneshot(get_points("adb6b560-0eef-42bc-9d16-df48f30e89b2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "RECEIPT_NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = test_app();

    let response = app
        .oneshot(post_receipt("{\"retailer\": \"Target\",".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_RECEIPT");
}

#[tokio::test]
async fn test_wrong_shape_is_400() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_receipt(r#"{"retailer": "Target", "items": "none"}"#.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_receipt("[1, 2, 3]".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unscoreable_fields_still_score() {
    let app = test_app();

    let receipt = serde_json::json!({
        "retailer": "Shop 24",
        "purchaseDate": "yesterday",
        "purchaseTime": "lunch",
        "total": "a lot",
        "items": [
            {"shortDescription": "abc", "price": "cheap"},
            {"shortDescription": "def", "price": "3.00"}
        ]
    });

    let response = app
        .clone()
        .oneshot(post_receipt(receipt.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    // retailer 6 + one pair 5 + ceil(3.00 * 0.2) 1
    let response = app.oneshot(get_points(&id)).await.unwrap();
    assert_eq!(body_json(response).await["points"], 12);
}

#[tokio::test]
async fn test_null_fields_still_score() {
    let app = test_app();

    let receipt = serde_json::json!({
        "retailer": "Target",
        "purchaseDate": null,
        "purchaseTime": "14:05",
        "total": null,
        "items": null
    });

    let response = app
        .clone()
        .oneshot(post_receipt(receipt.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    // retailer 6 + afternoon 10
    let response = app.clone().oneshot(get_points(&id)).await.unwrap();
    assert_eq!(body_json(response).await["points"], 16);

    let response = app
        .oneshot(post_receipt("null".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/receipts/process")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
