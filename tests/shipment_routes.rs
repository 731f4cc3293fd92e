use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use shipment_wizard::workflows::shipment::{shipment_router, ShipmentWizardBlueprint};
use tower::ServiceExt;

async fn post_json(uri: &str, payload: Value) -> Response {
    shipment_router(ShipmentWizardBlueprint::standard())
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&payload).expect("payload serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds")
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn steps_route_returns_visible_steps_with_fields() {
    let response = post_json(
        "/api/v1/shipments/steps",
        json!({ "mode": "Air", "country": "Taiwan" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    let steps = body.as_array().expect("array of steps");
    let numbers: Vec<u64> = steps
        .iter()
        .map(|step| step["number"].as_u64().expect("step number"))
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 8, 9, 11, 12]);

    let freight = &steps[4];
    assert_eq!(freight["title"], "Air Freight Details");
    let names: Vec<&str> = freight["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|field| field["name"].as_str().expect("field name"))
        .collect();
    assert!(names.contains(&"AWB"));
    assert!(names.contains(&"Data_Logger_Serial"));
    assert!(!names.contains(&"BOL_No"));
}

#[tokio::test]
async fn steps_route_accepts_empty_selection() {
    let response = post_json("/api/v1/shipments/steps", json!({})).await;
    let body = read_json_body(response).await;
    assert_eq!(body.as_array().expect("array of steps").len(), 9);
}

#[tokio::test]
async fn validate_route_reports_missing_basic_information() {
    let response = post_json(
        "/api/v1/shipments/validate",
        json!({ "step": 1, "record": { "Shipment": "5862926", "Mode": "Sea" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["summary"], "2 fields require attention");
    assert_eq!(body["errors"][0]["field"], "Loading_Date");
    assert_eq!(body["errors"][1]["field"], "Destination_Country");
}

#[tokio::test]
async fn review_route_includes_derived_values() {
    let response = post_json(
        "/api/v1/shipments/review",
        json!({
            "Shipment": "5862926",
            "Loading_Date": "2025-04-18",
            "Mode": "Sea",
            "Destination_Country": "Panama",
            "STO": "4500123456",
            "ETD": "2025-04-20",
            "ETA": "2025-05-15",
            "Cases_Stolen": 5,
            "lineItems": [
                { "id": "line-0001", "SKU": "MB-KS-20", "Cases": 100 }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["validation"]["valid"], true);
    assert_eq!(body["derived"]["lead_time_days"], 25);
    assert_eq!(body["derived"]["percent_pilfered"], 5.0);
    assert_eq!(body["destination_country"], "Panama");
}

#[tokio::test]
async fn review_route_rejects_unknown_columns() {
    let response = post_json(
        "/api/v1/shipments/review",
        json!({ "Shipment_Number": "5862926", "lineItems": [] }),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn validate_route_accepts_steps_past_the_table() {
    let response = post_json(
        "/api/v1/shipments/validate",
        json!({ "step": 300, "record": {} }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["step"], 300);
    assert_eq!(body["valid"], true);
}

#[tokio::test]
async fn review_route_treats_cleared_values_as_blank() {
    let response = post_json(
        "/api/v1/shipments/review",
        json!({
            "Shipment": "5862926",
            "Mode": "Sea",
            "ETD": null,
            "ETA": "2025-05-15",
            "lineItems": []
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["derived"]["lead_time_days"], Value::Null);
    assert_eq!(body["mode"], "Sea");
}
