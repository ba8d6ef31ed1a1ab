use super::helpers::{expect_status, post_json, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

const PARSE: &str = "/api/v1/addresses/parse";
const PARSE_BATCH: &str = "/api/v1/addresses/parse/batch";

#[tokio::test]
async fn parses_a_full_address_within_range() {
    let app = spawn_app();

    let res = post_json(
        &app.app,
        PARSE,
        &json!({
            "latitude": 12.87,
            "longitude": 77.661,
            "address": "Flat 102 Magnifica Sobha Silicon Oasis"
        }),
    )
    .await;
    let res = expect_status(res, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = read_json(res).await;
    assert_eq!(body["societyName"], "Sobha Silicon Oasis");
    assert_eq!(body["block"], "Magnifica");
    assert_eq!(body["flat"], "102");
    assert_eq!(body["original"], "Flat 102 Magnifica Sobha Silicon Oasis");
    assert_eq!(body["latitude"], 12.87);
    assert!(body["id"].is_string());
    assert!(body["timestamp"].is_string());
    assert!(
        body["proximityNote"]
            .as_str()
            .expect("note is a string")
            .contains("within 5 km range of Sobha Silicon Oasis")
    );
}

#[tokio::test]
async fn accepts_coordinates_posted_as_strings() {
    let app = spawn_app();

    let res = post_json(
        &app.app,
        PARSE,
        &json!({
            "latitude": "13.5",
            "longitude": "78.0",
            "address": "Sobha Silicon Oasis block Vivo"
        }),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["societyName"], "Sobha Silicon Oasis");
    assert!(body["block"].is_null());
    assert!(body["flat"].is_null());
    assert!(
        body["proximityNote"]
            .as_str()
            .unwrap_or_default()
            .starts_with("Location is beyond 5 km range")
    );
}

#[tokio::test]
async fn unknown_address_is_reported_as_not_serviceable() {
    let app = spawn_app();

    let res = post_json(
        &app.app,
        PARSE,
        &json!({ "latitude": 12.9, "longitude": 77.6, "address": "12 Main Road Koramangala" }),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["societyName"], "Not Serviceable");
    assert_eq!(body["proximityNote"], "No matching society found");
    assert!(body["block"].is_null());
}

#[tokio::test]
async fn rejects_invalid_input_before_resolution() {
    let app = spawn_app();

    let cases = [
        json!({ "latitude": "abc", "longitude": 77.6, "address": "Sobha" }),
        json!({ "latitude": 95.0, "longitude": 77.6, "address": "Sobha" }),
        json!({ "latitude": 0.0, "longitude": 0.0, "address": "Sobha" }),
        json!({ "latitude": 12.9, "longitude": 77.6, "address": "" }),
        json!({ "latitude": 12.9, "longitude": 77.6, "address": "   " }),
        json!({ "latitude": 12.9, "longitude": 77.6, "address": "a".repeat(501) }),
    ];

    for case in cases {
        let res = post_json(&app.app, PARSE, &case).await;
        let res = expect_status(res, StatusCode::BAD_REQUEST).await;
        let body: Value = read_json(res).await;
        assert!(
            body["error"].as_str().is_some_and(|e| !e.is_empty()),
            "missing error message for {case}"
        );
    }
}

#[tokio::test]
async fn padding_does_not_count_towards_the_address_limit() {
    let app = spawn_app();
    let address = format!("  Sobha Silicon Oasis {}  ", "x".repeat(478));

    let res = post_json(
        &app.app,
        PARSE,
        &json!({ "latitude": 12.87, "longitude": 77.661, "address": address }),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["societyName"], "Sobha Silicon Oasis");
    assert_eq!(body["original"], address);
}

#[tokio::test]
async fn malformed_bodies_are_client_errors() {
    let app = spawn_app();

    let missing_address = post_json(&app.app, PARSE, &json!({ "latitude": 12.9, "longitude": 77.6 })).await;
    assert!(missing_address.status().is_client_error());
}

#[tokio::test]
async fn oversized_bodies_are_refused() {
    let app = spawn_app();

    let res = post_json(
        &app.app,
        PARSE,
        &json!({ "latitude": 12.9, "longitude": 77.6, "address": "x".repeat(100 * 1024) }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn batch_maps_headers_and_reports_row_errors() {
    let app = spawn_app();

    let res = post_json(
        &app.app,
        PARSE_BATCH,
        &json!({
            "records": [
                { "Latitude": "12.87", "Longitude": "77.661", "Address": "Flat 102 Magnifica Sobha Silicon Oasis" },
                { "lat": "not a number", "lng": "77.66", "address": "Vivo 203" },
                { "lat": "12.9031", "lng": "77.6619", "landmark": "near the lake" },
                { "lat": 12.8341, "long": 77.6625, "Delivery Location": "Prestige Sunrise Park A 101" }
            ]
        }),
    )
    .await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["processed"], 4);
    assert_eq!(
        body["errors"],
        json!(["Invalid coordinates for row 2", "Missing address for row 3"])
    );

    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["societyName"], "Sobha Silicon Oasis");
    assert_eq!(results[0]["flat"], "102");
    assert_eq!(results[1]["societyName"], "Prestige Sunrise Park");
    assert_eq!(results[1]["original"], "Prestige Sunrise Park A 101");
}

#[tokio::test]
async fn batch_at_the_size_limit_resolves_every_row() {
    let app = spawn_app();
    let address = format!("Flat 203 Vivo Sobha Silicon Oasis {}", "landmark ".repeat(50));
    let rows = vec![json!({ "lat": "12.87", "lng": "77.661", "address": address.trim() }); 5];

    let res = post_json(&app.app, PARSE_BATCH, &json!({ "records": rows })).await;
    let body: Value = read_json(expect_status(res, StatusCode::OK).await).await;

    assert_eq!(body["processed"], 5);
    assert_eq!(body["errors"], json!([]));
    for result in body["results"].as_array().expect("results array") {
        assert_eq!(result["block"], "Vivo");
        assert_eq!(result["flat"], "203");
    }
}

#[tokio::test]
async fn batch_rejects_empty_and_oversized_imports() {
    let app = spawn_app();

    let empty = post_json(&app.app, PARSE_BATCH, &json!({ "records": [] })).await;
    expect_status(empty, StatusCode::BAD_REQUEST).await;

    let rows = vec![json!({ "lat": "12.87", "lng": "77.661", "address": "Sobha" }); 6];
    let too_many = post_json(&app.app, PARSE_BATCH, &json!({ "records": rows })).await;
    expect_status(too_many, StatusCode::BAD_REQUEST).await;
}
