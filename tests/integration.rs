//! Integration tests for the time-accounting engine API.
//!
//! This test suite covers both endpoints end to end:
//! - Deriving normal, vacation, and sick entries
//! - Overnight shifts and night-bonus minutes
//! - Monthly and yearly summaries
//! - Error cases (malformed JSON, missing fields, bad clock times and month keys)

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/tracker").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn entry(date: &str, kind: &str, worked: i64, night: i64) -> Value {
    json!({
        "date": date,
        "kind": kind,
        "worked_minutes": worked,
        "night_minutes": night
    })
}

// =============================================================================
// Entry derivation
// =============================================================================

#[tokio::test]
async fn test_derive_daytime_workday() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-15",
            "kind": "normal",
            "start_time": "09:00",
            "end_time": "17:00",
            "pause_minutes": 60
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["date"], "2026-01-15");
    assert_eq!(body["entry"]["kind"], "normal");
    assert_eq!(body["entry"]["worked_minutes"], 420);
    assert_eq!(body["entry"]["night_minutes"], 0);
    assert_eq!(body["worked_time"], "07:00");
    assert_eq!(body["night_time"], "00:00");
}

#[tokio::test]
async fn test_derive_full_night_shift() {
    // 20:00 -> 06:00 without a pause: every minute is in the night window.
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "20:00",
            "end_time": "06:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["worked_minutes"], 600);
    assert_eq!(body["entry"]["night_minutes"], 600);
    assert_eq!(body["worked_time"], "10:00");
    assert_eq!(body["night_time"], "10:00");
}

#[tokio::test]
async fn test_derive_overnight_shift_with_pause() {
    // 22:00 -> 06:00 with a 30-minute pause centered mid-shift.
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "22:00",
            "end_time": "06:00",
            "pause_minutes": 30
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["worked_minutes"], 450);
    assert_eq!(body["entry"]["night_minutes"], 450);
}

#[tokio::test]
async fn test_derive_evening_shift_counts_window_minutes_only() {
    // 18:00 -> 22:00: two hours fall at/after 20:00.
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "18:00",
            "end_time": "22:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["worked_minutes"], 240);
    assert_eq!(body["entry"]["night_minutes"], 120);
}

#[tokio::test]
async fn test_derive_zero_length_shift() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "22:00",
            "end_time": "22:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["worked_minutes"], 0);
    assert_eq!(body["entry"]["night_minutes"], 0);
}

#[tokio::test]
async fn test_derive_accepts_out_of_range_clock_values() {
    // Range is deliberately not validated; only the HH:MM shape is.
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "09:00",
            "end_time": "25:99"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 1599 - 540 = 1059 minutes.
    assert_eq!(body["entry"]["worked_minutes"], 1059);
}

#[tokio::test]
async fn test_derive_vacation_entry() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-02-02",
            "kind": "vacation"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["kind"], "vacation");
    assert_eq!(body["entry"]["worked_minutes"], 480);
    assert_eq!(body["entry"]["night_minutes"], 0);
    assert_eq!(body["worked_time"], "08:00");
}

#[tokio::test]
async fn test_derive_sick_entry_ignores_clock_times() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-02-03",
            "kind": "sick",
            "start_time": "22:00",
            "end_time": "06:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["kind"], "sick");
    assert_eq!(body["entry"]["worked_minutes"], 480);
    assert_eq!(body["entry"]["night_minutes"], 0);
}

// =============================================================================
// Entry derivation: error cases
// =============================================================================

#[tokio::test]
async fn test_derive_rejects_bad_clock_time() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "nine",
            "end_time": "17:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CLOCK_TIME");
    assert!(body["message"].as_str().unwrap().contains("nine"));
}

#[tokio::test]
async fn test_derive_rejects_missing_separator() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal",
            "start_time": "0900",
            "end_time": "1700"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_CLOCK_TIME");
}

#[tokio::test]
async fn test_derive_normal_without_times_is_validation_error() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "normal"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("start_time"));
}

#[tokio::test]
async fn test_derive_rejects_unknown_kind() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "date": "2026-01-16",
            "kind": "holiday"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let code = body["code"].as_str().unwrap();
    assert!(code == "MALFORMED_JSON" || code == "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_derive_rejects_missing_date_field() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/entries/derive",
        json!({
            "kind": "normal",
            "start_time": "09:00",
            "end_time": "17:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_derive_rejects_invalid_json_syntax() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/entries/derive")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

// =============================================================================
// Summaries
// =============================================================================

#[tokio::test]
async fn test_summary_of_empty_snapshot_is_all_zero() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [],
            "month": "2026-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], "2026-01");
    assert_eq!(body["summary"]["worked_minutes"], 0);
    assert_eq!(body["summary"]["night_minutes"], 0);
    assert_eq!(body["summary"]["day_counts"]["normal"], 0);
    assert_eq!(body["summary"]["day_counts"]["vacation"], 0);
    assert_eq!(body["summary"]["day_counts"]["sick"], 0);
    assert_eq!(body["vacation"]["used"], 0);
    assert_eq!(body["vacation"]["allowance"], 30);
    assert_eq!(body["vacation"]["remaining"], 30);
}

#[tokio::test]
async fn test_summary_filters_to_requested_month() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [
                entry("2026-01-05", "normal", 480, 0),
                entry("2026-01-06", "normal", 450, 450),
                entry("2026-01-07", "vacation", 480, 0),
                entry("2026-01-08", "sick", 480, 0),
                entry("2026-02-02", "normal", 480, 0),
                entry("2025-01-05", "normal", 480, 0)
            ],
            "month": "2026-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["worked_minutes"], 1890);
    assert_eq!(body["summary"]["night_minutes"], 450);
    assert_eq!(body["summary"]["day_counts"]["normal"], 2);
    assert_eq!(body["summary"]["day_counts"]["vacation"], 1);
    assert_eq!(body["summary"]["day_counts"]["sick"], 1);
}

#[tokio::test]
async fn test_summary_vacation_counts_whole_year() {
    // Vacation days in other months of the same year still count.
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [
                entry("2026-01-07", "vacation", 480, 0),
                entry("2026-07-20", "vacation", 480, 0),
                entry("2026-07-21", "vacation", 480, 0),
                entry("2025-12-29", "vacation", 480, 0)
            ],
            "month": "2026-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacation"]["year"], 2026);
    assert_eq!(body["vacation"]["used"], 3);
    assert_eq!(body["vacation"]["remaining"], 27);
}

#[tokio::test]
async fn test_summary_honours_explicit_vacation_year() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [
                entry("2025-12-29", "vacation", 480, 0),
                entry("2026-01-07", "vacation", 480, 0)
            ],
            "month": "2026-01",
            "vacation_year": 2025
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacation"]["year"], 2025);
    assert_eq!(body["vacation"]["used"], 1);
}

#[tokio::test]
async fn test_summary_remaining_never_negative() {
    let entries: Vec<Value> = (1..=31)
        .map(|d| entry(&format!("2026-07-{d:02}"), "vacation", 480, 0))
        .collect();

    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": entries,
            "month": "2026-07"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vacation"]["used"], 31);
    assert_eq!(body["vacation"]["remaining"], 0);
}

#[tokio::test]
async fn test_summary_unpadded_month_key_is_normalized() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [entry("2026-03-02", "normal", 480, 0)],
            "month": "2026-3"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], "2026-03");
    assert_eq!(body["summary"]["day_counts"]["normal"], 1);
}

#[tokio::test]
async fn test_summary_rejects_bad_month_key() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [],
            "month": "nope"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MONTH_KEY");
}

#[tokio::test]
async fn test_summary_rejects_malformed_entry() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": [{"date": "2026-01-05"}],
            "month": "2026-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Derive-then-summarize flow
// =============================================================================

#[tokio::test]
async fn test_derived_entries_feed_the_summary() {
    let shifts = [
        ("2026-01-05", "09:00", "17:00", 60),
        ("2026-01-06", "22:00", "06:00", 30),
        ("2026-01-07", "18:00", "22:00", 0),
    ];

    let mut entries = Vec::new();
    for (date, start, end, pause) in shifts {
        let (status, body) = post_json(
            create_router_for_test(),
            "/entries/derive",
            json!({
                "date": date,
                "kind": "normal",
                "start_time": start,
                "end_time": end,
                "pause_minutes": pause
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        entries.push(body["entry"].clone());
    }

    let (status, body) = post_json(
        create_router_for_test(),
        "/summary",
        json!({
            "entries": entries,
            "month": "2026-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 420 + 450 + 240 worked, 0 + 450 + 120 night.
    assert_eq!(body["summary"]["worked_minutes"], 1110);
    assert_eq!(body["summary"]["night_minutes"], 570);
    assert_eq!(body["summary"]["day_counts"]["normal"], 3);
}
