//! Integration tests for the promotion statistics service.
//!
//! This test suite drives the HTTP API end to end over the bundled snapshot
//! and in-memory rosters:
//! - Headline counters and rates
//! - Position, grade and bracket tables
//! - Leaderboard ordering and the eligibility threshold boundary
//! - Employee listing
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use promotion_stats::api::{AppState, create_router};
use promotion_stats::config::ConfigLoader;
use promotion_stats::models::EmployeeRow;
use promotion_stats::snapshot::{InMemorySnapshot, JsonFileSnapshot};

// =============================================================================
// Test Helpers
// =============================================================================

const EVALUATION_DATE: &str = "2025-07-01";

fn create_router_for_test() -> Router {
    let loader = ConfigLoader::load("./config/service.yaml").expect("Failed to load config");
    let snapshot = JsonFileSnapshot::new(&loader.config().snapshot.path);
    create_router(AppState::new(snapshot))
}

fn router_over(rows: Vec<EmployeeRow>) -> Router {
    create_router(AppState::new(InMemorySnapshot::new("test", rows)))
}

fn create_row(id: &str, position: &str, degree: u8, current: &str, points: [i64; 3]) -> EmployeeRow {
    EmployeeRow {
        id: id.to_string(),
        name: format!("Employee {}", id),
        birth_date: "1980-01-01".to_string(),
        first_appointment_date: "2005-01-01".to_string(),
        current_appointment_date: current.to_string(),
        position: position.to_string(),
        degree,
        position_seniority_points: Decimal::from(points[0]),
        director_points: Decimal::from(points[1]),
        training_points: Decimal::from(points[2]),
    }
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_report(router: Router) -> Value {
    let (status, body) = get(router, &format!("/stats?evaluation_date={}", EVALUATION_DATE)).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    body["data"].clone()
}

fn assert_float(value: &Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {}", value));
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Bundled snapshot
// =============================================================================

#[tokio::test]
async fn test_headline_counters() {
    let report = get_report(create_router_for_test()).await;

    assert_eq!(report["totalEmployees"], 12);
    assert_eq!(report["eligibleEmployees"], 9);
    assert_eq!(report["promotedEmployees"], 5);
    assert_float(&report["promotionRate"], 41.67);
}

#[tokio::test]
async fn test_detailed_analysis_averages() {
    let report = get_report(create_router_for_test()).await;
    let analysis = &report["detailedAnalysis"];

    assert_float(&analysis["averageAge"], 40.1);
    assert_float(&analysis["averageSeniority"], 16.8);
    assert_float(&analysis["averagePoints"], 34.04);
    assert_float(&analysis["eligibilityRate"], 75.0);
}

#[tokio::test]
async fn test_position_stats() {
    let report = get_report(create_router_for_test()).await;

    assert_eq!(
        report["positionStats"],
        json!({
            "Accountant": { "total": 3, "eligible": 2, "promoted": 1 },
            "Administrator": { "total": 2, "eligible": 2, "promoted": 2 },
            "Engineer": { "total": 4, "eligible": 3, "promoted": 2 },
            "Technician": { "total": 3, "eligible": 2, "promoted": 0 }
        })
    );

    let promotions = &report["detailedAnalysis"]["promotionsByPosition"];
    assert_float(&promotions["Engineer"]["rate"], 50.0);
    assert_float(&promotions["Administrator"]["rate"], 100.0);
    assert_float(&promotions["Technician"]["rate"], 0.0);
    assert_float(&promotions["Accountant"]["rate"], 33.33);
    assert_eq!(promotions["Accountant"]["promoted"], 1);
    assert_eq!(promotions["Accountant"]["total"], 3);
}

#[tokio::test]
async fn test_degree_stats() {
    let report = get_report(create_router_for_test()).await;
    let degrees = &report["degreeStats"];

    assert_eq!(degrees["6"], json!({ "total": 2, "eligible": 1, "promoted": 0 }));
    for grade in ["8", "9", "10", "11", "12"] {
        assert_eq!(
            degrees[grade],
            json!({ "total": 1, "eligible": 1, "promoted": 1 }),
            "grade {}",
            grade
        );
    }
    let promoted: u64 = degrees
        .as_object()
        .unwrap()
        .values()
        .map(|stat| stat["promoted"].as_u64().unwrap())
        .sum();
    assert_eq!(promoted, 5);
}

#[tokio::test]
async fn test_bracket_histograms() {
    let report = get_report(create_router_for_test()).await;

    assert_eq!(
        report["ageGroupStats"],
        json!({ "20-29": 2, "30-39": 4, "40-49": 4, "50-59": 1, "60+": 1 })
    );
    assert_eq!(
        report["seniorityStats"],
        json!({ "0-4": 1, "5-9": 3, "10-14": 2, "15-19": 2, "20+": 4 })
    );
}

#[tokio::test]
async fn test_leaderboard_order() {
    let report = get_report(create_router_for_test()).await;
    let top = report["detailedAnalysis"]["topPerformers"].as_array().unwrap();

    let names: Vec<&str> = top.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "Youssef Amrani",
            "Rachid Ouazzani",
            "Hicham Belkadi",
            "Karim Haddad",
            "Adil Berrada",
            "Amina Benali",
            "Omar Tazi",
            "Sara Idrissi",
            "Meryem Alaoui",
        ]
    );

    assert_eq!(top[0]["position"], "Engineer");
    assert_eq!(top[0]["degree"], 11);
    assert!(top[0].get("compositeScore").is_none());
    assert_float(&top[5]["trainingPoints"], 4.25);
}

#[tokio::test]
async fn test_threshold_boundary_in_position_days() {
    let report = get_report(create_router_for_test()).await;
    let top = report["detailedAnalysis"]["topPerformers"].as_array().unwrap();
    let names: Vec<&str> = top.iter().map(|e| e["name"].as_str().unwrap()).collect();

    // 720 days in position
    assert!(names.contains(&"Omar Tazi"));
    // 719 days in position
    assert!(!names.contains(&"Nadia Cherkaoui"));
}

#[tokio::test]
async fn test_repeated_requests_report_the_same_statistics() {
    let first = get_report(create_router_for_test()).await;
    let second = get_report(create_router_for_test()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_later_evaluation_date_promotes_more() {
    // Two years on, every current appointment has passed the threshold.
    let (status, body) = get(create_router_for_test(), "/stats?evaluation_date=2027-07-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["evaluation_date"], "2027-07-01");
    assert_eq!(body["data"]["eligibleEmployees"], 12);
    assert_eq!(body["data"]["promotedEmployees"], 7);
}

#[tokio::test]
async fn test_employee_listing() {
    let (status, body) = get(create_router_for_test(), "/employees").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 12);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 12);
    assert_eq!(data[0]["position"], "Accountant");
    assert_eq!(data[0]["degree"], 6);
    assert_eq!(data[0]["name"], "Nadia Cherkaoui");
    assert_eq!(data[11]["position"], "Technician");
    assert_eq!(data[11]["degree"], 4);
}

// =============================================================================
// In-memory rosters
// =============================================================================

#[tokio::test]
async fn test_empty_roster_reports_zeros() {
    let report = get_report(router_over(vec![])).await;

    assert_eq!(report["totalEmployees"], 0);
    assert_eq!(report["eligibleEmployees"], 0);
    assert_eq!(report["promotedEmployees"], 0);
    assert_float(&report["promotionRate"], 0.0);
    assert_eq!(report["positionStats"], json!({}));
    assert_eq!(report["degreeStats"], json!({}));
    assert_float(&report["detailedAnalysis"]["averageAge"], 0.0);
    assert_float(&report["detailedAnalysis"]["eligibilityRate"], 0.0);
    assert_eq!(report["detailedAnalysis"]["topPerformers"], json!([]));
}

#[tokio::test]
async fn test_single_eligible_employee_is_not_promoted() {
    let report = get_report(router_over(vec![create_row(
        "E1",
        "Engineer",
        5,
        "2020-01-01",
        [10, 10, 10],
    )]))
    .await;

    assert_eq!(report["eligibleEmployees"], 1);
    assert_eq!(report["promotedEmployees"], 0);
    assert_eq!(
        report["detailedAnalysis"]["topPerformers"]
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_ties_keep_input_order() {
    let rows = vec![
        create_row("E1", "Engineer", 5, "2020-01-01", [10, 0, 0]),
        create_row("E2", "Engineer", 5, "2020-01-01", [20, 0, 0]),
        create_row("E3", "Technician", 3, "2020-01-01", [10, 0, 0]),
    ];
    let report = get_report(router_over(rows)).await;

    let names: Vec<&str> = report["detailedAnalysis"]["topPerformers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Employee E2", "Employee E1", "Employee E3"]);
    // floor(3 * 0.6) = 1
    assert_eq!(report["promotedEmployees"], 1);
}

#[tokio::test]
async fn test_leaderboard_is_capped_at_ten() {
    let rows: Vec<EmployeeRow> = (0..15)
        .map(|i| create_row(&format!("E{:02}", i), "Clerk", 2, "2020-01-01", [i, 0, 0]))
        .collect();
    let report = get_report(router_over(rows)).await;

    let top = report["detailedAnalysis"]["topPerformers"].as_array().unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0]["name"], "Employee E14");
    assert_eq!(report["promotedEmployees"], 9);
}

#[tokio::test]
async fn test_numeric_string_points_are_accepted() {
    let snapshot_json = r#"[{
        "id": "E1",
        "name": "Text Points",
        "birth_date": "1980-01-01",
        "first_appointment_date": "2005-01-01",
        "current_appointment_date": "2020-01-01",
        "position": "Clerk",
        "degree": 2,
        "position_seniority_points": "12.5",
        "director_points": "3",
        "training_points": 1.5
    }]"#;
    let rows: Vec<EmployeeRow> = serde_json::from_str(snapshot_json).unwrap();
    let report = get_report(router_over(rows)).await;

    assert_float(&report["detailedAnalysis"]["averagePoints"], 17.0);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_evaluation_date_returns_400() {
    let (status, body) = get(create_router_for_test(), "/stats?evaluation_date=01/07/2025").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn test_unreadable_snapshot_returns_503() {
    let router = create_router(AppState::new(JsonFileSnapshot::new("./data/missing.json")));

    let (status, body) = get(router, "/employees").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SNAPSHOT_UNAVAILABLE");
}

#[tokio::test]
async fn test_future_appointment_is_counted_but_not_eligible() {
    let mut scheduled = create_row("E2", "Engineer", 5, "2025-07-02", [10, 10, 10]);
    scheduled.first_appointment_date = "2025-09-01".to_string();
    let report = get_report(router_over(vec![
        create_row("E1", "Engineer", 5, "2020-01-01", [10, 10, 10]),
        scheduled,
    ]))
    .await;

    assert_eq!(report["totalEmployees"], 2);
    assert_eq!(report["eligibleEmployees"], 1);
    assert_eq!(report["promotedEmployees"], 0);
    assert_eq!(report["seniorityStats"]["0-4"], 1);
}

#[tokio::test]
async fn test_future_birth_date_returns_data_integrity_error() {
    let mut unborn = create_row("E1", "Engineer", 5, "2020-01-01", [10, 10, 10]);
    unborn.birth_date = "2026-01-01".to_string();

    let (status, body) = get(
        router_over(vec![unborn]),
        &format!("/stats?evaluation_date={}", EVALUATION_DATE),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATA_INTEGRITY_ERROR");
    assert!(body.get("details").is_none());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_point_overflow_returns_data_integrity_error() {
    let snapshot_json = r#"[{
        "id": "E1",
        "name": "Huge Points",
        "birth_date": "1980-01-01",
        "first_appointment_date": "2005-01-01",
        "current_appointment_date": "2020-01-01",
        "position": "Clerk",
        "degree": 2,
        "position_seniority_points": "79228162514264337593543950335",
        "director_points": "79228162514264337593543950335",
        "training_points": "79228162514264337593543950335"
    }]"#;
    let rows: Vec<EmployeeRow> = serde_json::from_str(snapshot_json).unwrap();

    let (status, body) = get(
        router_over(rows),
        &format!("/stats?evaluation_date={}", EVALUATION_DATE),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATA_INTEGRITY_ERROR");
}

#[tokio::test]
async fn test_negative_points_return_data_integrity_error() {
    let router = router_over(vec![create_row(
        "E1",
        "Engineer",
        5,
        "2020-01-01",
        [10, -1, 10],
    )]);

    let (status, body) = get(router, &format!("/stats?evaluation_date={}", EVALUATION_DATE)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "DATA_INTEGRITY_ERROR");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = create_router_for_test()
        .oneshot(Request::builder().uri("/promote").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
