//! Tests for CLI output rendering

use mau2::adapters::StaticClassifier;
use mau2::core::models::{PetitionCategory, ReportType, Urgency};
use mau2::output::{OperationResult, OutputMode, ReportRoutingResult, RoutingTableResult};

#[test]
fn test_output_mode_default_is_human() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_routing_table_covers_every_input() {
    let table = RoutingTableResult::from_static_table();
    assert_eq!(table.reports.len(), ReportType::ALL.len());
    assert_eq!(table.petitions.len(), PetitionCategory::ALL.len());

    let pothole = &table.reports[0];
    assert_eq!(pothole.report_type, "Pothole");
    assert_eq!(pothole.department, "Public Works - Roads");
    assert_eq!(pothole.urgency, Urgency::Medium);
}

#[test]
fn test_routing_table_human() {
    let text = RoutingTableResult::from_static_table().human();
    assert!(text.contains("Reports"));
    assert!(text.contains("Petitions"));
    assert!(text.contains("Public Works - Roads"));
    assert!(text.contains("Board of Education"));
}

#[test]
fn test_routing_table_json() {
    let json = serde_json::to_value(RoutingTableResult::from_static_table()).unwrap();
    assert_eq!(json["reports"].as_array().unwrap().len(), 8);
    assert_eq!(json["petitions"][3]["department"], "Police & Public Safety");
    assert_eq!(json["reports"][2]["urgency"], "high");
}

#[test]
fn test_report_routing_human() {
    let result = ReportRoutingResult {
        report_type: "Water Leak".to_string(),
        routing: StaticClassifier::routing(ReportType::WaterLeak),
    };
    let text = result.human();
    assert!(text.starts_with("Water Leak -> "));
    assert!(text.contains("Water & Utilities"));
    assert!(text.contains("rule-based"));
}

#[test]
fn test_operation_result_json() {
    let result = OperationResult {
        success: false,
        message: "Config already exists".to_string(),
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Config already exists");
}
