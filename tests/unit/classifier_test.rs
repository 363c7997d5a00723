//! Tests for classifier implementations
//!
//! The static table must be total; the language-model classifier must fall
//! back to it on every failure.

use mau2::adapters::build_classifier;
use mau2::adapters::llm::LlmClassifier;
use mau2::adapters::static_table::{self, StaticClassifier};
use mau2::config::{ClassifierConfig, ClassifierMode};
use mau2::core::models::{NotificationLevel, PetitionCategory, ReportType, RoutingSource, Urgency};
use mau2::core::ports::Classifier;
use mau2::core::services::{AnalyticsSnapshot, submit_petition, submit_report};

use crate::common::fixtures;
use crate::common::mocks::{FailingBackend, ScriptedBackend, StatusBackend};

// =============================================================================
// STATIC TABLE
// =============================================================================

#[test]
fn test_static_table_is_total_over_report_types() {
    for t in ReportType::ALL {
        let routing = StaticClassifier.route_report(t, "", "");
        assert!(!routing.department.is_empty(), "{t} has no department");
        assert_eq!(routing.source, RoutingSource::Static);
        assert_eq!(routing.confidence, "rule-based");
    }
}

#[test]
fn test_static_table_is_total_over_categories() {
    for c in PetitionCategory::ALL {
        let categorization = StaticClassifier.categorize_petition(c, "", "");
        assert_eq!(categorization.category, c);
        assert!(!categorization.department.is_empty(), "{c} has no department");
        assert_eq!(categorization.source, RoutingSource::Static);
    }
}

#[test]
fn test_static_table_entries() {
    assert_eq!(
        static_table::report_route(ReportType::Pothole),
        ("Public Works - Roads", Urgency::Medium)
    );
    assert_eq!(
        static_table::report_route(ReportType::TrafficSignal),
        ("Department of Transportation", Urgency::High)
    );
    assert_eq!(
        static_table::petition_department(PetitionCategory::Healthcare),
        "Public Health Department"
    );
}

#[test]
fn test_build_static_classifier() {
    let classifier = build_classifier(&ClassifierConfig::default()).unwrap();
    assert_eq!(classifier.name(), "static");
}

#[cfg(not(feature = "llm"))]
#[test]
fn test_remote_mode_requires_llm_feature() {
    let config = ClassifierConfig {
        mode: ClassifierMode::Remote,
        ..ClassifierConfig::default()
    };
    let err = build_classifier(&config).err().unwrap();
    assert!(err.to_string().contains("llm"));
}

#[cfg(feature = "llm")]
#[test]
fn test_remote_mode_builds_with_llm_feature() {
    let config = ClassifierConfig {
        mode: ClassifierMode::Remote,
        api_key_env: "MAU2_TEST_UNSET_KEY".to_string(),
        ..ClassifierConfig::default()
    };
    let classifier = build_classifier(&config).unwrap();
    assert_eq!(classifier.name(), "remote");
    // No key: the call fails locally and the table answers
    let routing = classifier.route_report(ReportType::Noise, "", "");
    assert_eq!(routing.source, RoutingSource::Fallback);
}

// =============================================================================
// LANGUAGE-MODEL CLASSIFIER
// =============================================================================

#[test]
fn test_model_reply_is_used() {
    let classifier = LlmClassifier::new(ScriptedBackend::new(
        "Department: Roads Authority\nUrgency: high",
    ));

    let routing = classifier.route_report(ReportType::Pothole, "sinkhole", "Main St");

    assert_eq!(routing.department, "Roads Authority");
    assert_eq!(routing.urgency, Urgency::High);
    assert_eq!(routing.source, RoutingSource::Remote);
    assert_eq!(routing.confidence, "model");
}

#[test]
fn test_prompt_carries_report_text() {
    let backend = ScriptedBackend::new("Department: X");
    let classifier = LlmClassifier::new(&backend);

    classifier.route_report(ReportType::Graffiti, "tagged bus stop", "Oak Rd");

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Graffiti"));
    assert!(prompts[0].contains("tagged bus stop"));
    assert!(prompts[0].contains("Oak Rd"));
}

#[test]
fn test_missing_urgency_uses_table_default() {
    let classifier = LlmClassifier::new(ScriptedBackend::new("Department: Streets Office"));
    let routing = classifier.route_report(ReportType::WaterLeak, "", "");
    assert_eq!(routing.department, "Streets Office");
    assert_eq!(routing.urgency, Urgency::High);
    assert_eq!(routing.source, RoutingSource::Remote);
}

#[test]
fn test_transport_failure_falls_back() {
    let classifier = LlmClassifier::new(FailingBackend);
    let routing = classifier.route_report(ReportType::Pothole, "large hole", "Main St");

    assert_eq!(routing.department, "Public Works - Roads");
    assert_eq!(routing.urgency, Urgency::Medium);
    assert_eq!(routing.source, RoutingSource::Fallback);
    assert_eq!(routing.confidence, "rule-based");
}

#[test]
fn test_http_error_falls_back() {
    let classifier = LlmClassifier::new(StatusBackend(503));
    let categorization =
        classifier.categorize_petition(PetitionCategory::Transportation, "Bus", "More buses");
    assert_eq!(categorization.department, "Department of Transportation");
    assert_eq!(categorization.source, RoutingSource::Fallback);
}

#[test]
fn test_unparseable_reply_falls_back() {
    let classifier = LlmClassifier::new(ScriptedBackend::new("I'm not sure, sorry."));
    let routing = classifier.route_report(ReportType::Noise, "", "");
    assert_eq!(routing.department, "Code Enforcement");
    assert_eq!(routing.source, RoutingSource::Fallback);
}

#[test]
fn test_model_may_correct_petition_category() {
    let classifier = LlmClassifier::new(ScriptedBackend::new(
        "Category: Environment\nDepartment: Parks Board",
    ));
    let categorization = classifier.categorize_petition(
        PetitionCategory::Transportation,
        "Save the park",
        "Stop the parking lot",
    );
    assert_eq!(categorization.category, PetitionCategory::Environment);
    assert_eq!(categorization.department, "Parks Board");
    assert_eq!(categorization.source, RoutingSource::Remote);
}

#[test]
fn test_unknown_model_category_keeps_user_choice() {
    let classifier = LlmClassifier::new(ScriptedBackend::new(
        "Category: Astronomy\nDepartment: Observatory",
    ));
    let categorization = classifier.categorize_petition(PetitionCategory::Education, "", "");
    assert_eq!(categorization.category, PetitionCategory::Education);
    assert_eq!(categorization.department, "Observatory");
}

// =============================================================================
// INTAKE WITH A FAILING REMOTE
// =============================================================================

#[test]
fn test_intake_records_fallback_routing() {
    let classifier = LlmClassifier::new(FailingBackend);
    let mut session = fixtures::session();

    let report = submit_report(&mut session, &classifier, &fixtures::pothole_report()).unwrap();
    let form = fixtures::petition_form("Title", "Healthcare", "Body");
    let petition = submit_petition(&mut session, &classifier, &form).unwrap();

    assert_eq!(report.routing.source, RoutingSource::Fallback);
    assert_eq!(petition.routing_source, RoutingSource::Fallback);
    assert_eq!(petition.department, "Public Health Department");
    assert_eq!(AnalyticsSnapshot::collect(&session).fallback_routings, 2);

    let warnings: Vec<_> = session
        .notifications()
        .iter()
        .filter(|n| n.level == NotificationLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].message.contains(&report.id));
}
