//! Tests for the domain models

use mau2::core::models::{
    ANONYMOUS, Categorization, Petition, PetitionCategory, PetitionStatus, Privacy, Report,
    ReportStatus, ReportType, Routing, RoutingSource, Urgency,
};

fn routing() -> Routing {
    Routing {
        department: "Public Works - Roads".to_string(),
        urgency: Urgency::Medium,
        source: RoutingSource::Static,
        confidence: "rule-based".to_string(),
    }
}

fn categorization() -> Categorization {
    Categorization {
        category: PetitionCategory::Transportation,
        department: "Department of Transportation".to_string(),
        source: RoutingSource::Static,
        confidence: "rule-based".to_string(),
    }
}

// =============================================================================
// ENUMERATED FIELDS
// =============================================================================

#[test]
fn test_category_parse_is_lenient() {
    for input in ["Public Safety", "public_safety", "PUBLIC-SAFETY", " publicsafety "] {
        assert_eq!(input.parse::<PetitionCategory>(), Ok(PetitionCategory::PublicSafety));
    }
}

#[test]
fn test_category_parse_rejects_unknown() {
    let err = "Astronomy".parse::<PetitionCategory>().unwrap_err();
    assert!(err.contains("Invalid category: Astronomy"));
    assert!(err.contains("Healthcare"));
}

#[test]
fn test_report_type_parse_matches_labels() {
    for t in ReportType::ALL {
        assert_eq!(t.label().parse::<ReportType>(), Ok(t));
    }
    assert_eq!("water_leak".parse::<ReportType>(), Ok(ReportType::WaterLeak));
    assert!("Earthquake".parse::<ReportType>().is_err());
}

#[test]
fn test_report_type_serializes_snake_case() {
    let json = serde_json::to_string(&ReportType::IllegalDumping).unwrap();
    assert_eq!(json, "\"illegal_dumping\"");
}

#[test]
fn test_urgency_parse_and_display() {
    assert_eq!("HIGH".parse::<Urgency>(), Ok(Urgency::High));
    assert_eq!(Urgency::Low.to_string(), "low");
    assert_eq!(Urgency::default(), Urgency::Medium);
    assert!("urgent".parse::<Urgency>().is_err());
}

#[test]
fn test_privacy_parse() {
    assert_eq!("Private".parse::<Privacy>(), Ok(Privacy::Private));
    assert_eq!(Privacy::default(), Privacy::Public);
    assert!("secret".parse::<Privacy>().is_err());
}

#[test]
fn test_privacy_deserializes_like_parse() {
    let privacy: Privacy = serde_json::from_str(r#""Public""#).unwrap();
    assert_eq!(privacy, Privacy::Public);
    let privacy: Privacy = serde_json::from_str(r#"" private ""#).unwrap();
    assert_eq!(privacy, Privacy::Private);

    let err = serde_json::from_str::<Privacy>(r#""secret""#).unwrap_err();
    assert!(err.to_string().contains("Invalid privacy: secret"));
    assert_eq!(serde_json::to_string(&Privacy::Private).unwrap(), r#""private""#);
}

// =============================================================================
// PETITION
// =============================================================================

#[test]
fn test_petition_starts_active_with_one_vote() {
    let p = Petition::new(
        "PET-0001".to_string(),
        "Fix the bridge".to_string(),
        "It is crumbling".to_string(),
        "Alice".to_string(),
        categorization(),
    );
    assert_eq!(p.vote_count, 1);
    assert_eq!(p.status, PetitionStatus::Active);
    assert_eq!(p.category, PetitionCategory::Transportation);
    assert_eq!(p.department, "Department of Transportation");
    assert_eq!(p.routing_source, RoutingSource::Static);
    assert!(p.response.is_none());
}

#[test]
fn test_petition_upvote_increments_by_one() {
    let mut p = Petition::new(
        "PET-0001".to_string(),
        "t".to_string(),
        "d".to_string(),
        "c".to_string(),
        categorization(),
    );
    assert_eq!(p.upvote(), 2);
    assert_eq!(p.upvote(), 3);
    assert_eq!(p.vote_count, 3);
}

#[test]
fn test_petition_respond_marks_responded() {
    let mut p = Petition::new(
        "PET-0001".to_string(),
        "t".to_string(),
        "d".to_string(),
        "c".to_string(),
        categorization(),
    );
    p.respond("City Council".to_string(), "Scheduled for March".to_string());
    assert_eq!(p.status, PetitionStatus::Responded);
    let response = p.response.unwrap();
    assert_eq!(response.responder, "City Council");
    assert_eq!(response.body, "Scheduled for March");
}

#[test]
fn test_petition_json_omits_empty_optionals() {
    let p = Petition::new(
        "PET-0001".to_string(),
        "t".to_string(),
        "d".to_string(),
        "c".to_string(),
        categorization(),
    );
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["status"], "active");
    assert_eq!(json["routing_source"], "static");
    assert!(json.get("location").is_none());
    assert!(json.get("evidence").is_none());
    assert!(json.get("response").is_none());
}

// =============================================================================
// REPORT
// =============================================================================

#[test]
fn test_report_incognito_hides_reporter() {
    let r = Report::new(
        "RPT-0001".to_string(),
        ReportType::Pothole,
        "large hole".to_string(),
        "Main St".to_string(),
        Some("Alice".to_string()),
        true,
        routing(),
    );
    assert_eq!(r.reporter, ANONYMOUS);
    assert!(r.is_incognito);
    assert_eq!(r.status, ReportStatus::Submitted);
}

#[test]
fn test_report_without_name_is_anonymous() {
    let r = Report::new(
        "RPT-0001".to_string(),
        ReportType::Noise,
        "loud".to_string(),
        "Elm St".to_string(),
        None,
        false,
        routing(),
    );
    assert_eq!(r.reporter, ANONYMOUS);
    assert!(!r.is_incognito);
}

#[test]
fn test_report_json_uses_type_key() {
    let r = Report::new(
        "RPT-0001".to_string(),
        ReportType::Pothole,
        "large hole".to_string(),
        "Main St".to_string(),
        Some("Alice".to_string()),
        false,
        routing(),
    );
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["type"], "pothole");
    assert_eq!(json["status"], "submitted");
    assert_eq!(json["reporter"], "Alice");
    assert_eq!(json["routing"]["urgency"], "medium");
}

// =============================================================================
// ROUTING
// =============================================================================

#[test]
fn test_into_fallback_only_changes_source() {
    let fallback = routing().into_fallback();
    assert_eq!(fallback.source, RoutingSource::Fallback);
    assert_eq!(fallback.department, "Public Works - Roads");
    assert_eq!(fallback.confidence, "rule-based");

    let fallback = categorization().into_fallback();
    assert_eq!(fallback.source, RoutingSource::Fallback);
    assert_eq!(fallback.category, PetitionCategory::Transportation);
}
