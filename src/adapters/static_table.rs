//! Static routing table
//!
//! Fixed department and urgency per report type and a fixed public body per
//! petition category. The table is total: every enumerated input has an
//! entry, so this classifier never fails.

use crate::core::models::{
    Categorization, PetitionCategory, RULE_BASED_CONFIDENCE, ReportType, Routing, RoutingSource,
    Urgency,
};
use crate::core::ports::Classifier;

/// Department and default urgency for a report type
#[must_use]
pub const fn report_route(report_type: ReportType) -> (&'static str, Urgency) {
    match report_type {
        ReportType::Pothole => ("Public Works - Roads", Urgency::Medium),
        ReportType::Streetlight => ("Public Works - Street Lighting", Urgency::Low),
        ReportType::IllegalDumping => ("Environmental Services", Urgency::High),
        ReportType::Graffiti => ("Parks & Public Spaces", Urgency::Low),
        ReportType::WaterLeak => ("Water & Utilities", Urgency::High),
        ReportType::Noise => ("Code Enforcement", Urgency::Low),
        ReportType::TrafficSignal => ("Department of Transportation", Urgency::High),
        ReportType::Other => ("General Services", Urgency::Medium),
    }
}

/// Public body responsible for a petition category
#[must_use]
pub const fn petition_department(category: PetitionCategory) -> &'static str {
    match category {
        PetitionCategory::Transportation => "Department of Transportation",
        PetitionCategory::Environment => "Environmental Protection Office",
        PetitionCategory::Infrastructure => "Public Works Department",
        PetitionCategory::PublicSafety => "Police & Public Safety",
        PetitionCategory::Education => "Board of Education",
        PetitionCategory::Healthcare => "Public Health Department",
    }
}

/// Classifier answering from the static table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticClassifier;

impl StaticClassifier {
    /// Table answer for a report type
    #[must_use]
    pub fn routing(report_type: ReportType) -> Routing {
        let (department, urgency) = report_route(report_type);
        Routing {
            department: department.to_string(),
            urgency,
            source: RoutingSource::Static,
            confidence: RULE_BASED_CONFIDENCE.to_string(),
        }
    }

    /// Table answer for a petition category
    #[must_use]
    pub fn categorization(category: PetitionCategory) -> Categorization {
        Categorization {
            category,
            department: petition_department(category).to_string(),
            source: RoutingSource::Static,
            confidence: RULE_BASED_CONFIDENCE.to_string(),
        }
    }
}

impl Classifier for StaticClassifier {
    fn name(&self) -> &'static str {
        "static"
    }

    fn route_report(
        &self,
        report_type: ReportType,
        _description: &str,
        _location: &str,
    ) -> Routing {
        Self::routing(report_type)
    }

    fn categorize_petition(
        &self,
        category: PetitionCategory,
        _title: &str,
        _description: &str,
    ) -> Categorization {
        Self::categorization(category)
    }
}
