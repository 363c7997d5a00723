//! Tests for API module
//!
//! Tests error types, response envelope, and handler functions.

// =============================================================================
// ERROR TYPES
// =============================================================================

mod error_tests {
    use mau2::api::{ApiError, ApiErrorData, ErrorCode};
    use mau2::core::services::IntakeError;

    #[test]
    fn test_error_code_not_found() {
        let err = ApiError::not_found("Petition not found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message, "Petition not found");
    }

    #[test]
    fn test_error_code_bad_request() {
        let err = ApiError::bad_request("Invalid input");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_error_code_internal() {
        let err = ApiError::internal("Something went wrong");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_api_error_display() {
        let display = ApiError::not_found("Resource missing").to_string();
        assert!(display.contains("NOT_FOUND"));
        assert!(display.contains("Resource missing"));
    }

    #[test]
    fn test_error_code_validation() {
        let err = ApiError::validation("Unknown category");
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code.as_str(), "VALIDATION_ERROR");
        assert_ne!(err.code, ApiError::bad_request("x").code);
    }

    #[test]
    fn test_intake_errors_map_to_status() {
        let err = ApiError::from(IntakeError::MissingFields(vec!["title"]));
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message, "Please fill in all required fields: title");

        for intake in [
            IntakeError::NoDraft,
            IntakeError::InvalidChoice("Invalid category: Space".to_string()),
            IntakeError::UnsupportedEvidence("notes.exe".to_string()),
        ] {
            let err = ApiError::from(intake);
            assert_eq!(err.code, ErrorCode::Validation, "{err}");
            assert_eq!(err.status_code(), 400);
        }

        let err = ApiError::from(IntakeError::PetitionNotFound("PET-0042".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.status_code(), 404);
        assert!(err.message.contains("PET-0042"));
    }

    #[test]
    fn test_error_data_from_api_error() {
        let data = ApiErrorData::from(&ApiError::bad_request("bad"));
        assert_eq!(data.code, "BAD_REQUEST");
        assert_eq!(data.message, "bad");
    }
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

mod response_tests {
    use mau2::api::ApiResponse;

    #[test]
    fn test_api_response_success() {
        let resp = ApiResponse::success("hello".to_string());
        assert!(resp.success);
        assert_eq!(resp.data.as_deref(), Some("hello"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_api_response_error_json() {
        let resp = ApiResponse::error("NOT_FOUND", "Petition not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json.get("data").is_none());
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

mod handler_tests {
    use mau2::adapters::StaticClassifier;
    use mau2::api::{self, ClassifyPetitionRequest, ClassifyReportRequest, NavigateRequest};
    use mau2::core::models::{RoutingSource, Urgency};
    use mau2::core::services::ReportForm;
    use mau2::pages::Page;

    use crate::common::fixtures;

    #[test]
    fn test_health() {
        let health = api::health(&StaticClassifier);
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, mau2::VERSION);
        assert_eq!(health.classifier, "static");
    }

    #[test]
    fn test_get_session_counts() {
        let mut session = fixtures::session();
        api::create_report(&mut session, &StaticClassifier, &fixtures::pothole_report()).unwrap();

        let data = api::get_session(&session).unwrap();
        assert_eq!(data.session_id, "test-session");
        assert_eq!(data.counts.reports, 1);
        assert_eq!(data.counts.notifications, 1);
        assert_eq!(data.current_page, Page::Landing);
        assert!(!data.has_draft);
    }

    #[test]
    fn test_navigate_handlers() {
        let mut session = fixtures::session();
        let req = NavigateRequest {
            page: "report_incident".to_string(),
        };
        assert_eq!(api::navigate(&mut session, &req).unwrap().page, Page::ReportIncident);
        assert_eq!(api::navigate_back(&mut session).unwrap().page, Page::Dashboard);
        assert_eq!(api::show_page(&mut session, "landing").unwrap().page, Page::Landing);
        assert_eq!(api::navigate_next(&mut session).unwrap().page, Page::Onboarding);
    }

    #[test]
    fn test_create_report_missing_fields_is_validation_error() {
        let mut session = fixtures::session();
        let err = api::create_report(&mut session, &StaticClassifier, &ReportForm::default())
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code.as_str(), "VALIDATION_ERROR");
        assert!(err.message.contains("type"));
        assert!(api::list_reports(&session).unwrap().reports.is_empty());
    }

    #[test]
    fn test_petition_handlers() {
        let mut session = fixtures::session();
        let form = fixtures::petition_form("Library hours", "Education", "Open on Sundays");
        let created = api::create_petition(&mut session, &StaticClassifier, &form).unwrap();

        let vote = api::upvote_petition(&mut session, &created.id).unwrap();
        assert_eq!(vote.vote_count, 2);
        assert_eq!(api::get_petition(&session, &created.id).unwrap().vote_count, 2);
        assert_eq!(api::list_petitions(&session).unwrap().petitions.len(), 1);

        let err = api::get_petition(&session, "PET-0099").unwrap_err();
        assert_eq!(err.status_code(), 404);
        let err = api::upvote_petition(&mut session, "PET-0099").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_wizard_submit_without_draft_is_validation_error() {
        let mut session = fixtures::session();
        let err = api::submit_draft(&mut session, &StaticClassifier).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(api::review_draft(&session).unwrap().title, "N/A");
    }

    #[test]
    fn test_classify_report() {
        let req = ClassifyReportRequest {
            report_type: "traffic signal".to_string(),
            description: String::new(),
            location: String::new(),
        };
        let routing = api::classify_report(&StaticClassifier, &req).unwrap();
        assert_eq!(routing.department, "Department of Transportation");
        assert_eq!(routing.urgency, Urgency::High);
        assert_eq!(routing.source, RoutingSource::Static);
    }

    #[test]
    fn test_classify_rejects_unknown_values() {
        let req = ClassifyReportRequest {
            report_type: "meteor".to_string(),
            description: String::new(),
            location: String::new(),
        };
        assert_eq!(api::classify_report(&StaticClassifier, &req).unwrap_err().status_code(), 400);

        let req = ClassifyPetitionRequest {
            category: "Sports".to_string(),
            title: String::new(),
            description: String::new(),
        };
        assert_eq!(
            api::classify_petition(&StaticClassifier, &req).unwrap_err().status_code(),
            400
        );
    }

    #[test]
    fn test_analytics_handler() {
        let mut session = fixtures::session();
        api::create_report(&mut session, &StaticClassifier, &fixtures::pothole_report()).unwrap();
        let analytics = api::get_analytics(&session).unwrap();
        assert_eq!(analytics.reports, 1);
        assert_eq!(analytics.anonymous_reports, 1);
    }
}
