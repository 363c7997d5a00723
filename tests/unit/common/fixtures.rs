//! Test data builders

use mau2::core::services::{CitizenForm, DraftForm, PetitionForm, ReportForm};
use mau2::session::Session;

/// Fresh session with a fixed id
pub fn session() -> Session {
    Session::new("test-session")
}

pub fn citizen_form(name: &str) -> CitizenForm {
    CitizenForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        location: "Springfield".to_string(),
        interests: vec!["Transportation".to_string()],
    }
}

pub fn petition_form(title: &str, category: &str, description: &str) -> PetitionForm {
    PetitionForm {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        ..PetitionForm::default()
    }
}

pub fn report_form(report_type: &str, description: &str, location: &str) -> ReportForm {
    ReportForm {
        report_type: report_type.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        ..ReportForm::default()
    }
}

/// The canonical anonymous pothole report
pub fn pothole_report() -> ReportForm {
    ReportForm {
        anonymous: true,
        ..report_form("Pothole", "large hole", "Main St")
    }
}

pub fn draft_form(title: &str, category: &str, description: &str) -> DraftForm {
    DraftForm {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
    }
}
