//! Tests for the three-step petition wizard

use mau2::adapters::StaticClassifier;
use mau2::core::models::{ANONYMOUS, PetitionCategory, Privacy};
use mau2::core::services::{
    EvidenceForm, IntakeError, PrivacyForm, attach_evidence, review, save_draft, set_privacy,
    submit_draft,
};
use mau2::pages::Page;
use mau2::session::WizardState;

use crate::common::fixtures;

#[test]
fn test_draft_with_empty_title_stays_on_first_step() {
    let mut session = fixtures::session();
    let form = fixtures::draft_form("", "Transportation", "Fix the potholes on Main St");

    let err = save_draft(&mut session, &form).unwrap_err();

    assert_eq!(err, IntakeError::MissingFields(vec!["title"]));
    assert!(err.to_string().contains("Please fill in all required fields"));
    assert_eq!(session.current_page, Page::CreatePetition);
    assert!(session.wizard.draft.is_none());
    assert!(session.petitions().is_empty());
}

#[test]
fn test_valid_draft_moves_to_evidence() {
    let mut session = fixtures::session();
    let form = fixtures::draft_form("Fix Main St", "infrastructure", "Potholes everywhere");

    let draft = save_draft(&mut session, &form).unwrap();

    assert_eq!(draft.category, PetitionCategory::Infrastructure);
    assert_eq!(session.current_page, Page::PetitionEvidence);
    assert_eq!(session.wizard.draft.as_ref(), Some(&draft));
    assert!(session.petitions().is_empty());
}

#[test]
fn test_evidence_moves_to_review() {
    let mut session = fixtures::session();
    let form = EvidenceForm {
        location: Some("Main St".to_string()),
        files: vec!["pothole.png".to_string()],
        ..EvidenceForm::default()
    };

    let evidence = attach_evidence(&mut session, &form).unwrap();

    assert_eq!(evidence.files, vec!["pothole.png"]);
    assert!(evidence.auto_timestamp && evidence.auto_geotag);
    assert_eq!(session.current_page, Page::PetitionReview);
}

#[test]
fn test_bad_evidence_stays_on_evidence_step() {
    let mut session = fixtures::session();
    let form = EvidenceForm {
        files: vec!["virus.exe".to_string()],
        ..EvidenceForm::default()
    };

    let err = attach_evidence(&mut session, &form).unwrap_err();

    assert!(matches!(err, IntakeError::UnsupportedEvidence(_)));
    assert_eq!(session.current_page, Page::PetitionEvidence);
    assert!(session.wizard.evidence.files.is_empty());
}

#[test]
fn test_evidence_form_flags_default_on() {
    let form: EvidenceForm = serde_json::from_str(r#"{"files": ["a.pdf"]}"#).unwrap();
    assert!(form.auto_timestamp);
    assert!(form.auto_geotag);
    assert!(form.location.is_none());
}

#[test]
fn test_review_without_draft_shows_placeholders() {
    let session = fixtures::session();
    let summary = review(&session);

    assert_eq!(summary.title, "N/A");
    assert_eq!(summary.description, "N/A");
    assert_eq!(summary.category, "N/A");
    assert_eq!(summary.location, "N/A");
    assert_eq!(summary.evidence_count, 0);
    assert!(!summary.ready);
}

#[test]
fn test_review_truncates_long_descriptions() {
    let mut session = fixtures::session();
    let long = "a".repeat(150);
    save_draft(&mut session, &fixtures::draft_form("Title", "Healthcare", &long)).unwrap();

    let summary = review(&session);

    assert_eq!(summary.description.len(), 103);
    assert!(summary.description.ends_with("..."));
    assert_eq!(summary.category, "Healthcare");
    assert!(summary.ready);
}

#[test]
fn test_set_privacy_returns_summary() {
    let mut session = fixtures::session();
    let summary = set_privacy(
        &mut session,
        PrivacyForm {
            privacy: Privacy::Private,
            incognito: true,
        },
    );
    assert_eq!(summary.privacy, Privacy::Private);
    assert!(summary.incognito);
    assert!(session.wizard.incognito);
}

#[test]
fn test_submit_without_draft_fails() {
    let mut session = fixtures::session();
    let err = submit_draft(&mut session, &StaticClassifier).unwrap_err();

    assert_eq!(err, IntakeError::NoDraft);
    assert_eq!(session.current_page, Page::PetitionReview);
    assert!(session.petitions().is_empty());
}

#[test]
fn test_full_wizard_submits_and_clears() {
    let mut session = fixtures::session();
    save_draft(
        &mut session,
        &fixtures::draft_form("Clean the river", "Environment", "Trash along the banks"),
    )
    .unwrap();
    attach_evidence(
        &mut session,
        &EvidenceForm {
            location: Some("Riverside".to_string()),
            files: vec!["river.jpg".to_string(), "river.mp4".to_string()],
            auto_timestamp: false,
            auto_geotag: true,
        },
    )
    .unwrap();
    set_privacy(
        &mut session,
        PrivacyForm {
            privacy: Privacy::Public,
            incognito: true,
        },
    );

    let petition = submit_draft(&mut session, &StaticClassifier).unwrap();

    assert_eq!(petition.id, "PET-0001");
    assert_eq!(petition.title, "Clean the river");
    assert_eq!(petition.creator, ANONYMOUS);
    assert_eq!(petition.location.as_deref(), Some("Riverside"));
    assert_eq!(petition.evidence.len(), 2);
    assert_eq!(petition.department, "Environmental Protection Office");
    assert_eq!(session.wizard, WizardState::default());
    assert_eq!(session.current_page, Page::Dashboard);
    assert_eq!(session.petitions().len(), 1);
}
