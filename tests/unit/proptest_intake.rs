//! Property-based tests for intake and navigation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use mau2::adapters::StaticClassifier;
use mau2::core::services::{submit_petition, upvote_petition};
use mau2::pages::Page;
use proptest::prelude::*;

use crate::common::fixtures;

proptest! {
    /// A petition has one vote from its creator plus one per upvote
    #[test]
    fn votes_count_every_upvote(upvotes in 0u32..50) {
        let mut session = fixtures::session();
        let form = fixtures::petition_form("Trees", "Environment", "Plant more");
        let petition = submit_petition(&mut session, &StaticClassifier, &form).unwrap();

        let mut last = petition.vote_count;
        for _ in 0..upvotes {
            last = upvote_petition(&mut session, &petition.id).unwrap();
        }
        prop_assert_eq!(last, 1 + upvotes);
    }

    /// Petition ids are sequential and zero-padded
    #[test]
    fn petition_ids_are_sequential(count in 1usize..20) {
        let mut session = fixtures::session();
        for i in 1..=count {
            let form = fixtures::petition_form(&format!("P{i}"), "Education", "x");
            let petition = submit_petition(&mut session, &StaticClassifier, &form).unwrap();
            prop_assert_eq!(petition.id, format!("PET-{i:04}"));
        }
    }

    /// Blank titles are rejected and nothing is stored
    #[test]
    fn blank_titles_are_never_stored(title in "[ \t\n]{0,8}") {
        let mut session = fixtures::session();
        let form = fixtures::petition_form(&title, "Healthcare", "Open a clinic");
        prop_assert!(submit_petition(&mut session, &StaticClassifier, &form).is_err());
        prop_assert!(session.petitions().is_empty());
    }

    /// Page lookup is total and known labels round-trip
    #[test]
    fn page_lookup_is_total(label in "\\PC{0,20}") {
        let page = Page::from_label(&label);
        prop_assert!(Page::ALL.contains(&page));
        if page != Page::Dashboard {
            prop_assert_eq!(page.label(), label.trim().to_lowercase().replace('-', "_"));
        }
    }

    /// Labels match regardless of case and dash style
    #[test]
    fn page_labels_ignore_case(index in 0usize..12, upper in any::<bool>()) {
        let page = Page::ALL[index];
        let label = if upper {
            page.label().to_uppercase().replace('_', "-")
        } else {
            page.label().to_string()
        };
        prop_assert_eq!(Page::from_label(&label), page);
    }
}
