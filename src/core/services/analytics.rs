//! Session analytics
//!
//! Aggregate counters over a session's petitions, reports and citizens.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::models::{PetitionStatus, RoutingSource};
use crate::session::Session;

/// How many petitions the leaderboard shows
pub const TOP_PETITIONS: usize = 5;

/// Petition leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetitionRank {
    /// Petition id
    pub id: String,
    /// Petition title
    pub title: String,
    /// Current votes
    pub vote_count: u32,
}

/// Aggregate view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsSnapshot {
    /// Petitions submitted
    pub petitions: usize,
    /// Petitions still collecting votes
    pub active_petitions: usize,
    /// Petitions with an official response
    pub responded_petitions: usize,
    /// Sum of all petition votes
    pub total_votes: u64,
    /// Reports submitted
    pub reports: usize,
    /// Reports submitted anonymously
    pub anonymous_reports: usize,
    /// Petitions and reports whose routing came from the fallback table
    pub fallback_routings: usize,
    /// Registered citizens
    pub citizens: usize,
    /// Petition count per category label
    pub petitions_by_category: BTreeMap<String, usize>,
    /// Report count per department
    pub reports_by_department: BTreeMap<String, usize>,
    /// Most supported petitions, highest first
    pub top_petitions: Vec<PetitionRank>,
}

impl AnalyticsSnapshot {
    /// Compute the snapshot for a session
    #[must_use]
    pub fn collect(session: &Session) -> Self {
        let petitions = session.petitions();
        let reports = session.reports();

        let mut petitions_by_category = BTreeMap::new();
        for p in petitions {
            *petitions_by_category.entry(p.category.label().to_string()).or_insert(0) += 1;
        }

        let mut reports_by_department = BTreeMap::new();
        for r in reports {
            *reports_by_department.entry(r.routing.department.clone()).or_insert(0) += 1;
        }

        let mut ranked: Vec<PetitionRank> = petitions
            .iter()
            .map(|p| PetitionRank {
                id: p.id.clone(),
                title: p.title.clone(),
                vote_count: p.vote_count,
            })
            .collect();
        // Stable sort keeps older petitions first among equal votes
        ranked.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
        ranked.truncate(TOP_PETITIONS);

        Self {
            petitions: petitions.len(),
            active_petitions: petitions
                .iter()
                .filter(|p| p.status == PetitionStatus::Active)
                .count(),
            responded_petitions: petitions
                .iter()
                .filter(|p| p.status == PetitionStatus::Responded)
                .count(),
            total_votes: petitions.iter().map(|p| u64::from(p.vote_count)).sum(),
            reports: reports.len(),
            anonymous_reports: reports.iter().filter(|r| r.is_incognito).count(),
            fallback_routings: petitions
                .iter()
                .filter(|p| p.routing_source == RoutingSource::Fallback)
                .count()
                + reports
                    .iter()
                    .filter(|r| r.routing.source == RoutingSource::Fallback)
                    .count(),
            citizens: session.citizens().len(),
            petitions_by_category,
            reports_by_department,
            top_petitions: ranked,
        }
    }
}
