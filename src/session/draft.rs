//! Petition wizard state
//!
//! The wizard keeps its intermediate data in the session, step by step. The
//! steps are not guarded: evidence and privacy can be set without a draft,
//! in which case the review step shows placeholders.

use serde::Serialize;

use crate::core::models::{PetitionCategory, Privacy};

/// Step 1 of the wizard: what the petition is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetitionDraft {
    /// Petition title
    pub title: String,
    /// Selected category
    pub category: PetitionCategory,
    /// Full description
    pub description: String,
}

/// Step 2 of the wizard: supporting material
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// Where the issue is
    pub location: Option<String>,
    /// Uploaded file names
    pub files: Vec<String>,
    /// Take the timestamp from evidence metadata
    pub auto_timestamp: bool,
    /// Take the geotag from evidence metadata
    pub auto_geotag: bool,
}

/// Everything the wizard has collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    /// Step 1 data, present once the first step validated
    pub draft: Option<PetitionDraft>,
    /// Step 2 data
    pub evidence: Evidence,
    /// Identity display setting chosen on the review step
    pub privacy: Privacy,
    /// Incognito toggle from the review step
    pub incognito: bool,
}

impl WizardState {
    /// Forget everything collected so far
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
