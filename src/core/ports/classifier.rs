//! Classifier port
//!
//! Defines the interface for assigning departments and categories to
//! incoming reports and petitions.

use super::super::models::{Categorization, PetitionCategory, ReportType, Routing};

/// Assigns a routing label to reports and a responsible body to petitions
///
/// Implementations are infallible from the caller's point of view: an
/// implementation backed by an external service must answer from a local
/// table when the service fails.
pub trait Classifier: Send + Sync {
    /// Short name of the implementation, for logs and status output
    fn name(&self) -> &'static str;

    /// Route an incident report to a department
    fn route_report(&self, report_type: ReportType, description: &str, location: &str) -> Routing;

    /// Categorize a petition and pick the public body it is addressed to
    fn categorize_petition(
        &self,
        category: PetitionCategory,
        title: &str,
        description: &str,
    ) -> Categorization;
}
