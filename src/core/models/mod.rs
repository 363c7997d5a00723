//! Domain models for mau2
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Petition`] - A citizen request for institutional action
//! - [`Report`] - An incident report routed to a department
//! - [`Citizen`] - A registered identity within a session
//! - [`Routing`] / [`Categorization`] - Classifier output
//! - [`Notification`] - Confirmation shown after a submission

mod category;
mod citizen;
mod notification;
mod petition;
mod report;
mod routing;

pub use category::{CATEGORY_PLACEHOLDER, PetitionCategory, ReportType};
pub use citizen::Citizen;
pub use notification::{Notification, NotificationLevel};
pub use petition::{Petition, PetitionResponse, PetitionStatus, Privacy};
pub use report::{ANONYMOUS, Report, ReportStatus};
pub use routing::{
    Categorization, MODEL_CONFIDENCE, RULE_BASED_CONFIDENCE, Routing, RoutingSource, Urgency,
};
