//! Print the static routing table

use mau2::output::{OutputMode, RoutingTableResult};

/// Show every report route and petition department
pub fn routes(mode: OutputMode) {
    RoutingTableResult::from_static_table().render(mode);
}
