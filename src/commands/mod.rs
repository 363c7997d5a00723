//! Command implementations

mod classify;
mod init;
mod routes;
mod serve;

pub use classify::{classify_petition, classify_report};
pub use init::init;
pub use routes::routes;
pub use serve::serve;
