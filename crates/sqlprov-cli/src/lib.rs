//! CLI library components for the SQL provisioning rules front end.

pub mod logging;
pub mod report;
pub mod summary;
