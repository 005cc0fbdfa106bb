// Resume skill analysis: taxonomy extraction, the job-role catalog, and gap
// analysis against a target role.

pub mod extractor;
pub mod gap;
pub mod handlers;
pub mod models;
pub mod roles;
pub mod taxonomy;
