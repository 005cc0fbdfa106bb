// Career transition recommender: dataset loading, label encoding, Q-table
// training at startup, and the read-only serve path.

pub mod dataset;
pub mod domains;
pub mod encoder;
pub mod handlers;
pub mod qlearning;
pub mod recommender;
