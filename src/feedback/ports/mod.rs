//! Port contracts for feedback persistence.

pub mod repository;

pub use repository::{FeedbackRepository, FeedbackRepositoryError, FeedbackRepositoryResult};
