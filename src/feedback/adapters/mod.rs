//! Feedback repository adapters.

pub mod document;

pub use document::DocumentFeedbackRepository;
