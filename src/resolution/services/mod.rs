//! Resolution orchestration.

mod error;
mod outcome;
pub(crate) mod strategy;
mod workflow;

pub use error::{ResolutionError, ResolutionResult, StepError};
pub use outcome::{AppliedChanges, ResolutionContext, ResolutionOutcome, ResumeOutcome};
pub use workflow::TicketResolutionService;
