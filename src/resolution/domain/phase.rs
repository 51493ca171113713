//! Workflow phases.

use std::fmt;

/// Position of a resolution in its workflow.
///
/// Phases run in declaration order. Only `Closing` and `Seeding` can be
/// resumed after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolutionPhase {
    /// The caller is assembling a plan.
    Collecting,
    /// The plan and stored records are being checked.
    Validating,
    /// The deployed device is being written.
    Committing,
    /// The ticket is being closed.
    Closing,
    /// The feedback request is being created.
    Seeding,
    /// Every phase completed.
    Done,
}

impl ResolutionPhase {
    /// Returns a stable lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Validating => "validating",
            Self::Committing => "committing",
            Self::Closing => "closing",
            Self::Seeding => "seeding",
            Self::Done => "done",
        }
    }

    /// Returns whether a failed resolution may restart at this phase.
    #[must_use]
    pub const fn is_resumable(self) -> bool {
        matches!(self, Self::Closing | Self::Seeding)
    }
}

impl fmt::Display for ResolutionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
