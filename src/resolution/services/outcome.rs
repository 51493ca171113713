//! Inputs and results of a resolution.

use crate::device::domain::EquipmentActive;
use crate::feedback::domain::Feedback;
use crate::identity::domain::Identity;
use crate::resolution::domain::ResolutionChoice;
use crate::ticket::domain::{TicketClosure, TicketId};

/// Who is resolving the ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    technician: Identity,
}

impl ResolutionContext {
    /// Creates a context for `technician`.
    #[must_use]
    pub const fn new(technician: Identity) -> Self {
        Self { technician }
    }

    /// Returns the resolving technician.
    #[must_use]
    pub const fn technician(&self) -> &Identity {
        &self.technician
    }
}

/// Counts of what the commit changed on the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedChanges {
    /// Component slots rewritten.
    pub components_updated: usize,
    /// Peripheral slots rewritten.
    pub peripherals_updated: usize,
    /// Whether the device itself was swapped for a catalog device.
    pub device_replaced: bool,
}

/// Result of a completed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOutcome {
    /// Resolved ticket.
    pub ticket_id: TicketId,
    /// Strategy applied.
    pub choice: ResolutionChoice,
    /// What the commit changed.
    pub changes: AppliedChanges,
    /// Device as written.
    pub device: EquipmentActive,
    /// Ticket closure result.
    pub closure: TicketClosure,
    /// Seeded feedback request.
    pub feedback: Feedback,
}

/// Result of a resumed resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeOutcome {
    /// Resolved ticket.
    pub ticket_id: TicketId,
    /// Ticket closure result; `None` when resumed at seeding.
    pub closure: Option<TicketClosure>,
    /// Seeded or previously existing feedback request.
    pub feedback: Feedback,
}
