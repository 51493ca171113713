//! Ticket record and its resolution state.

use super::{Folio, ParseTicketStatusError, TicketId};
use crate::device::domain::EquipmentId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Awaiting a technician.
    #[default]
    Open,
    /// Closed by a resolution.
    Resolved,
}

impl TicketStatus {
    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Resolved => "Resolved",
        }
    }
}

impl TryFrom<&str> for TicketStatus {
    type Error = ParseTicketStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Open" => Ok(Self::Open),
            "Resolved" => Ok(Self::Resolved),
            _ => Err(ParseTicketStatusError(value.to_owned())),
        }
    }
}

/// Result of closing a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketClosure {
    /// This call resolved the ticket.
    Closed {
        /// Timestamp written to `dateFinished`.
        finished_at: DateTime<Utc>,
    },
    /// The ticket was already resolved; nothing was written.
    AlreadyResolved {
        /// The previously stored `dateFinished`, if any.
        finished_at: Option<DateTime<Utc>>,
    },
}

impl TicketClosure {
    /// Returns the effective finish timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Closed { finished_at } => Some(*finished_at),
            Self::AlreadyResolved { finished_at } => *finished_at,
        }
    }

    /// Returns whether this closure performed the write.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }
}

/// Support ticket raised against a deployed device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    id: TicketId,
    folio: Folio,
    #[serde(rename = "affectedEquipmentUID")]
    affected_equipment_uid: EquipmentId,
    #[serde(default)]
    problem_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reported_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employee_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    employee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ticket_number: Option<String>,
    #[serde(default)]
    status: TicketStatus,
    #[serde(default)]
    date_finished: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Creates an open ticket.
    #[must_use]
    pub fn new(
        id: TicketId,
        folio: Folio,
        affected_equipment_uid: EquipmentId,
        problem_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            folio,
            affected_equipment_uid,
            problem_type: problem_type.into(),
            assigned_to: None,
            assigned_to_email: None,
            reported_by: None,
            employee_email: None,
            employee_name: None,
            ticket_number: None,
            status: TicketStatus::Open,
            date_finished: None,
        }
    }

    /// Sets the assigned technician.
    #[must_use]
    pub fn with_assignee(mut self, uid: impl Into<String>, email: impl Into<String>) -> Self {
        self.assigned_to = Some(uid.into());
        self.assigned_to_email = Some(email.into());
        self
    }

    /// Sets the reporting employee.
    #[must_use]
    pub fn with_reporter(mut self, reported_by: impl Into<String>, email: impl Into<String>) -> Self {
        self.reported_by = Some(reported_by.into());
        self.employee_email = Some(email.into());
        self
    }

    /// Sets the reporting employee's display name.
    #[must_use]
    pub fn with_employee_name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    /// Sets an explicit ticket number.
    #[must_use]
    pub fn with_ticket_number(mut self, number: impl Into<String>) -> Self {
        self.ticket_number = Some(number.into());
        self
    }

    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    /// Returns the folio.
    #[must_use]
    pub const fn folio(&self) -> &Folio {
        &self.folio
    }

    /// Returns the deployed device the ticket is about.
    #[must_use]
    pub const fn affected_equipment_uid(&self) -> &EquipmentId {
        &self.affected_equipment_uid
    }

    /// Returns the reported problem category.
    #[must_use]
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    /// Returns the assigned technician's user id.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the assigned technician's email.
    #[must_use]
    pub fn assigned_to_email(&self) -> Option<&str> {
        self.assigned_to_email.as_deref()
    }

    /// Returns the reporter's user id or email.
    #[must_use]
    pub fn reported_by(&self) -> Option<&str> {
        self.reported_by.as_deref()
    }

    /// Returns the reporting employee's email.
    #[must_use]
    pub fn employee_email(&self) -> Option<&str> {
        self.employee_email.as_deref()
    }

    /// Returns the reporting employee's display name.
    #[must_use]
    pub fn employee_name(&self) -> Option<&str> {
        self.employee_name.as_deref()
    }

    /// Returns the explicit ticket number, if one was assigned.
    #[must_use]
    pub fn ticket_number(&self) -> Option<&str> {
        self.ticket_number.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns when the ticket was resolved.
    #[must_use]
    pub const fn date_finished(&self) -> Option<DateTime<Utc>> {
        self.date_finished
    }

    /// Returns whether the ticket has been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.status, TicketStatus::Resolved)
    }

    /// Returns the human-readable ticket number.
    ///
    /// Uses the explicit number when present, otherwise `prefix` followed by
    /// the first `length` characters of the identifier.
    #[must_use]
    pub fn display_number(&self, prefix: &str, length: usize) -> String {
        match self.ticket_number.as_deref().map(str::trim) {
            Some(number) if !number.is_empty() => number.to_owned(),
            _ => {
                let head: String = self.id.as_str().chars().take(length).collect();
                format!("{prefix}{head}")
            }
        }
    }

    /// Marks the ticket resolved.
    ///
    /// Resolving an already-resolved ticket changes nothing and reports the
    /// original finish time.
    pub fn resolve(&mut self, clock: &impl Clock) -> TicketClosure {
        if self.is_resolved() {
            return TicketClosure::AlreadyResolved {
                finished_at: self.date_finished,
            };
        }
        let finished_at = clock.utc();
        self.status = TicketStatus::Resolved;
        self.date_finished = Some(finished_at);
        TicketClosure::Closed { finished_at }
    }
}
