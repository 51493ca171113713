//! Ticket resolution workflow.
//!
//! A technician closes a ticket by choosing one of three plans: replace the
//! whole device, swap individual parts, or record that nothing changed. The
//! workflow validates the plan, writes exactly one change to the deployed
//! device, closes the ticket, and seeds a pending feedback request.
//!
//! The three writes are independent documents. A failure part way through
//! is reported with the furthest completed phase so the caller can
//! [`resume`](services::TicketResolutionService::resume) the remainder.
//!
//! - Domain types in [`domain`]
//! - Orchestration in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
