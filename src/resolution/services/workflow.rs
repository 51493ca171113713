//! Ticket resolution service.

use std::sync::Arc;

use mockable::Clock;

use super::strategy::{self, PreparedChange, SlotReplacement};
use super::{
    ResolutionContext, ResolutionError, ResolutionOutcome, ResolutionResult, ResumeOutcome,
    StepError,
};
use crate::config::ServiceDeskConfig;
use crate::device::{
    domain::{EquipmentActive, Maintenance},
    ports::{DeviceRepository, DeviceRepositoryError},
};
use crate::feedback::{
    domain::{EmployeeRef, Feedback, NewFeedback, TechnicianRef, TicketSnapshot},
    ports::{FeedbackRepository, FeedbackRepositoryResult},
};
use crate::identity::domain::Email;
use crate::resolution::domain::{
    PlanError, ResolutionPhase, ResolutionPlan, ValidatedPlan, ValidatedRow,
};
use crate::ticket::{
    domain::{Ticket, TicketClosure, TicketId},
    ports::TicketRepository,
};

/// Drives a ticket from a chosen plan to a closed ticket with a pending
/// feedback request.
///
/// Phases run strictly in order:
/// 1. Validating: plan rules, then the stored ticket, participants and
///    device. Nothing is written if this phase fails.
/// 2. Committing: one partial write to the deployed device.
/// 3. Closing: idempotent ticket close.
/// 4. Seeding: a pending feedback request, reused if one already exists.
///
/// There is no rollback. A write failure is reported as
/// [`ResolutionError::Failed`] with the furthest completed phase, and
/// [`resume`](Self::resume) finishes the remaining phases.
///
/// # Example
///
/// ```ignore
/// let service = TicketResolutionService::new(tickets, devices, feedback, clock);
/// let ctx = ResolutionContext::new(technician);
/// let plan = ResolutionPlan::NoChange(NoChange { notes: "Cable reseated".into() });
///
/// match service.resolve(&ctx, &ticket_id, &plan).await {
///     Ok(outcome) => show_done(&outcome),
///     Err(err) => match err.resume_from() {
///         Some(phase) => service.resume(&ctx, &ticket_id, phase).await?,
///         None => show_error(&err.user_message()),
///     },
/// }
/// ```
pub struct TicketResolutionService<T, D, F, C>
where
    T: TicketRepository,
    D: DeviceRepository,
    F: FeedbackRepository,
    C: Clock + Send + Sync,
{
    tickets: Arc<T>,
    devices: Arc<D>,
    feedback: Arc<F>,
    clock: Arc<C>,
    config: ServiceDeskConfig,
}

impl<T, D, F, C> Clone for TicketResolutionService<T, D, F, C>
where
    T: TicketRepository,
    D: DeviceRepository,
    F: FeedbackRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tickets: Arc::clone(&self.tickets),
            devices: Arc::clone(&self.devices),
            feedback: Arc::clone(&self.feedback),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<T, D, F, C> TicketResolutionService<T, D, F, C>
where
    T: TicketRepository,
    D: DeviceRepository,
    F: FeedbackRepository,
    C: Clock + Send + Sync,
{
    /// Creates a resolution service with default configuration.
    #[must_use]
    pub fn new(tickets: Arc<T>, devices: Arc<D>, feedback: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            tickets,
            devices,
            feedback,
            clock,
            config: ServiceDeskConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ServiceDeskConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves `ticket_id` with `plan`.
    ///
    /// Plan rules are checked before any repository call.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::Validation`] when the plan or stored records
    ///   break a rule
    /// - [`ResolutionError::TicketNotFound`] or
    ///   [`ResolutionError::AlreadyResolved`] for an unusable ticket
    /// - [`ResolutionError::IdentityConflict`] when the technician reported
    ///   the ticket
    /// - [`ResolutionError::Lookup`] when a read fails before any write
    /// - [`ResolutionError::Failed`] when a write phase fails
    pub async fn resolve(
        &self,
        ctx: &ResolutionContext,
        ticket_id: &TicketId,
        plan: &ResolutionPlan,
    ) -> ResolutionResult<ResolutionOutcome> {
        let validated = plan.validate()?;
        tracing::debug!(
            ticket_id = %ticket_id,
            choice = %validated.choice(),
            "resolution plan validated"
        );

        let ticket = self.load_ticket(ticket_id).await?;
        if ticket.is_resolved() {
            return Err(ResolutionError::AlreadyResolved(ticket_id.clone()));
        }
        let employee = check_participants(ctx, &ticket)?;
        let device = self
            .devices
            .get_device_by_ticket(ticket.affected_equipment_uid())
            .await
            .map_err(lookup)?;
        let prepared = self.prepare(&ticket, &device, &validated).await?;

        self.devices
            .update_active_device(&device.id, &prepared.patch)
            .await
            .map_err(failed(ResolutionPhase::Committing, None))?;
        let mut written = device;
        prepared.patch.apply_to(&mut written);
        tracing::info!(
            ticket_id = %ticket_id,
            equipment_id = %written.id,
            choice = %validated.choice(),
            components_updated = prepared.changes.components_updated,
            peripherals_updated = prepared.changes.peripherals_updated,
            "device change committed"
        );

        let closure = self.close(ticket_id).await?;

        let feedback = self
            .seed(ctx, &ticket, employee, &written)
            .await
            .map_err(failed(ResolutionPhase::Seeding, Some(ResolutionPhase::Closing)))?;
        tracing::info!(
            ticket_id = %ticket_id,
            feedback_id = %feedback.id,
            "resolution complete"
        );

        Ok(ResolutionOutcome {
            ticket_id: ticket_id.clone(),
            choice: validated.choice(),
            changes: prepared.changes,
            device: written,
            closure,
            feedback,
        })
    }

    /// Finishes a resolution that failed at `from`.
    ///
    /// Resuming at `Closing` closes the ticket then seeds feedback; resuming
    /// at `Seeding` requires the ticket to be resolved already. Both steps
    /// are idempotent, so resuming a resolution that actually completed
    /// returns the existing feedback request.
    ///
    /// # Errors
    ///
    /// - [`ResolutionError::CannotResume`] for any other phase, or for
    ///   `Seeding` on an open ticket
    /// - [`ResolutionError::TicketNotFound`],
    ///   [`ResolutionError::IdentityConflict`] or
    ///   [`ResolutionError::Validation`] as for [`resolve`](Self::resolve)
    /// - [`ResolutionError::Failed`] when a write phase fails again
    pub async fn resume(
        &self,
        ctx: &ResolutionContext,
        ticket_id: &TicketId,
        from: ResolutionPhase,
    ) -> ResolutionResult<ResumeOutcome> {
        if !from.is_resumable() {
            return Err(ResolutionError::CannotResume(from));
        }
        let ticket = self.load_ticket(ticket_id).await?;
        if from == ResolutionPhase::Seeding && !ticket.is_resolved() {
            return Err(ResolutionError::CannotResume(from));
        }
        let employee = check_participants(ctx, &ticket)?;
        tracing::warn!(ticket_id = %ticket_id, phase = %from, "resuming resolution");

        let closure = if from == ResolutionPhase::Closing {
            Some(self.close(ticket_id).await?)
        } else {
            None
        };

        let device = self
            .devices
            .get_device_by_ticket(ticket.affected_equipment_uid())
            .await
            .map_err(failed(ResolutionPhase::Seeding, Some(ResolutionPhase::Closing)))?;
        let feedback = self
            .seed(ctx, &ticket, employee, &device)
            .await
            .map_err(failed(ResolutionPhase::Seeding, Some(ResolutionPhase::Closing)))?;
        tracing::info!(
            ticket_id = %ticket_id,
            feedback_id = %feedback.id,
            "resumed resolution complete"
        );

        Ok(ResumeOutcome {
            ticket_id: ticket_id.clone(),
            closure,
            feedback,
        })
    }

    async fn load_ticket(&self, ticket_id: &TicketId) -> ResolutionResult<Ticket> {
        self.tickets
            .get_ticket(ticket_id)
            .await
            .map_err(lookup)?
            .ok_or_else(|| ResolutionError::TicketNotFound(ticket_id.clone()))
    }

    async fn close(&self, ticket_id: &TicketId) -> ResolutionResult<TicketClosure> {
        let closure = self
            .tickets
            .update_ticket_finished(ticket_id)
            .await
            .map_err(failed(
                ResolutionPhase::Closing,
                Some(ResolutionPhase::Committing),
            ))?;
        tracing::info!(
            ticket_id = %ticket_id,
            newly_closed = closure.is_new(),
            "ticket closed"
        );
        Ok(closure)
    }

    /// Performs every read the plan needs and builds the device patch.
    async fn prepare(
        &self,
        ticket: &Ticket,
        device: &EquipmentActive,
        plan: &ValidatedPlan,
    ) -> ResolutionResult<PreparedChange> {
        let now = self.clock.utc();
        let maintenance = Maintenance {
            date: now,
            notes: plan.notes().to_owned(),
            problem_type: ticket.problem_type().to_owned(),
        };
        match plan {
            ValidatedPlan::Full(full) => {
                let replacement = self
                    .devices
                    .get_equipment(full.replacement())
                    .await
                    .map_err(lookup)?;
                if replacement.equipment_type.trim() != device.equipment_type.trim() {
                    return Err(PlanError::ReplacementTypeMismatch {
                        expected: device.equipment_type.clone(),
                        found: replacement.equipment_type,
                    }
                    .into());
                }
                Ok(strategy::full_replacement(
                    device,
                    &replacement,
                    full.serials(),
                    maintenance,
                    now,
                ))
            }
            ValidatedPlan::Component { rows, .. } => {
                let replacements = self.resolve_rows(device, rows).await?;
                Ok(strategy::component_change(
                    device,
                    &replacements,
                    maintenance,
                    now,
                ))
            }
            ValidatedPlan::NoChange { .. } => Ok(strategy::no_change(maintenance, now)),
        }
    }

    /// Matches each row to a device slot and a catalog part.
    ///
    /// All slots are checked before any catalog read.
    async fn resolve_rows(
        &self,
        device: &EquipmentActive,
        rows: &[ValidatedRow],
    ) -> ResolutionResult<Vec<SlotReplacement>> {
        let mut slots = Vec::with_capacity(rows.len());
        for row in rows {
            let current = row.current();
            let slot = device.find_slot(current.kind, &current.name).ok_or_else(|| {
                PlanError::UnknownInstalledItem {
                    name: current.name.clone(),
                    kind: current.kind,
                }
            })?;
            slots.push(slot.to_owned());
        }

        let mut replacements = Vec::with_capacity(rows.len());
        for (row, slot) in rows.iter().zip(slots) {
            let component = self
                .devices
                .get_component(row.replacement())
                .await
                .map_err(lookup)?
                .ok_or_else(|| {
                    lookup(DeviceRepositoryError::ComponentNotFound(
                        row.replacement().clone(),
                    ))
                })?;
            replacements.push(SlotReplacement {
                kind: row.current().kind,
                slot,
                component,
                serial_number: row.serial_number().to_owned(),
            });
        }
        Ok(replacements)
    }

    /// Returns the ticket's feedback request, creating it when absent.
    async fn seed(
        &self,
        ctx: &ResolutionContext,
        ticket: &Ticket,
        employee: EmployeeRef,
        device: &EquipmentActive,
    ) -> FeedbackRepositoryResult<Feedback> {
        if let Some(existing) = self.feedback.find_by_ticket(ticket.id()).await? {
            tracing::info!(
                ticket_id = %ticket.id(),
                feedback_id = %existing.id,
                "feedback already seeded"
            );
            return Ok(existing);
        }

        let technician = ctx.technician();
        let request = NewFeedback {
            employee,
            technician: TechnicianRef {
                uid: technician.uid().clone(),
                name: technician.display_name().to_owned(),
                email: technician.email().clone(),
            },
            ticket: TicketSnapshot {
                id: ticket.id().clone(),
                number: ticket.display_number(
                    self.config.ticket_number_prefix(),
                    self.config.ticket_number_length(),
                ),
                equipment: describe_device(device),
                problem_type: ticket.problem_type().to_owned(),
            },
        };
        self.feedback.create_initial_feedback(request).await
    }
}

/// Checks that the technician did not report the ticket and works out who
/// to ask for feedback.
fn check_participants(
    ctx: &ResolutionContext,
    ticket: &Ticket,
) -> ResolutionResult<EmployeeRef> {
    let technician = ctx.technician();
    let reported_by_technician = ticket
        .reported_by()
        .is_some_and(|reporter| reporter.trim() == technician.uid().as_str());
    if reported_by_technician {
        return Err(ResolutionError::IdentityConflict(technician.uid().clone()));
    }

    let email = ticket
        .employee_email()
        .and_then(|raw| Email::new(raw).ok())
        .or_else(|| ticket.reported_by().and_then(|raw| Email::new(raw).ok()))
        .ok_or(PlanError::MissingEmployeeEmail)?;
    if &email == technician.email() {
        return Err(ResolutionError::IdentityConflict(technician.uid().clone()));
    }

    let name = ticket
        .employee_name()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| email.local_part())
        .to_owned();
    Ok(EmployeeRef { email, name })
}

fn describe_device(device: &EquipmentActive) -> String {
    let description = [device.brand.trim(), device.model.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if description.is_empty() {
        device.id.to_string()
    } else {
        description
    }
}

fn lookup(err: impl Into<StepError>) -> ResolutionError {
    ResolutionError::Lookup(err.into())
}

fn failed<E>(
    failed_at: ResolutionPhase,
    completed: Option<ResolutionPhase>,
) -> impl FnOnce(E) -> ResolutionError
where
    E: Into<StepError>,
{
    move |err| {
        let source = err.into();
        tracing::warn!(
            phase = %failed_at,
            completed = ?completed,
            error = %source,
            "resolution phase failed"
        );
        ResolutionError::Failed {
            failed_at,
            completed,
            source,
        }
    }
}
