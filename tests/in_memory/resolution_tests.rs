//! End-to-end resolution tests over the in-memory document store.

use super::helpers::{
    EMPLOYEE_EMAIL, TECH_EMAIL, catalog_desktop, ctx, desk, desktop, open_ticket, part, slots,
    Desk,
};
use rstest::rstest;
use servicedesk::{
    device::domain::{ComponentId, DeviceStatus, EquipmentId, ItemKind},
    feedback::{domain::FeedbackStatus, ports::FeedbackRepository},
    identity::domain::Email,
    resolution::{
        domain::{
            ComponentChange, ComponentChangeRow, DeviceSerials, FullReplacement,
            InstalledItemRef, NoChange, PlanError, ResolutionChoice, ResolutionPhase,
            ResolutionPlan,
        },
        services::{ResolutionContext, ResolutionError},
    },
    store::domain::Collection,
    ticket::{
        domain::{Folio, TicketId, TicketStatus},
        ports::TicketRepository,
    },
};

async fn seed_desktop_ticket(desk: &Desk) -> Result<TicketId, eyre::Report> {
    let ticket = open_ticket("a1b2c3d4e5f6", "TK-1001", "eq-1");
    desk.put(Collection::Ticket, "a1b2c3d4e5f6", &ticket).await?;
    desk.put(Collection::EquipmentActive, "eq-1", &desktop("eq-1"))
        .await?;
    Ok(ticket.id().clone())
}

fn rows(entries: &[(&str, ItemKind, &str, &str)]) -> ResolutionPlan {
    ResolutionPlan::Component(ComponentChange {
        rows: entries
            .iter()
            .map(|(name, kind, replacement, serial)| {
                ComponentChangeRow::new(
                    InstalledItemRef::new(*name, *kind),
                    ComponentId::new(*replacement).expect("valid id"),
                    *serial,
                )
            })
            .collect(),
        notes: "parts swapped".to_owned(),
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn no_change_resolution_closes_ticket_and_seeds_feedback(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    seed_desktop_ticket(&desk).await?;
    let ticket = desk
        .tickets
        .get_ticket_by_folio(&Folio::new("TK-1001")?)
        .await?
        .ok_or_else(|| eyre::eyre!("ticket TK-1001 missing"))?;
    let plan = ResolutionPlan::NoChange(NoChange {
        notes: "Cleaned fans".to_owned(),
    });

    let outcome = desk.service.resolve(&ctx, ticket.id(), &plan).await?;

    assert_eq!(outcome.choice, ResolutionChoice::None);
    let device = desk.device("eq-1").await?;
    assert_eq!(device.status, DeviceStatus::Active);
    let maintenance = device
        .last_maintenance
        .ok_or_else(|| eyre::eyre!("maintenance not stamped"))?;
    assert_eq!(maintenance.notes, "Cleaned fans");
    assert_eq!(maintenance.problem_type, "Hardware");
    assert!(device.date_modified.is_some());
    assert_eq!(device.components, desktop("eq-1").components);

    let closed = desk
        .tickets
        .get_ticket(ticket.id())
        .await?
        .ok_or_else(|| eyre::eyre!("ticket vanished"))?;
    assert_eq!(closed.status(), TicketStatus::Resolved);
    assert!(closed.date_finished().is_some());

    let feedback = desk
        .feedback
        .get_pending_feedback_by_email(EMPLOYEE_EMAIL)
        .await?;
    assert_eq!(feedback.len(), 1);
    let seeded = feedback
        .first()
        .ok_or_else(|| eyre::eyre!("feedback missing"))?;
    assert!(seeded.rating.is_unrated());
    assert_eq!(seeded.status, FeedbackStatus::Pending);
    assert_eq!(seeded.ticket.number, "TK-a1b2c3d4");
    assert_eq!(seeded.ticket.equipment, "Dell OptiPlex 7080");
    assert_eq!(seeded.employee.name, "Ana Ruiz");
    assert_eq!(seeded.technician.email.as_str(), TECH_EMAIL);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_replacement_writes_serials_and_keeps_peripherals(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    let catalog = catalog_desktop(
        "DELL-OP7090",
        "OptiPlex 7090",
        slots(&[
            ("cpu", "Intel i7-11700", ""),
            ("mobo", "Dell Q570", ""),
            ("ram", "Kingston 16GB", ""),
            ("sto", "SSD 512GB", ""),
            ("psu", "Dell 260W", ""),
        ]),
    );
    desk.put(Collection::Equipment, "DELL-OP7090", &catalog).await?;
    let plan = ResolutionPlan::Full(FullReplacement {
        replacement: Some(EquipmentId::new("DELL-OP7090")?),
        serials: DeviceSerials {
            device: "SN1".to_owned(),
            cpu: "SN2".to_owned(),
            mobo: "SN3".to_owned(),
            ram: "SN4".to_owned(),
            storage: "SN5".to_owned(),
            psu: "SN6".to_owned(),
        },
        notes: "Board failure".to_owned(),
    });

    let outcome = desk.service.resolve(&ctx, &ticket_id, &plan).await?;

    assert!(outcome.changes.device_replaced);
    assert_eq!(outcome.changes.components_updated, 5);
    let device = desk.device("eq-1").await?;
    assert_eq!(device, outcome.device);
    assert_eq!(device.serial_number, "SN1");
    assert_eq!(device.model, "OptiPlex 7090");
    let serials: Vec<(&str, &str)> = device
        .components
        .iter()
        .map(|(slot, item)| (slot.as_str(), item.serial_number.as_str()))
        .collect();
    assert_eq!(
        serials,
        vec![
            ("cpu", "SN2"),
            ("mobo", "SN3"),
            ("psu", "SN6"),
            ("ram", "SN4"),
            ("sto", "SN5"),
        ]
    );
    assert_eq!(
        device.components.get("ram").map(|item| item.name.as_str()),
        Some("Kingston 16GB")
    );
    assert_eq!(device.peripherals, desktop("eq-1").peripherals);
    Ok(())
}

#[rstest]
#[case(&[("Kingston 8GB", ItemKind::Component, "ram-16", "RAM-NEW")], 1, 0)]
#[case(
    &[
        ("Kingston 8GB", ItemKind::Component, "ram-16", "RAM-NEW"),
        ("Dell P2219H", ItemKind::Peripheral, "mon-24", "MON-NEW"),
    ],
    1,
    1
)]
#[case(
    &[
        ("Intel i5-10500", ItemKind::Component, "cpu-i7", "CPU-NEW"),
        ("Kingston 8GB", ItemKind::Component, "ram-16", "RAM-NEW"),
        ("Dell KB216", ItemKind::Peripheral, "kb-1", "KB-NEW"),
    ],
    2,
    1
)]
#[tokio::test(flavor = "multi_thread")]
async fn component_change_updates_exactly_the_selected_slots(
    desk: Desk,
    ctx: ResolutionContext,
    #[case] entries: &[(&str, ItemKind, &str, &str)],
    #[case] components: usize,
    #[case] peripherals: usize,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    for catalog_part in [
        part("ram-16", "Kingston 16GB", "ram"),
        part("mon-24", "Dell P2422H", "monitor"),
        part("cpu-i7", "Intel i7-10700", "cpu"),
        part("kb-1", "Logitech K120", "keyboard"),
    ] {
        desk.put(Collection::Component, catalog_part.id.as_str(), &catalog_part)
            .await?;
    }
    let before = desktop("eq-1");

    let outcome = desk.service.resolve(&ctx, &ticket_id, &rows(entries)).await?;

    assert_eq!(outcome.changes.components_updated, components);
    assert_eq!(outcome.changes.peripherals_updated, peripherals);
    let device = desk.device("eq-1").await?;
    let changed = before
        .components
        .iter()
        .chain(before.peripherals.iter())
        .filter(|(slot, old)| {
            let current = device
                .components
                .get(*slot)
                .or_else(|| device.peripherals.get(*slot));
            current != Some(*old)
        })
        .count();
    assert_eq!(changed, entries.len());
    for (_, _, _, serial) in entries {
        assert!(
            device
                .components
                .values()
                .chain(device.peripherals.values())
                .any(|item| item.serial_number == *serial),
            "serial {serial} not written"
        );
    }
    let keys: Vec<&String> = device.components.keys().collect();
    let before_keys: Vec<&String> = before.components.keys().collect();
    assert_eq!(keys, before_keys);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_serials_leave_every_document_untouched(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    let plan = rows(&[
        ("Kingston 8GB", ItemKind::Component, "ram-16", "DUPLICATE"),
        ("Dell P2219H", ItemKind::Peripheral, "mon-24", "DUPLICATE"),
    ]);

    let result = desk.service.resolve(&ctx, &ticket_id, &plan).await;

    assert!(matches!(
        result,
        Err(ResolutionError::Validation(PlanError::DuplicateSerial(_)))
    ));
    assert_eq!(desk.device("eq-1").await?, desktop("eq-1"));
    let ticket = desk
        .tickets
        .get_ticket(&ticket_id)
        .await?
        .ok_or_else(|| eyre::eyre!("ticket vanished"))?;
    assert_eq!(ticket.status(), TicketStatus::Open);
    assert!(desk.store.inner().snapshot(Collection::Feedback)?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_resolution_is_rejected_and_first_close_stands(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    let plan = ResolutionPlan::NoChange(NoChange::default());
    let first = desk.service.resolve(&ctx, &ticket_id, &plan).await?;

    let second = desk.service.resolve(&ctx, &ticket_id, &plan).await;
    let repeat_close = desk.tickets.update_ticket_finished(&ticket_id).await?;

    assert!(matches!(second, Err(ResolutionError::AlreadyResolved(_))));
    assert!(!repeat_close.is_new());
    assert_eq!(repeat_close.finished_at(), first.closure.finished_at());
    let ticket = desk
        .tickets
        .get_ticket(&ticket_id)
        .await?
        .ok_or_else(|| eyre::eyre!("ticket vanished"))?;
    assert_eq!(ticket.date_finished(), first.closure.finished_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_close_can_be_resumed_without_duplicating_feedback(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    desk.store.fail_updates_to(Collection::Ticket);
    let plan = ResolutionPlan::NoChange(NoChange {
        notes: "Reseated RAM".to_owned(),
    });

    let err = desk
        .service
        .resolve(&ctx, &ticket_id, &plan)
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("resolution should fail while tickets are read-only"))?;

    assert!(desk.store.tripped());
    assert!(matches!(
        err,
        ResolutionError::Failed {
            failed_at: ResolutionPhase::Closing,
            completed: Some(ResolutionPhase::Committing),
            ..
        }
    ));
    assert_eq!(desk.device("eq-1").await?.status, DeviceStatus::Active);
    let phase = err
        .resume_from()
        .ok_or_else(|| eyre::eyre!("failure should be resumable"))?;

    desk.store.recover();
    let resumed = desk.service.resume(&ctx, &ticket_id, phase).await?;
    let again = desk
        .service
        .resume(&ctx, &ticket_id, ResolutionPhase::Seeding)
        .await?;

    assert!(resumed.closure.is_some_and(|closure| closure.is_new()));
    assert!(again.closure.is_none());
    assert_eq!(again.feedback.id, resumed.feedback.id);
    assert_eq!(desk.store.inner().snapshot(Collection::Feedback)?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolved_tickets_leave_the_technician_queue(
    desk: Desk,
    ctx: ResolutionContext,
) -> Result<(), eyre::Report> {
    let ticket_id = seed_desktop_ticket(&desk).await?;
    let other = open_ticket("z9y8x7", "TK-1002", "eq-1");
    desk.put(Collection::Ticket, "z9y8x7", &other).await?;
    let technician = Email::new(TECH_EMAIL)?;
    assert_eq!(
        desk.tickets
            .get_all_tickets_pending_for_tech(&technician)
            .await?
            .len(),
        2
    );

    desk.service
        .resolve(&ctx, &ticket_id, &ResolutionPlan::NoChange(NoChange::default()))
        .await?;

    let pending = desk
        .tickets
        .get_all_tickets_pending_for_tech(&technician)
        .await?;
    let ids: Vec<&str> = pending.iter().map(|ticket| ticket.id().as_str()).collect();
    assert_eq!(ids, vec!["z9y8x7"]);
    Ok(())
}
