//! Given steps for ticket resolution BDD scenarios.

use super::world::{
    DEVICE_ID, EMPLOYEE_EMAIL, EMPLOYEE_UID, ResolutionWorld, TECH_UID, scenario_desktop,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use servicedesk::{
    device::domain::{Equipment, EquipmentId, InstalledItem, SlotMap},
    store::domain::Collection,
    ticket::domain::{Folio, Ticket, TicketId},
};

#[given(r#"an open ticket "{folio}" for a deployed desktop"#)]
fn open_ticket_for_desktop(world: &mut ResolutionWorld, folio: String) -> Result<(), eyre::Report> {
    let ticket_id = TicketId::new(format!("ticket-{folio}"))?;
    let ticket = Ticket::new(
        ticket_id.clone(),
        Folio::new(folio)?,
        EquipmentId::new(DEVICE_ID)?,
        "Hardware",
    )
    .with_assignee(TECH_UID, "tech@corp.test")
    .with_reporter(EMPLOYEE_UID, EMPLOYEE_EMAIL);
    world
        .put(Collection::Ticket, ticket_id.as_str(), &ticket)
        .wrap_err("seed ticket")?;

    let device = scenario_desktop()?;
    world
        .put(Collection::EquipmentActive, DEVICE_ID, &device)
        .wrap_err("seed device")?;
    world.ticket_id = Some(ticket_id);
    world.device_before = Some(device);
    Ok(())
}

#[given(r#"the catalog offers desktop "{equipment_id}""#)]
fn catalog_offers_desktop(
    world: &mut ResolutionWorld,
    equipment_id: String,
) -> Result<(), eyre::Report> {
    let components: SlotMap = ["cpu", "mobo", "ram", "sto", "psu"]
        .into_iter()
        .map(|slot| {
            (
                slot.to_owned(),
                InstalledItem {
                    name: format!("OptiPlex 7090 {slot}"),
                    ..InstalledItem::default()
                },
            )
        })
        .collect();
    let catalog = Equipment {
        id: EquipmentId::new(equipment_id.as_str())?,
        equipment_type: "Desktop".to_owned(),
        brand: "Dell".to_owned(),
        model: "OptiPlex 7090".to_owned(),
        components,
    };
    world
        .put(Collection::Equipment, &equipment_id, &catalog)
        .wrap_err("seed catalog device")
}
