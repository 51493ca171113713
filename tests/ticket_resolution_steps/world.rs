//! Shared world state for ticket resolution BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use servicedesk::{
    device::{
        adapters::DocumentDeviceRepository,
        domain::{DeviceStatus, EquipmentActive, EquipmentId, InstalledItem, SlotMap},
    },
    feedback::adapters::DocumentFeedbackRepository,
    identity::domain::Identity,
    resolution::services::{
        ResolutionContext, ResolutionOutcome, ResolutionResult, TicketResolutionService,
    },
    store::{
        adapters::InMemoryDocumentStore,
        codec::{decode_document, encode_fields},
        domain::{Collection, DocumentId},
        ports::DocumentStore,
    },
    ticket::{adapters::DocumentTicketRepository, domain::TicketId},
};

/// Identifier of the resolving technician.
pub const TECH_UID: &str = "technicianUid000000000000000001";
/// Identifier of the reporting employee.
pub const EMPLOYEE_UID: &str = "employeeUid00000000000000000002";
/// Email of the reporting employee.
pub const EMPLOYEE_EMAIL: &str = "ana@corp.test";
/// Identifier of the deployed desktop every scenario starts from.
pub const DEVICE_ID: &str = "eq-1";

/// Service type used by the BDD world.
pub type TestResolutionService = TicketResolutionService<
    DocumentTicketRepository<InMemoryDocumentStore, DefaultClock>,
    DocumentDeviceRepository<InMemoryDocumentStore>,
    DocumentFeedbackRepository<InMemoryDocumentStore, DefaultClock>,
    DefaultClock,
>;

/// Scenario world for ticket resolution behaviour tests.
pub struct ResolutionWorld {
    pub store: InMemoryDocumentStore,
    pub service: TestResolutionService,
    pub feedback: Arc<DocumentFeedbackRepository<InMemoryDocumentStore, DefaultClock>>,
    pub ctx: ResolutionContext,
    pub ticket_id: Option<TicketId>,
    pub device_before: Option<EquipmentActive>,
    pub last_result: Option<ResolutionResult<ResolutionOutcome>>,
}

impl ResolutionWorld {
    /// Creates a world over an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the technician identity fixture is malformed.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryDocumentStore::new();
        let shared = Arc::new(store.clone());
        let clock = Arc::new(DefaultClock);
        let feedback = Arc::new(DocumentFeedbackRepository::new(
            Arc::clone(&shared),
            Arc::clone(&clock),
        ));
        let service = TicketResolutionService::new(
            Arc::new(DocumentTicketRepository::new(
                Arc::clone(&shared),
                Arc::clone(&clock),
            )),
            Arc::new(DocumentDeviceRepository::new(shared)),
            Arc::clone(&feedback),
            clock,
        );
        let technician = Identity::parse(TECH_UID, "tech@corp.test")
            .unwrap_or_else(|err| panic!("technician identity: {err}"));
        Self {
            store,
            service,
            feedback,
            ctx: ResolutionContext::new(technician),
            ticket_id: None,
            device_before: None,
            last_result: None,
        }
    }

    /// Stores `record` in `collection` under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or creation fails.
    pub fn put<T: serde::Serialize>(
        &self,
        collection: Collection,
        id: &str,
        record: &T,
    ) -> Result<(), eyre::Report> {
        let fields = encode_fields(record)?;
        let document_id =
            DocumentId::new(id).ok_or_else(|| eyre::eyre!("blank document id {id:?}"))?;
        run_async(self.store.create(collection, Some(document_id), fields))?;
        Ok(())
    }

    /// Loads the stored scenario device.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is missing or cannot be decoded.
    pub fn device(&self) -> Result<EquipmentActive, eyre::Report> {
        let document_id = DocumentId::new(DEVICE_ID)
            .ok_or_else(|| eyre::eyre!("blank device id"))?;
        let document = run_async(self.store.get(Collection::EquipmentActive, &document_id))?
            .ok_or_else(|| eyre::eyre!("device {DEVICE_ID} missing"))?;
        Ok(decode_document(&document)?)
    }

    /// Returns the ticket under test.
    ///
    /// # Errors
    ///
    /// Returns an error if no ticket was seeded.
    pub fn ticket_id(&self) -> Result<TicketId, eyre::Report> {
        self.ticket_id
            .clone()
            .ok_or_else(|| eyre::eyre!("missing ticket in scenario world"))
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds the desktop every scenario starts from.
///
/// # Errors
///
/// Returns an error if the device identifier is rejected.
pub fn scenario_desktop() -> Result<EquipmentActive, eyre::Report> {
    let item = |name: &str, serial: &str| InstalledItem {
        name: name.to_owned(),
        serial_number: serial.to_owned(),
        installation_date: None,
    };
    let components: SlotMap = [
        ("cpu", item("Intel i5-10500", "C-OLD")),
        ("mobo", item("Dell Q470", "M-OLD")),
        ("ram", item("Kingston 8GB", "R-OLD")),
        ("sto", item("SSD 256GB", "S-OLD")),
        ("psu", item("Dell 260W", "P-OLD")),
    ]
    .into_iter()
    .map(|(slot, installed)| (slot.to_owned(), installed))
    .collect();
    let peripherals: SlotMap = [
        ("monitor", item("Dell P2219H", "MON-OLD")),
        ("keyboard", item("Dell KB216", "KB-OLD")),
    ]
    .into_iter()
    .map(|(slot, installed)| (slot.to_owned(), installed))
    .collect();
    Ok(EquipmentActive {
        id: EquipmentId::new(DEVICE_ID)?,
        equipment_type: "Desktop".to_owned(),
        brand: "Dell".to_owned(),
        model: "OptiPlex 7080".to_owned(),
        serial_number: "OLD-SN".to_owned(),
        status: DeviceStatus::Maintenance,
        components,
        peripherals,
        last_maintenance: None,
        date_modified: None,
    })
}
