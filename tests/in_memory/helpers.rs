//! Shared fixtures for in-memory service desk integration tests.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use servicedesk::{
    device::{
        adapters::DocumentDeviceRepository,
        domain::{
            Component, ComponentId, DeviceStatus, Equipment, EquipmentActive, EquipmentId,
            InstalledItem, SlotMap, TypeId,
        },
    },
    feedback::adapters::DocumentFeedbackRepository,
    identity::domain::Identity,
    resolution::services::{ResolutionContext, TicketResolutionService},
    store::{
        adapters::InMemoryDocumentStore,
        codec::encode_fields,
        domain::{Collection, Document, DocumentId, Fields, Query},
        ports::{DocumentStore, DocumentStoreError, DocumentStoreResult},
    },
    ticket::{
        adapters::DocumentTicketRepository,
        domain::{Folio, Ticket, TicketId},
    },
};

/// Identifier of the resolving technician.
pub const TECH_UID: &str = "technicianUid000000000000000001";
/// Identifier of the reporting employee.
pub const EMPLOYEE_UID: &str = "employeeUid00000000000000000002";
/// Email of the resolving technician.
pub const TECH_EMAIL: &str = "tech@corp.test";
/// Email of the reporting employee.
pub const EMPLOYEE_EMAIL: &str = "ana@corp.test";

/// Document store that can be told to fail updates to one collection.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryDocumentStore,
    failing: Arc<std::sync::Mutex<Option<Collection>>>,
    tripped: Arc<AtomicBool>,
}

impl FlakyStore {
    /// Makes every update to `collection` fail until [`Self::recover`].
    pub fn fail_updates_to(&self, collection: Collection) {
        if let Ok(mut failing) = self.failing.lock() {
            *failing = Some(collection);
        }
    }

    /// Lets updates through again.
    pub fn recover(&self) {
        if let Ok(mut failing) = self.failing.lock() {
            *failing = None;
        }
    }

    /// Returns whether an update was refused.
    pub fn tripped(&self) -> bool {
        self.tripped.load(Ordering::SeqCst)
    }

    /// Returns the wrapped store.
    pub fn inner(&self) -> &InMemoryDocumentStore {
        &self.inner
    }

    fn refuses(&self, collection: Collection) -> bool {
        self.failing
            .lock()
            .map(|failing| *failing == Some(collection))
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn get(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> DocumentStoreResult<Option<Document>> {
        self.inner.get(collection, id).await
    }

    async fn query(
        &self,
        collection: Collection,
        query: &Query,
    ) -> DocumentStoreResult<Vec<Document>> {
        self.inner.query(collection, query).await
    }

    async fn create(
        &self,
        collection: Collection,
        id: Option<DocumentId>,
        fields: Fields,
    ) -> DocumentStoreResult<DocumentId> {
        self.inner.create(collection, id, fields).await
    }

    async fn update(
        &self,
        collection: Collection,
        id: &DocumentId,
        patch: Fields,
    ) -> DocumentStoreResult<()> {
        if self.refuses(collection) {
            self.tripped.store(true, Ordering::SeqCst);
            return Err(DocumentStoreError::backend(std::io::Error::other(
                "write quota exceeded",
            )));
        }
        self.inner.update(collection, id, patch).await
    }
}

/// Resolution service wired to document repositories over [`FlakyStore`].
pub type TestService = TicketResolutionService<
    DocumentTicketRepository<FlakyStore, DefaultClock>,
    DocumentDeviceRepository<FlakyStore>,
    DocumentFeedbackRepository<FlakyStore, DefaultClock>,
    DefaultClock,
>;

/// Store, service, and repositories sharing one in-memory database.
pub struct Desk {
    pub store: FlakyStore,
    pub service: TestService,
    pub tickets: Arc<DocumentTicketRepository<FlakyStore, DefaultClock>>,
    pub feedback: Arc<DocumentFeedbackRepository<FlakyStore, DefaultClock>>,
}

impl Desk {
    /// Creates an empty desk.
    #[must_use]
    pub fn new() -> Self {
        let store = FlakyStore::default();
        let shared = Arc::new(store.clone());
        let clock = Arc::new(DefaultClock);
        let tickets = Arc::new(DocumentTicketRepository::new(
            Arc::clone(&shared),
            Arc::clone(&clock),
        ));
        let devices = Arc::new(DocumentDeviceRepository::new(Arc::clone(&shared)));
        let feedback = Arc::new(DocumentFeedbackRepository::new(
            Arc::clone(&shared),
            Arc::clone(&clock),
        ));
        let service = TicketResolutionService::new(
            Arc::clone(&tickets),
            devices,
            Arc::clone(&feedback),
            clock,
        );
        Self {
            store,
            service,
            tickets,
            feedback,
        }
    }

    /// Stores `record` under its own identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or creation fails.
    pub async fn put<T: serde::Serialize>(
        &self,
        collection: Collection,
        id: &str,
        record: &T,
    ) -> Result<(), eyre::Report> {
        let fields = encode_fields(record)?;
        let document_id =
            DocumentId::new(id).ok_or_else(|| eyre::eyre!("blank document id {id:?}"))?;
        self.store
            .inner()
            .create(collection, Some(document_id), fields)
            .await?;
        Ok(())
    }

    /// Loads the stored deployed device `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is missing or cannot be decoded.
    pub async fn device(&self, id: &str) -> Result<EquipmentActive, eyre::Report> {
        let document_id =
            DocumentId::new(id).ok_or_else(|| eyre::eyre!("blank document id {id:?}"))?;
        let document = self
            .store
            .inner()
            .get(Collection::EquipmentActive, &document_id)
            .await?
            .ok_or_else(|| eyre::eyre!("device {id} missing"))?;
        Ok(servicedesk::store::codec::decode_document(&document)?)
    }
}

impl Default for Desk {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides an empty desk.
#[fixture]
pub fn desk() -> Desk {
    Desk::new()
}

/// Provides the resolving technician's context.
#[fixture]
pub fn ctx() -> ResolutionContext {
    ResolutionContext::new(
        Identity::parse(TECH_UID, TECH_EMAIL)
            .map(|identity| identity.with_display_name("Tomás"))
            .unwrap_or_else(|err| panic!("technician identity: {err}")),
    )
}

/// Builds an open ticket against device `equipment_id`.
///
/// # Panics
///
/// Panics if an identifier is blank.
#[must_use]
pub fn open_ticket(id: &str, folio: &str, equipment_id: &str) -> Ticket {
    let ticket_id = TicketId::new(id).unwrap_or_else(|err| panic!("ticket id: {err}"));
    let folio_value = Folio::new(folio).unwrap_or_else(|err| panic!("folio: {err}"));
    let equipment = EquipmentId::new(equipment_id).unwrap_or_else(|err| panic!("device id: {err}"));
    Ticket::new(ticket_id, folio_value, equipment, "Hardware")
        .with_assignee(TECH_UID, TECH_EMAIL)
        .with_reporter(EMPLOYEE_UID, EMPLOYEE_EMAIL)
        .with_employee_name("Ana Ruiz")
}

/// Builds an installed item.
#[must_use]
pub fn item(name: &str, serial: &str) -> InstalledItem {
    InstalledItem {
        name: name.to_owned(),
        serial_number: serial.to_owned(),
        installation_date: None,
    }
}

/// Builds a slot map from `(slot, name, serial)` triples.
#[must_use]
pub fn slots(entries: &[(&str, &str, &str)]) -> SlotMap {
    entries
        .iter()
        .map(|(slot, name, serial)| ((*slot).to_owned(), item(name, serial)))
        .collect()
}

/// Builds a desktop with five internal parts and two peripherals.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn desktop(id: &str) -> EquipmentActive {
    EquipmentActive {
        id: EquipmentId::new(id).unwrap_or_else(|err| panic!("device id: {err}")),
        equipment_type: "Desktop".to_owned(),
        brand: "Dell".to_owned(),
        model: "OptiPlex 7080".to_owned(),
        serial_number: "OLD-SN".to_owned(),
        status: DeviceStatus::Maintenance,
        components: slots(&[
            ("cpu", "Intel i5-10500", "C-OLD"),
            ("mobo", "Dell Q470", "M-OLD"),
            ("ram", "Kingston 8GB", "R-OLD"),
            ("sto", "SSD 256GB", "S-OLD"),
            ("psu", "Dell 260W", "P-OLD"),
        ]),
        peripherals: slots(&[
            ("monitor", "Dell P2219H", "MON-OLD"),
            ("keyboard", "Dell KB216", "KB-OLD"),
        ]),
        last_maintenance: None,
        date_modified: None,
    }
}

/// Builds a catalog desktop.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn catalog_desktop(id: &str, model: &str, components: SlotMap) -> Equipment {
    Equipment {
        id: EquipmentId::new(id).unwrap_or_else(|err| panic!("catalog id: {err}")),
        equipment_type: "Desktop".to_owned(),
        brand: "Dell".to_owned(),
        model: model.to_owned(),
        components,
    }
}

/// Builds a catalog part.
///
/// # Panics
///
/// Panics if an identifier is blank.
#[must_use]
pub fn part(id: &str, name: &str, type_id: &str) -> Component {
    Component {
        id: ComponentId::new(id).unwrap_or_else(|err| panic!("component id: {err}")),
        name: name.to_owned(),
        type_id: TypeId::new(type_id).unwrap_or_else(|err| panic!("type id: {err}")),
        brand: "Generic".to_owned(),
        model: name.to_owned(),
    }
}
