//! Device repository backed by the `EquipmentActive`, `Equipment`, and
//! `Component` collections.

use async_trait::async_trait;
use std::sync::Arc;

use crate::device::{
    domain::{
        Component, ComponentId, DevicePatch, Equipment, EquipmentActive, EquipmentId, TypeId,
    },
    ports::{DeviceFilter, DeviceRepository, DeviceRepositoryError, DeviceRepositoryResult},
};
use crate::store::{
    codec::{decode_document, encode_fields},
    domain::{Collection, DocumentId, Query},
    ports::{DocumentStore, DocumentStoreError},
};

/// [`DeviceRepository`] over any [`DocumentStore`].
#[derive(Debug)]
pub struct DocumentDeviceRepository<S> {
    store: Arc<S>,
}

impl<S> Clone for DocumentDeviceRepository<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: DocumentStore> DocumentDeviceRepository<S> {
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: DocumentStore> DeviceRepository for DocumentDeviceRepository<S> {
    async fn get_device_by_ticket(
        &self,
        equipment_id: &EquipmentId,
    ) -> DeviceRepositoryResult<EquipmentActive> {
        let document = self
            .store
            .get(Collection::EquipmentActive, &DocumentId::from(equipment_id))
            .await?
            .ok_or_else(|| DeviceRepositoryError::DeviceNotFound(equipment_id.clone()))?;
        Ok(decode_document(&document)?)
    }

    async fn get_equipment(&self, id: &EquipmentId) -> DeviceRepositoryResult<Equipment> {
        let document = self
            .store
            .get(Collection::Equipment, &DocumentId::from(id))
            .await?
            .ok_or_else(|| DeviceRepositoryError::EquipmentNotFound(id.clone()))?;
        Ok(decode_document(&document)?)
    }

    async fn get_all_devices(&self, filter: &DeviceFilter) -> DeviceRepositoryResult<Vec<Equipment>> {
        let query = match filter.equipment_type() {
            Some(equipment_type) => Query::new().where_eq("type", equipment_type),
            None => Query::new(),
        };
        let documents = self.store.query(Collection::Equipment, &query).await?;
        Ok(documents
            .iter()
            .map(decode_document)
            .collect::<Result<Vec<Equipment>, _>>()?)
    }

    async fn get_component(&self, id: &ComponentId) -> DeviceRepositoryResult<Option<Component>> {
        let document = self
            .store
            .get(Collection::Component, &DocumentId::from(id))
            .await?;
        Ok(document.as_ref().map(decode_document).transpose()?)
    }

    async fn get_components_by_type_id(
        &self,
        type_id: &str,
    ) -> DeviceRepositoryResult<Vec<Component>> {
        let wanted = TypeId::new(type_id)
            .map_err(|err| DeviceRepositoryError::InvalidArgument(err.to_string()))?;
        let query = Query::new().where_eq("typeId", wanted.as_str());
        let documents = self.store.query(Collection::Component, &query).await?;
        Ok(documents
            .iter()
            .map(decode_document)
            .collect::<Result<Vec<Component>, _>>()?)
    }

    async fn get_type_id_by_component_name(
        &self,
        name: &str,
    ) -> DeviceRepositoryResult<Option<TypeId>> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let query = Query::new().where_eq("name", trimmed).with_limit(1);
        let documents = self.store.query(Collection::Component, &query).await?;
        let component: Option<Component> = documents.first().map(decode_document).transpose()?;
        Ok(component.map(|part| part.type_id))
    }

    async fn update_active_device(
        &self,
        id: &EquipmentId,
        patch: &DevicePatch,
    ) -> DeviceRepositoryResult<()> {
        let fields = encode_fields(patch)?;
        if fields.is_empty() {
            return Err(DeviceRepositoryError::InvalidArgument(
                "device patch must set at least one field".to_owned(),
            ));
        }
        self.store
            .update(Collection::EquipmentActive, &DocumentId::from(id), fields)
            .await
            .map_err(|err| match err {
                DocumentStoreError::NotFound { .. } => {
                    DeviceRepositoryError::DeviceNotFound(id.clone())
                }
                other => DeviceRepositoryError::Store(other),
            })
    }
}
