//! Port contracts for device and catalog persistence.

pub mod repository;

pub use repository::{
    DeviceFilter, DeviceRepository, DeviceRepositoryError, DeviceRepositoryResult,
};
