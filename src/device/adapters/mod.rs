//! Device repository adapters.

pub mod document;

pub use document::DocumentDeviceRepository;
