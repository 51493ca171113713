//! Unit tests for the device module.
