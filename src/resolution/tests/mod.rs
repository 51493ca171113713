//! Unit tests for the resolution module.
