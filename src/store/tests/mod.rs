//! Unit tests for the document store boundary.
