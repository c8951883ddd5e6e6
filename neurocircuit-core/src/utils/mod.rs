//! Helpers shared by unit tests and integration tests.

pub mod testing;
