//! Enums and generated lookup types exercised by the integration tests.

pub mod elements;
pub mod targets;
