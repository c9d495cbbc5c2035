//! Types shared between the storage gateway and the HTTP layer.

pub mod error;
pub mod types;
