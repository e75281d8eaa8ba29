//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. `id` is a
//! server-assigned integer — it defaults to 0 on deserialization so a
//! caller can build a create payload without inventing an identifier.

use serde::{Deserialize, Serialize};

/// A single todo item as exchanged with the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub completed: bool,
}
