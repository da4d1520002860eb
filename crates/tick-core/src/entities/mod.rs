//! Entity structs for Ticklist domain objects.
//!
//! Entities derive `Serialize`, `Deserialize`, and `JsonSchema` so the persisted
//! JSON shape can be validated against a generated schema.

mod task;

pub use task::{Task, normalize_description};
