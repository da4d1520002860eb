//! # tick-core
//!
//! Core types, ID generation, ordering, and error types for Ticklist.
//!
//! This crate provides the foundational types shared across all Ticklist crates:
//! - The `Task` entity
//! - `Priority`, `ViewOrder`, and `StorageFormat` enums
//! - ID prefix constants and generation
//! - `TaskList`, the owned task collection with display-index resolution
//! - Cross-cutting error types
//! - CLI response rows

pub mod collection;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;

pub use collection::{Completion, TaskList};
