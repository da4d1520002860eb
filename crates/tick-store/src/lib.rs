//! # tick-store
//!
//! Task file persistence and the task repository for Ticklist.
//!
//! - [`format`]: text (`[!] desc` / `[x] desc`) and JSON array codecs
//! - [`store`]: the [`TaskStore`] trait with file and in-memory stores
//! - [`service`]: [`TodoService`], which owns the collection and persists
//!   after every mutation

pub mod error;
pub mod format;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use service::TodoService;
pub use store::{FileStore, MemoryStore, TaskStore};
