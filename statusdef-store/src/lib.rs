//! Registries and persistence for status definitions.
//!
//! # Architecture
//!
//! - [`CategoryRegistry`] and [`ItemRegistry`] are insertion-ordered maps with
//!   upsert semantics; validation failures are silent no-ops
//! - [`Catalog`] composes both registries with the category selection filter
//! - [`EditingSession`] stages drafts ([`CategoryEditor`], [`ItemEditor`]) as
//!   deep copies until they are committed
//! - [`DefinitionStore`] loads a catalog from a [`KeyValueStore`] and writes it
//!   back after every accepted mutation
//! - [`WorldBookSink`] is the integration point for pushing formats into an
//!   external document store

mod catalog;
mod config;
mod error;
mod kv;
mod persistent;
mod registry;
mod session;
mod sqlite;
mod worldbook;

pub use catalog::{AutoConfirm, Catalog, ConfirmDelete, DeleteTarget};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use kv::{CATEGORY_REGISTRY_KEY, ITEM_REGISTRY_KEY, KeyValueStore, MemoryStore};
pub use persistent::DefinitionStore;
pub use registry::{CategoryRegistry, ItemRegistry};
pub use session::{CategoryEditor, EditingSession, ItemEditor};
pub use sqlite::SqliteStore;
pub use worldbook::{WorldBookEntry, WorldBookSink, inject_item};
