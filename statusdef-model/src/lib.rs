//! Status definition model.
//!
//! Defines the schema types an operator authors for the status-tracking
//! framework:
//! - [`CategoryDefinition`] — a named, ordered grouping with a [`CategoryScope`]
//! - [`ItemDefinition`] — the schema of one tracked value or list, made of
//!   ordered [`ItemDefinitionPart`]s
//! - [`generate_format`] — derives the format string an external
//!   text-generation process emits updates in
//!
//! These types carry no I/O. Registries, persistence and editing sessions live
//! in `statusdef-store`.

mod category;
mod format;
mod item;

pub use category::{CategoryDefinition, CategoryScope};
pub use format::{
    CHARACTER_SCOPE_TOKEN, DEFAULT_SECONDARY_SEPARATOR, LIST_CONTINUATION, SHARED_SCOPE_TOKEN,
    generate_format,
};
pub use item::{
    DEFAULT_SEPARATOR, EntryType, ItemDefinition, ItemDefinitionPart, MoveDirection,
    PartDataType, PartValidation,
};
