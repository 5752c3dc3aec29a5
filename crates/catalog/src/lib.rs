//! Catalog view-state module.
//!
//! This crate holds the read-only product grid's state: the entry read model
//! sourced from an external collaborator, stock-level classification, and the
//! query/category filter that derives the visible list. Pure view-state logic
//! only (no IO, no HTTP, no storage).

pub mod entry;
pub mod view;

pub use entry::{sample_entries, CatalogEntry, EntryStatus, StockStatus};
pub use view::{CatalogView, CategoryFilter, FilterState};
