//! Add-product wizard view-state module.
//!
//! This crate owns the in-progress product draft and the 4-step navigation
//! state the rendering layer presents one step at a time. The draft is built
//! up field-by-field, then handed whole to an external [`ProductSink`] on
//! save. Pure view-state logic only (no IO, no HTTP, no storage).

pub mod codes;
pub mod controller;
pub mod draft;
pub mod media;
pub mod sink;

pub use codes::{generate_code, generate_code_with, CodeKind};
pub use controller::{FieldIssue, Step, StepInfo, WizardController, STEPS, STEP_COUNT, SUGGESTED_KEYWORDS};
pub use draft::{DraftField, DraftProduct, ItemKind, ProductKind, TrackingMode, VariantAxis};
pub use media::{ImageRef, MediaBatch, MediaFailure, MediaOutcome};
pub use sink::{InMemorySink, ProductSink};
