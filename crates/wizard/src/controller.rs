use rand::Rng;
use serde::{Deserialize, Serialize};

use stockdeck_core::CoreResult;

use crate::codes::{self, CodeKind};
use crate::draft::{DraftField, DraftProduct};
use crate::media::{ImageRef, MediaBatch, MediaOutcome};
use crate::sink::ProductSink;

/// Number of wizard steps. Steps are strictly ordered, no skipping or
/// branching; the "advanced options" panel is a visibility toggle within
/// step 1, not a separate state.
pub const STEP_COUNT: u8 = 4;

/// Presentation metadata for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const STEPS: [StepInfo; STEP_COUNT as usize] = [
    StepInfo {
        title: "General Information",
        subtitle: "Basic Info + Category + Supplier + Inventory + Product Type",
    },
    StepInfo {
        title: "Pricing & Tax",
        subtitle: "All price and tax-related",
    },
    StepInfo {
        title: "Description & Media",
        subtitle: "Images + Description + Documents + SEO",
    },
    StepInfo {
        title: "Variants",
        subtitle: "Product Type and Variants",
    },
];

/// 1-based step position, always within [1, STEP_COUNT].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const LAST: Step = Step(STEP_COUNT);

    /// Construct from a 1-based index; None when out of bounds.
    pub fn new(index: u8) -> Option<Self> {
        (1..=STEP_COUNT).contains(&index).then_some(Step(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    pub fn is_last(self) -> bool {
        self.0 == STEP_COUNT
    }

    /// Next step; saturates at the last one.
    pub fn forward(self) -> Step {
        if self.is_last() { self } else { Step(self.0 + 1) }
    }

    /// Previous step; saturates at the first one.
    pub fn back(self) -> Step {
        if self.is_first() { self } else { Step(self.0 - 1) }
    }

    pub fn info(self) -> &'static StepInfo {
        &STEPS[(self.0 - 1) as usize]
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::FIRST
    }
}

/// Static suggestion set standing in for an external keyword-suggestion
/// service.
pub const SUGGESTED_KEYWORDS: [&str; 5] = [
    "Fittings",
    "Hinges",
    "Construction hardware materials",
    "Door and Windows",
    "Building",
];

/// A field-level validation message for the presentation layer.
///
/// `field` carries the presentation key of the offending input (same
/// camelCase names the draft serializes with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// View-state of the 4-step add-product flow.
///
/// Owns the draft and the step position for the lifetime of the screen; the
/// draft is discarded with the controller when the user navigates away, or
/// handed to a [`ProductSink`] by an explicit save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardController {
    draft: DraftProduct,
    step: Step,
    show_advanced: bool,
}

impl WizardController {
    /// Fresh wizard: empty draft, step 1, advanced panel hidden.
    pub fn new() -> Self {
        Self {
            draft: DraftProduct::default(),
            step: Step::FIRST,
            show_advanced: false,
        }
    }

    pub fn draft(&self) -> &DraftProduct {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn show_advanced(&self) -> bool {
        self.show_advanced
    }

    /// Whether the forward affordance reads "Save" instead of "Next".
    pub fn is_last_step(&self) -> bool {
        self.step.is_last()
    }

    /// Replace one scalar field. No validation is performed here; gating
    /// lives in [`validate`](Self::validate) for presentations that opt in.
    pub fn set_field(&mut self, field: DraftField) {
        let draft = core::mem::take(&mut self.draft);
        self.draft = draft.with_field(field);
    }

    /// Go to the next step; no-op on the last one.
    pub fn advance(&mut self) {
        self.step = self.step.forward();
    }

    /// Go to the previous step; no-op on the first one.
    pub fn retreat(&mut self) {
        self.step = self.step.back();
    }

    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
    }

    /// Append an image reference. Called once per completed file read, in
    /// completion order.
    pub fn add_image(&mut self, reference: ImageRef) {
        self.draft.push_image(reference);
    }

    /// Remove the image at `index` (positional). Returns the removed
    /// reference, or None when out of range.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        self.draft.remove_image(index)
    }

    /// Record one media read completion and append its image on success.
    /// Failures stay on the batch for per-file reporting.
    pub fn finish_media_read(&mut self, batch: &mut MediaBatch, outcome: MediaOutcome) {
        if let Some(reference) = batch.complete(outcome) {
            self.add_image(reference);
        }
    }

    /// Commit a keyword (the Enter-press action, not per-keystroke).
    /// Trimmed; empty/whitespace-only and duplicates are rejected. Returns
    /// whether the list changed.
    pub fn add_keyword(&mut self, text: &str) -> bool {
        self.draft.push_keyword(text)
    }

    /// Remove the keyword at `index` (positional).
    pub fn remove_keyword(&mut self, index: usize) -> Option<String> {
        self.draft.remove_keyword(index)
    }

    /// The static suggestion set, for display before applying.
    pub fn suggested_keywords(&self) -> &'static [&'static str] {
        &SUGGESTED_KEYWORDS
    }

    /// Append the suggestion set through the same trim+dedup path as manual
    /// entry, so re-applying never duplicates. Returns how many were
    /// actually added.
    pub fn apply_suggested_keywords(&mut self) -> usize {
        let mut added = 0;
        for keyword in SUGGESTED_KEYWORDS {
            if self.draft.push_keyword(keyword) {
                added += 1;
            }
        }
        added
    }

    /// Generate a placeholder code and assign it to the matching field.
    pub fn generate_code(&mut self, kind: CodeKind) {
        self.generate_code_with(kind, &mut rand::thread_rng());
    }

    /// Same as [`generate_code`](Self::generate_code) with an explicit RNG
    /// for deterministic tests.
    pub fn generate_code_with<R: Rng + ?Sized>(&mut self, kind: CodeKind, rng: &mut R) {
        let code = codes::generate_code_with(kind, rng);
        let field = match kind {
            CodeKind::Barcode => DraftField::Barcode(code),
            CodeKind::Ean => DraftField::Ean(code),
        };
        self.set_field(field);
    }

    /// Select a variant axis (e.g. "color"). Selection is a set; returns
    /// whether it changed.
    pub fn select_variant_axis(&mut self, kind: &str) -> bool {
        self.draft.select_axis(kind)
    }

    pub fn deselect_variant_axis(&mut self, kind: &str) -> bool {
        self.draft.deselect_axis(kind)
    }

    /// Replace the option list of a selected axis; false when the axis is
    /// not selected.
    pub fn set_axis_options(&mut self, kind: &str, options: Vec<String>) -> bool {
        self.draft.set_axis_options(kind, options)
    }

    /// Field-level issues for the current draft. Empty means the draft can
    /// be committed. `advance`/`save` deliberately do not call this — step
    /// navigation is never gated; presentations that want gating use
    /// [`try_advance`](Self::try_advance) / [`try_save`](Self::try_save).
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.draft.product_name.trim().is_empty() {
            issues.push(FieldIssue {
                field: "productName",
                message: "product name is required".to_string(),
            });
        }
        if self.draft.sku.trim().is_empty() {
            issues.push(FieldIssue {
                field: "sku",
                message: "SKU is required".to_string(),
            });
        }
        issues
    }

    /// Validation-gated advance. The ungated [`advance`](Self::advance)
    /// remains the default behavior.
    pub fn try_advance(&mut self) -> Result<(), Vec<FieldIssue>> {
        let issues = self.validate();
        if issues.is_empty() {
            self.advance();
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Hand the complete draft to the sink. On success the caller navigates
    /// away; on failure the wizard (and its draft) is unchanged.
    pub fn save<S: ProductSink>(&self, sink: &S) -> CoreResult<()> {
        sink.accept(&self.draft)?;
        tracing::info!(
            step = self.step.index(),
            images = self.draft.images.len(),
            keywords = self.draft.keywords.len(),
            "draft handed to product sink"
        );
        Ok(())
    }

    /// Identical hand-off to [`save`](Self::save); no separate draft
    /// storage exists in this scope.
    pub fn save_draft<S: ProductSink>(&self, sink: &S) -> CoreResult<()> {
        self.save(sink)
    }

    /// Validation-gated save.
    pub fn try_save<S: ProductSink>(&self, sink: &S) -> Result<(), Vec<FieldIssue>> {
        let issues = self.validate();
        if !issues.is_empty() {
            return Err(issues);
        }
        self.save(sink).map_err(|e| {
            vec![FieldIssue {
                field: "sink",
                message: e.to_string(),
            }]
        })
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}
