//! Media read completion model.
//!
//! Image selection is the one asynchronous-flavored interaction: the
//! presentation layer kicks off one read per selected file and reports each
//! completion here as it lands. Completion order across a multi-file
//! selection is not guaranteed, so append order may differ from selection
//! order. There is no cancellation, timeout or retry; a failed read appends
//! nothing but is recorded per-file so the presentation layer can surface it
//! without blocking the rest of the batch.

use serde::{Deserialize, Serialize};

use stockdeck_core::CoreError;

/// Opaque reference to a loaded image (data URL, path, object key — the
/// wizard only stores it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One file's read result, delivered whenever its read finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaOutcome {
    Loaded { reference: ImageRef },
    Failed { source_name: String, reason: String },
}

/// A read that did not produce an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFailure {
    pub source_name: String,
    pub error: CoreError,
}

/// Bookkeeping for one multi-file selection whose reads complete
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBatch {
    outstanding: usize,
    failures: Vec<MediaFailure>,
}

impl MediaBatch {
    pub fn new(file_count: usize) -> Self {
        Self {
            outstanding: file_count,
            failures: Vec::new(),
        }
    }

    /// Reads still in flight.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Whether every read in the selection has completed, one way or the
    /// other.
    pub fn is_settled(&self) -> bool {
        self.outstanding == 0
    }

    pub fn failures(&self) -> &[MediaFailure] {
        &self.failures
    }

    /// Record one completion. A successful read yields the reference to
    /// append; a failed one is logged and kept for per-file reporting.
    pub fn complete(&mut self, outcome: MediaOutcome) -> Option<ImageRef> {
        self.outstanding = self.outstanding.saturating_sub(1);
        match outcome {
            MediaOutcome::Loaded { reference } => Some(reference),
            MediaOutcome::Failed { source_name, reason } => {
                tracing::warn!(file = %source_name, %reason, "image read failed");
                self.failures.push(MediaFailure {
                    source_name,
                    error: CoreError::media_read(reason),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_completion_yields_the_reference() {
        let mut batch = MediaBatch::new(1);
        let appended = batch.complete(MediaOutcome::Loaded {
            reference: ImageRef::from("img-1"),
        });
        assert_eq!(appended, Some(ImageRef::from("img-1")));
        assert!(batch.is_settled());
        assert!(batch.failures().is_empty());
    }

    #[test]
    fn failed_read_is_recorded_without_blocking_the_batch() {
        let mut batch = MediaBatch::new(2);
        let appended = batch.complete(MediaOutcome::Failed {
            source_name: "broken.png".to_string(),
            reason: "truncated file".to_string(),
        });
        assert_eq!(appended, None);
        assert!(!batch.is_settled());

        let appended = batch.complete(MediaOutcome::Loaded {
            reference: ImageRef::from("img-2"),
        });
        assert_eq!(appended, Some(ImageRef::from("img-2")));
        assert!(batch.is_settled());

        assert_eq!(batch.failures().len(), 1);
        assert_eq!(batch.failures()[0].source_name, "broken.png");
        match &batch.failures()[0].error {
            CoreError::MediaRead(reason) => assert_eq!(reason, "truncated file"),
            other => panic!("expected MediaRead, got {other:?}"),
        }
    }

    #[test]
    fn completion_beyond_the_batch_saturates() {
        let mut batch = MediaBatch::new(0);
        batch.complete(MediaOutcome::Loaded {
            reference: ImageRef::from("stray"),
        });
        assert_eq!(batch.outstanding(), 0);
    }
}
