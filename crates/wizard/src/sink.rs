//! Product sink boundary.

use std::sync::{Arc, Mutex, PoisonError};

use stockdeck_core::CoreResult;

use crate::draft::DraftProduct;

/// External collaborator that takes a finished draft off the wizard's hands
/// (product repository, API client, …).
///
/// `accept` borrows the draft: on failure the wizard still owns its state,
/// so an unavailable sink loses nothing. Implementations signal an
/// unreachable backend with [`CoreError::SinkUnavailable`].
///
/// [`CoreError::SinkUnavailable`]: stockdeck_core::CoreError::SinkUnavailable
pub trait ProductSink {
    fn accept(&self, draft: &DraftProduct) -> CoreResult<()>;
}

impl<S> ProductSink for Arc<S>
where
    S: ProductSink + ?Sized,
{
    fn accept(&self, draft: &DraftProduct) -> CoreResult<()> {
        (**self).accept(draft)
    }
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySink {
    received: Mutex<Vec<DraftProduct>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far, in hand-off order.
    pub fn received(&self) -> Vec<DraftProduct> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ProductSink for InMemorySink {
    fn accept(&self, draft: &DraftProduct) -> CoreResult<()> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(draft.clone());
        Ok(())
    }
}
