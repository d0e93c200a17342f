//! Two-step removal: a request is captured here and only applied to the
//! collection after an explicit confirmation.

use super::aggregate::ProductId;
use super::store::ProductCollection;

/// A removal awaiting confirmation. The name is captured alongside the id
/// so the dialog can display it even if the product changes underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRemoval {
    pub id: ProductId,
    pub name: String,
}

/// Confirmation state machine. Idle while `pending` is `None`, awaiting
/// confirmation otherwise. At most one removal is pending at a time; a new
/// request while one is pending replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalFlow {
    pending: Option<PendingRemoval>,
}

impl RemovalFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a removal target. The collection is not touched yet.
    pub fn request(&mut self, id: ProductId, name: String) {
        self.pending = Some(PendingRemoval { id, name });
    }

    /// Apply the pending removal and return to idle. A no-op when nothing
    /// is pending or the product has since vanished from the collection.
    pub fn confirm(&mut self, products: &mut ProductCollection) {
        if let Some(pending) = self.pending.take() {
            products.remove(pending.id);
        }
    }

    /// Return to idle without touching the collection.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&PendingRemoval> {
        self.pending.as_ref()
    }
}
