use super::product_store::ProductStore;
use contracts::domain::a001_product::{PendingRemoval, ProductId, RemovalFlow};
use leptos::prelude::*;

/// Service gating product removal behind a confirmation dialog.
///
/// Holds the [`RemovalFlow`] state machine in a signal so the dialog shows
/// and hides reactively. Confirm is the only path that reaches
/// [`ProductStore::remove`] from the card list.
#[derive(Clone, Copy)]
pub struct RemovalConfirmation {
    flow: RwSignal<RemovalFlow>,
}

impl RemovalConfirmation {
    pub fn new() -> Self {
        Self {
            flow: RwSignal::new(RemovalFlow::new()),
        }
    }

    /// Capture a removal target and open the dialog. A second request
    /// while one is pending replaces it.
    pub fn request_removal(&self, id: ProductId, name: String) {
        self.flow.update(|flow| flow.request(id, name));
    }

    /// Apply the pending removal against the store and close the dialog.
    pub fn confirm(&self, store: ProductStore) {
        self.flow.update(|flow| store.apply_removal(flow));
    }

    /// Close the dialog without touching the store.
    pub fn cancel(&self) {
        self.flow.update(|flow| flow.cancel());
    }

    /// Current pending target, or `None` while idle. Reactive.
    pub fn pending(&self) -> Option<PendingRemoval> {
        self.flow.with(|flow| flow.pending().cloned())
    }
}

impl Default for RemovalConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_removal_confirmation() -> RemovalConfirmation {
    use_context::<RemovalConfirmation>().expect("RemovalConfirmation not found in context")
}
