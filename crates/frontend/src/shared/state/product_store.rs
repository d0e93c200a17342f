use contracts::domain::a001_product::{
    ProductCollection, ProductDraft, ProductId, RemovalFlow, SaleInput, ValidationError,
    WeightUnit,
};
use leptos::prelude::*;

/// App-wide product store, provided once via context.
///
/// Wraps the collection in a single `RwSignal`, so every mutation is
/// visible to the next render. All state transitions live in
/// [`ProductCollection`]; this service only routes them through the
/// reactive graph and logs them.
#[derive(Clone, Copy)]
pub struct ProductStore {
    products: RwSignal<ProductCollection>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(ProductCollection::new()),
        }
    }

    /// Validate and append a draft. The create form discards the error to
    /// keep rejection silent; it is still returned for callers that care.
    pub fn add(&self, draft: &ProductDraft) -> Result<ProductId, ValidationError> {
        let result = self.products.write().add(draft);
        match &result {
            Ok(id) => log::debug!("product added: {} ({:?})", draft.name.trim(), id),
            Err(e) => log::debug!("product draft rejected: {}", e),
        }
        result
    }

    pub fn remove(&self, id: ProductId) {
        log::debug!("product removed: {:?}", id);
        self.products.update(|collection| collection.remove(id));
    }

    /// Let a confirmed removal flow apply itself to the collection.
    pub fn apply_removal(&self, flow: &mut RemovalFlow) {
        if let Some(pending) = flow.pending() {
            log::debug!("removal confirmed: {} ({:?})", pending.name, pending.id);
        }
        self.products.update(|collection| flow.confirm(collection));
    }

    pub fn increment_quantity(&self, id: ProductId) {
        self.products
            .update(|collection| collection.increment_quantity(id));
    }

    pub fn decrement_quantity(&self, id: ProductId) {
        self.products
            .update(|collection| collection.decrement_quantity(id));
    }

    pub fn set_sale_weight(&self, id: ProductId, weight: String) {
        self.products
            .update(|collection| collection.set_sale_weight(id, weight));
    }

    pub fn set_sale_unit(&self, id: ProductId, unit: WeightUnit) {
        self.products
            .update(|collection| collection.set_sale_unit(id, unit));
    }

    /// Reactive read access to the whole collection.
    pub fn with<T>(&self, f: impl FnOnce(&ProductCollection) -> T) -> T {
        self.products.with(f)
    }

    pub fn is_empty(&self) -> bool {
        self.products.with(|collection| collection.is_empty())
    }

    pub fn sale_input(&self, id: ProductId) -> SaleInput {
        self.products
            .with(|collection| collection.sale_input(id).cloned().unwrap_or_default())
    }

    /// Live sale total for a card, re-derived on every signal change so it
    /// can never lag behind the input.
    pub fn sale_value(&self, id: ProductId) -> f64 {
        self.products.with(|collection| collection.sale_value(id))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the store from context; the `App` component provides it.
pub fn use_product_store() -> ProductStore {
    use_context::<ProductStore>().expect("ProductStore not found in context")
}
