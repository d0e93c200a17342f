//! In-memory product collection: the canonical state behind the card list.

use super::aggregate::{Product, ProductDraft, ProductId, ValidationError};
use super::sale::{compute_sale_value, SaleInput, WeightUnit};
use std::collections::HashMap;

/// Owns the product list and the transient per-product sale inputs.
///
/// Products keep insertion order for display. A missing entry in
/// `sale_inputs` means "no input yet" for that card; entries are created
/// lazily on the first keystroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCollection {
    items: Vec<Product>,
    sale_inputs: HashMap<ProductId, SaleInput>,
}

impl ProductCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append the resulting product.
    ///
    /// On rejection nothing is mutated; the error kind says why. The store
    /// assigns the identity itself, so uniqueness holds even under rapid
    /// successive additions.
    pub fn add(&mut self, draft: &ProductDraft) -> Result<ProductId, ValidationError> {
        let candidate = draft.validate()?;
        let product = Product::from_new(candidate);
        let id = product.id;
        self.items.push(product);
        Ok(id)
    }

    /// Remove a product and its sale input. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|product| product.id != id);
        self.sale_inputs.remove(&id);
    }

    pub fn increment_quantity(&mut self, id: ProductId) {
        if let Some(product) = self.get_mut(id) {
            product.sack_quantity += 1;
        }
    }

    /// Decrement, floored at zero. Decrementing an empty stack is defined
    /// behavior, not an error.
    pub fn decrement_quantity(&mut self, id: ProductId) {
        if let Some(product) = self.get_mut(id) {
            product.sack_quantity = product.sack_quantity.saturating_sub(1);
        }
    }

    /// Overwrite the weight text of the product's sale input, creating a
    /// default entry first if none exists.
    pub fn set_sale_weight(&mut self, id: ProductId, weight: String) {
        self.sale_inputs.entry(id).or_default().weight = weight;
    }

    /// Overwrite the unit of the product's sale input, creating a default
    /// entry first if none exists.
    pub fn set_sale_unit(&mut self, id: ProductId, unit: WeightUnit) {
        self.sale_inputs.entry(id).or_default().unit = unit;
    }

    pub fn products(&self) -> &[Product] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    pub fn sale_input(&self, id: ProductId) -> Option<&SaleInput> {
        self.sale_inputs.get(&id)
    }

    /// Current sale value for a product, derived from its latest input.
    /// Zero for unknown ids and for absent or invalid input.
    pub fn sale_value(&self, id: ProductId) -> f64 {
        match self.get(id) {
            Some(product) => compute_sale_value(product, self.sale_inputs.get(&id)),
            None => 0.0,
        }
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.items.iter_mut().find(|product| product.id == id)
    }
}
