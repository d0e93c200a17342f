use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Display name of the stock item
    pub name: String,

    /// Price of one whole sack
    #[serde(rename = "sackPrice")]
    pub sack_price: f64,

    /// Price per kilogram, used for loose sales by weight
    #[serde(rename = "perKiloPrice")]
    pub per_kilo_price: f64,

    /// Sacks currently in stock. Unsigned, so the never-below-zero
    /// invariant holds by construction.
    #[serde(rename = "sackQuantity")]
    pub sack_quantity: u32,

    #[serde(default)]
    pub metadata: EntityMetadata,
}

// ============================================================================
// Draft / validation
// ============================================================================

/// Rejection kinds for a product draft. The UI discards these (the form is
/// a silent no-op on rejection), but callers that want to know why a draft
/// was refused can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("product name is empty")]
    EmptyName,
    #[error("sack price is missing, non-numeric, or zero")]
    InvalidSackPrice,
    #[error("per-kilo price is missing, non-numeric, or zero")]
    InvalidPerKiloPrice,
    #[error("sack quantity is missing, non-integer, or zero")]
    InvalidSackQuantity,
}

/// The four raw text fields exactly as typed into the create form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(rename = "sackPrice")]
    pub sack_price: String,
    #[serde(rename = "perKiloPrice")]
    pub per_kilo_price: String,
    #[serde(rename = "sackQuantity")]
    pub sack_quantity: String,
}

/// A validated candidate, ready to be appended to the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub sack_price: f64,
    pub per_kilo_price: f64,
    pub sack_quantity: u32,
}

impl ProductDraft {
    /// Validate the raw fields into a [`NewProduct`].
    ///
    /// A price or quantity that parses to exactly `0` is rejected the same
    /// way as a non-numeric entry: the form treats a zero as not entered.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let sack_price = parse_positive_price(&self.sack_price)
            .ok_or(ValidationError::InvalidSackPrice)?;
        let per_kilo_price = parse_positive_price(&self.per_kilo_price)
            .ok_or(ValidationError::InvalidPerKiloPrice)?;

        let sack_quantity = self
            .sack_quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|qty| *qty > 0)
            .ok_or(ValidationError::InvalidSackQuantity)?;

        Ok(NewProduct {
            name: name.to_string(),
            sack_price,
            per_kilo_price,
            sack_quantity,
        })
    }
}

fn parse_positive_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

impl Product {
    /// Materialize a validated candidate with a fresh identity.
    pub fn from_new(candidate: NewProduct) -> Self {
        Self {
            id: ProductId::new_v4(),
            name: candidate.name,
            sack_price: candidate.sack_price,
            per_kilo_price: candidate.per_kilo_price,
            sack_quantity: candidate.sack_quantity,
            metadata: EntityMetadata::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, sack: &str, kilo: &str, qty: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            sack_price: sack.to_string(),
            per_kilo_price: kilo.to_string(),
            sack_quantity: qty.to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        let new = draft("Ração Premium", "120", "12", "50").validate().unwrap();
        assert_eq!(new.name, "Ração Premium");
        assert_eq!(new.sack_price, 120.0);
        assert_eq!(new.per_kilo_price, 12.0);
        assert_eq!(new.sack_quantity, 50);
    }

    #[test]
    fn name_is_trimmed() {
        let new = draft("  Ração Premium  ", "120", "12", "50")
            .validate()
            .unwrap();
        assert_eq!(new.name, "Ração Premium");
    }

    #[test]
    fn blank_name_rejected() {
        assert_eq!(
            draft("   ", "120", "12", "50").validate(),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn non_numeric_price_rejected() {
        assert_eq!(
            draft("Ração", "abc", "12", "50").validate(),
            Err(ValidationError::InvalidSackPrice)
        );
        assert_eq!(
            draft("Ração", "120", "", "50").validate(),
            Err(ValidationError::InvalidPerKiloPrice)
        );
    }

    #[test]
    fn zero_values_rejected_like_missing_input() {
        assert_eq!(
            draft("Ração", "0", "12", "50").validate(),
            Err(ValidationError::InvalidSackPrice)
        );
        assert_eq!(
            draft("Ração", "120", "0", "50").validate(),
            Err(ValidationError::InvalidPerKiloPrice)
        );
        assert_eq!(
            draft("Ração", "120", "12", "0").validate(),
            Err(ValidationError::InvalidSackQuantity)
        );
    }

    #[test]
    fn negative_and_fractional_quantities_rejected() {
        assert_eq!(
            draft("Ração", "120", "12", "-3").validate(),
            Err(ValidationError::InvalidSackQuantity)
        );
        assert_eq!(
            draft("Ração", "120", "12", "2.5").validate(),
            Err(ValidationError::InvalidSackQuantity)
        );
    }

    #[test]
    fn product_serializes_with_camel_case_keys() {
        let candidate = draft("Ração", "120", "12", "50").validate().unwrap();
        let value = serde_json::to_value(Product::from_new(candidate)).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "name", "sackPrice", "perKiloPrice", "sackQuantity", "metadata"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object["sackPrice"], serde_json::json!(120.0));
    }

    #[test]
    fn fresh_products_get_distinct_ids() {
        let candidate = draft("Ração", "120", "12", "50").validate().unwrap();
        let a = Product::from_new(candidate.clone());
        let b = Product::from_new(candidate);
        assert_ne!(a.id, b.id);
    }
}
