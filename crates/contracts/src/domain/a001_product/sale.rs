//! Ad-hoc sale calculation: weight sold against a product's per-kilo price.

use super::aggregate::Product;
use serde::{Deserialize, Serialize};

/// Unit the sale weight was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
}

impl WeightUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "kg",
            WeightUnit::Gram => "g",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "g" => WeightUnit::Gram,
            _ => WeightUnit::Kilogram,
        }
    }
}

/// Transient per-product sale entry. The weight stays raw text while the
/// user is typing; it is only interpreted at calculation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleInput {
    pub weight: String,
    pub unit: WeightUnit,
}

/// Compute the sale value for a product given the current (possibly absent)
/// sale input.
///
/// Empty, non-numeric, and non-positive weights all yield `0.0`; a weight
/// in grams is converted to kilograms before multiplying by the per-kilo
/// price. Pure and deterministic, so callers re-invoke it on every
/// keystroke instead of caching totals.
pub fn compute_sale_value(product: &Product, input: Option<&SaleInput>) -> f64 {
    let Some(input) = input else {
        return 0.0;
    };
    if input.weight.is_empty() {
        return 0.0;
    }

    let Ok(weight) = input.weight.trim().parse::<f64>() else {
        return 0.0;
    };
    if !weight.is_finite() || weight <= 0.0 {
        return 0.0;
    }

    // kg is the pricing unit; 1000 g = 1 kg
    let kilograms = match input.unit {
        WeightUnit::Kilogram => weight,
        WeightUnit::Gram => weight / 1000.0,
    };

    kilograms * product.per_kilo_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::{NewProduct, Product};

    fn product_at(per_kilo_price: f64) -> Product {
        Product::from_new(NewProduct {
            name: "Ração Premium".to_string(),
            sack_price: 120.0,
            per_kilo_price,
            sack_quantity: 50,
        })
    }

    fn input(weight: &str, unit: WeightUnit) -> SaleInput {
        SaleInput {
            weight: weight.to_string(),
            unit,
        }
    }

    #[test]
    fn absent_input_is_zero() {
        assert_eq!(compute_sale_value(&product_at(12.0), None), 0.0);
    }

    #[test]
    fn empty_and_non_numeric_weights_are_zero() {
        let p = product_at(12.0);
        assert_eq!(compute_sale_value(&p, Some(&input("", WeightUnit::Kilogram))), 0.0);
        assert_eq!(compute_sale_value(&p, Some(&input("abc", WeightUnit::Kilogram))), 0.0);
        assert_eq!(compute_sale_value(&p, Some(&input("1,5", WeightUnit::Kilogram))), 0.0);
    }

    #[test]
    fn non_positive_weights_are_zero() {
        let p = product_at(12.0);
        assert_eq!(compute_sale_value(&p, Some(&input("0", WeightUnit::Kilogram))), 0.0);
        assert_eq!(compute_sale_value(&p, Some(&input("-2", WeightUnit::Gram))), 0.0);
    }

    #[test]
    fn two_kilos_at_twelve_is_twenty_four() {
        let p = product_at(12.0);
        let value = compute_sale_value(&p, Some(&input("2", WeightUnit::Kilogram)));
        assert!((value - 24.0).abs() < 1e-9);
    }

    #[test]
    fn five_hundred_grams_at_twelve_is_six() {
        let p = product_at(12.0);
        let value = compute_sale_value(&p, Some(&input("500", WeightUnit::Gram)));
        assert!((value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn grams_and_kilograms_agree() {
        let p = product_at(7.35);
        for (grams, kilos) in [("250", "0.25"), ("1000", "1"), ("1750", "1.75")] {
            let in_grams = compute_sale_value(&p, Some(&input(grams, WeightUnit::Gram)));
            let in_kilos = compute_sale_value(&p, Some(&input(kilos, WeightUnit::Kilogram)));
            assert!(
                (in_grams - in_kilos).abs() < 1e-9,
                "{grams} g and {kilos} kg disagree: {in_grams} vs {in_kilos}"
            );
        }
    }

    #[test]
    fn fractional_kilos_are_supported() {
        let p = product_at(12.0);
        let value = compute_sale_value(&p, Some(&input("0.5", WeightUnit::Kilogram)));
        assert!((value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn unit_round_trips_through_its_tag() {
        assert_eq!(WeightUnit::from_str_or_default("kg"), WeightUnit::Kilogram);
        assert_eq!(WeightUnit::from_str_or_default("g"), WeightUnit::Gram);
        assert_eq!(WeightUnit::Gram.as_str(), "g");
        // anything unexpected falls back to the default unit
        assert_eq!(WeightUnit::from_str_or_default("lbs"), WeightUnit::Kilogram);
        // serde uses the same short tags on the wire
        assert_eq!(serde_json::to_string(&WeightUnit::Gram).unwrap(), "\"g\"");
        assert_eq!(serde_json::to_string(&WeightUnit::Kilogram).unwrap(), "\"kg\"");
    }
}
