pub mod product_store;
pub mod removal_confirmation;
