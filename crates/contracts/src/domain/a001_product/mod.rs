pub mod aggregate;
pub mod removal;
pub mod sale;
pub mod store;

pub use aggregate::{NewProduct, Product, ProductDraft, ProductId, ValidationError};
pub use removal::{PendingRemoval, RemovalFlow};
pub use sale::{compute_sale_value, SaleInput, WeightUnit};
pub use store::ProductCollection;
