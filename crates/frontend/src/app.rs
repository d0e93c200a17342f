use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::state::product_store::ProductStore;
use crate::shared::state::removal_confirmation::RemovalConfirmation;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The store owns the canonical product collection; everything mutates
    // through it via context.
    provide_context(ProductStore::new());

    // Removal confirmation gate, shared between the list and its dialog.
    provide_context(RemovalConfirmation::new());

    view! {
        <ProductList />
    }
}
