use crate::shared::state::product_store::use_product_store;
use contracts::domain::a001_product::ProductDraft;
use leptos::prelude::*;

/// Create-item form shown inside the "Criar novo produto" modal.
///
/// Submit validates through the store. On success the fields clear and the
/// modal closes; on rejection the form stays open with the fields
/// untouched and no error is shown.
#[component]
#[allow(non_snake_case)]
pub fn ProductCreateForm(on_close: Callback<()>) -> impl IntoView {
    let store = use_product_store();
    let form = RwSignal::new(ProductDraft::default());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = form.get_untracked();
        if store.add(&draft).is_ok() {
            form.set(ProductDraft::default());
            on_close.run(());
        }
    };

    view! {
        <form class="popup-form" on:submit=handle_submit>
            <label class="popup-field">
                <span>"Nome do item"</span>
                <input
                    type="text"
                    prop:value=move || form.get().name
                    on:input=move |ev| {
                        form.update(|f| f.name = event_target_value(&ev));
                    }
                    placeholder="Ex: Ração Premium"
                />
            </label>

            <label class="popup-field">
                <span>"Preço do saco"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || form.get().sack_price
                    on:input=move |ev| {
                        form.update(|f| f.sack_price = event_target_value(&ev));
                    }
                    placeholder="Ex: 120.00"
                />
            </label>

            <label class="popup-field">
                <span>"Preço do quilo"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || form.get().per_kilo_price
                    on:input=move |ev| {
                        form.update(|f| f.per_kilo_price = event_target_value(&ev));
                    }
                    placeholder="Ex: 12.00"
                />
            </label>

            <label class="popup-field">
                <span>"Quantidade de sacos"</span>
                <input
                    type="number"
                    min="1"
                    step="1"
                    prop:value=move || form.get().sack_quantity
                    on:input=move |ev| {
                        form.update(|f| f.sack_quantity = event_target_value(&ev));
                    }
                    placeholder="Ex: 50"
                />
            </label>

            <div class="popup-actions">
                <button type="button" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button type="submit">"Adicionar"</button>
            </div>
        </form>
    }
}
