use crate::shared::state::product_store::use_product_store;
use crate::shared::state::removal_confirmation::use_removal_confirmation;
use leptos::ev;
use leptos::prelude::*;

/// Confirmation dialog for product removal.
///
/// Renders only while a removal is pending. Clicking the overlay or
/// "Cancelar" cancels; "Apagar" applies the removal to the store.
#[component]
pub fn ConfirmRemovalDialog() -> impl IntoView {
    let store = use_product_store();
    let confirmation = use_removal_confirmation();

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        {move || {
            confirmation.pending().map(|pending| {
                view! {
                    <div class="confirm-modal" on:click=move |_| confirmation.cancel()>
                        <div class="confirm-dialog" on:click=stop_propagation>
                            <h2 class="confirm-title">"Remover Produto"</h2>
                            <p class="confirm-message">
                                "Você quer apagar esse item"
                                <strong>{format!(" \"{}\"?", pending.name)}</strong>
                            </p>
                            <div class="confirm-buttons">
                                <button
                                    class="confirm-cancel"
                                    on:click=move |_| confirmation.cancel()
                                >
                                    "Cancelar"
                                </button>
                                <button
                                    class="confirm-delete"
                                    on:click=move |_| confirmation.confirm(store)
                                >
                                    "Apagar"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
