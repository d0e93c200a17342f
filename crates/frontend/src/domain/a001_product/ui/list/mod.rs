use crate::domain::a001_product::ui::details::ProductCreateForm;
use crate::shared::components::confirm_dialog::ConfirmRemovalDialog;
use crate::shared::components::modal::Modal;
use crate::shared::number_format::format_reais;
use crate::shared::state::product_store::use_product_store;
use crate::shared::state::removal_confirmation::use_removal_confirmation;
use contracts::domain::a001_product::{Product, ProductId, WeightUnit};
use leptos::prelude::*;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Product list page: one expandable card per product, plus the create
/// modal and the removal confirmation dialog.
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let store = use_product_store();
    let (show_create, set_show_create) = signal(false);
    let (expanded_id, set_expanded_id) = signal::<Option<ProductId>>(None);

    let handle_create_new = move |_| {
        set_show_create.set(true);
    };

    view! {
        <div class="page">
            <div class="content">
                <header class="header">
                    <h1 class="title">"FelizCao - Lista de Produtos"</h1>
                    <p class="subtitle">
                        "Visualização em cards, com confirmação antes de remover."
                    </p>
                </header>

                <div class="toolbar">
                    <button type="button" class="add-button" on:click=handle_create_new>
                        <span class="add-plus">"+"</span>
                    </button>
                </div>

                <div class="lista-container">
                    <For
                        each=move || store.with(|c| c.products().to_vec())
                        key=|product| product.id
                        children=move |product| {
                            view! {
                                <ProductCard
                                    product=product
                                    expanded_id=expanded_id
                                    set_expanded_id=set_expanded_id
                                />
                            }
                        }
                    />

                    {move || {
                        store
                            .is_empty()
                            .then(|| view! { <p class="empty-text">"Nenhum item adicionado."</p> })
                    }}
                </div>
            </div>

            <ConfirmRemovalDialog />

            {move || {
                show_create.get().then(|| {
                    view! {
                        <Modal
                            title="Criar novo produto".to_string()
                            subtitle="Preencha os dados do item".to_string()
                            on_close=Callback::new(move |_| set_show_create.set(false))
                        >
                            <ProductCreateForm on_close=Callback::new(move |_| {
                                set_show_create.set(false)
                            }) />
                        </Modal>
                    }
                })
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductCard(
    product: Product,
    expanded_id: ReadSignal<Option<ProductId>>,
    set_expanded_id: WriteSignal<Option<ProductId>>,
) -> impl IntoView {
    let store = use_product_store();
    let confirmation = use_removal_confirmation();

    let id = product.id;
    let name = product.name.clone();
    let is_expanded = move || expanded_id.get() == Some(id);

    // Card click toggles the expanded details; controls inside the card
    // stop propagation so they do not collapse it.
    let handle_toggle = move |_| {
        set_expanded_id.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        });
    };

    let handle_remove = {
        let name = name.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            confirmation.request_removal(id, name.clone());
        }
    };

    view! {
        <div
            class="card-item"
            class:card-expanded=is_expanded
            on:click=handle_toggle
        >
            <div class="card-header-row">
                <div class="card-col card-left">
                    <span class="card-title">{name.clone()}</span>
                </div>

                <div class="card-col card-middle">
                    <div class="item-counter" on:click=|ev| ev.stop_propagation()>
                        <button
                            type="button"
                            class="counter-button"
                            on:click=move |_| store.decrement_quantity(id)
                        >
                            "-"
                        </button>
                        <span class="counter-text">
                            {move || {
                                store.with(|c| c.get(id).map(|p| p.sack_quantity).unwrap_or(0))
                            }}
                        </span>
                        <button
                            type="button"
                            class="counter-button"
                            on:click=move |_| store.increment_quantity(id)
                        >
                            "+"
                        </button>
                    </div>
                </div>

                <div class="card-col card-right">
                    <button type="button" class="remove-button" on:click=handle_remove>
                        "Remover"
                    </button>
                </div>
            </div>

            {move || {
                is_expanded()
                    .then(|| {
                        view! {
                            <div class="card-details" on:click=|ev| ev.stop_propagation()>
                                <p>
                                    "Preço do saco: "
                                    {move || {
                                        store
                                            .with(|c| {
                                                c.get(id).map(|p| format_reais(p.sack_price))
                                            })
                                    }}
                                </p>
                                <p>
                                    "Preço do quilo: "
                                    {move || {
                                        store
                                            .with(|c| {
                                                c.get(id).map(|p| format_reais(p.per_kilo_price))
                                            })
                                    }}
                                </p>
                                <p>
                                    "Quantidade de sacos: "
                                    {move || {
                                        store.with(|c| c.get(id).map(|p| p.sack_quantity))
                                    }}
                                </p>
                                <p class="card-created-at">
                                    "Cadastrado em: "
                                    {move || {
                                        store
                                            .with(|c| {
                                                c.get(id)
                                                    .map(|p| format_timestamp(p.metadata.created_at))
                                            })
                                    }}
                                </p>

                                <SaleRow id=id />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Sale-by-weight row inside an expanded card. The total is derived from
/// the store on every change, never cached.
#[component]
#[allow(non_snake_case)]
fn SaleRow(id: ProductId) -> impl IntoView {
    let store = use_product_store();

    view! {
        <div class="venda-row">
            <div class="venda-peso">
                <input
                    class="venda-input"
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Peso vendido"
                    prop:value=move || store.sale_input(id).weight
                    on:input=move |ev| {
                        store.set_sale_weight(id, event_target_value(&ev));
                    }
                />
                <select
                    class="venda-select"
                    prop:value=move || store.sale_input(id).unit.as_str()
                    on:change=move |ev| {
                        let unit = WeightUnit::from_str_or_default(&event_target_value(&ev));
                        store.set_sale_unit(id, unit);
                    }
                >
                    <option value="kg">"kg"</option>
                    <option value="g">"g"</option>
                </select>
                <div class="venda-total">
                    {move || format_reais(store.sale_value(id))}
                </div>
            </div>
        </div>
    }
}
