use contracts::sales::SaleCreateProps;
use leptos::prelude::*;
use serde_json::Value;

use super::super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::PageHeader;
use crate::shared::format::format_money;

pub fn module() -> ViewModule {
    ViewModule::new("views/sales/create/view", |props| {
        view! { <SaleCreateView props=props /> }.into_any()
    })
}

#[component]
pub fn SaleCreateView(props: Value) -> impl IntoView {
    let data = match parse_props::<SaleCreateProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    let catalog = data.products.clone();
    let selected_sku = RwSignal::new(
        data.products
            .first()
            .map(|product| product.sku.clone())
            .unwrap_or_default(),
    );
    let quantity = RwSignal::new(1_i64);

    let total = move || {
        let sku = selected_sku.get();
        let price = catalog
            .iter()
            .find(|product| product.sku == sku)
            .map(|product| product.price)
            .unwrap_or(0.0);
        format_money(price * quantity.get() as f64)
    };

    view! {
        <div class="page page--sale-create">
            <PageHeader title=format!("New sale {}", data.next_number) subtitle="Draft" />
            <form class="sale-form" on:submit=|ev| ev.prevent_default()>
                <label class="sale-form__field">
                    <span>"Product"</span>
                    <select on:change=move |ev| selected_sku.set(event_target_value(&ev))>
                        {data
                            .products
                            .into_iter()
                            .map(|product| {
                                view! {
                                    <option value=product.sku.clone()>
                                        {format!("{} ({})", product.name, product.sku)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="sale-form__field">
                    <span>"Quantity"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| {
                            if let Ok(parsed) = event_target_value(&ev).parse::<i64>() {
                                quantity.set(parsed.max(1));
                            }
                        }
                    />
                </label>
                <div class="sale-form__total">"Total: " {total}</div>
                <button class="btn btn--primary" type="submit">
                    "Save"
                </button>
            </form>
        </div>
    }
    .into_any()
}
