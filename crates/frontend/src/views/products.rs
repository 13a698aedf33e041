use contracts::catalog::ProductIndexProps;
use leptos::prelude::*;
use serde_json::Value;

use super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::PageHeader;
use crate::shared::format::format_money;

pub fn module() -> ViewModule {
    ViewModule::new("views/products/view", |props| {
        view! { <ProductsView props=props /> }.into_any()
    })
}

#[component]
pub fn ProductsView(props: Value) -> impl IntoView {
    let data = match parse_props::<ProductIndexProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    view! {
        <div class="page page--products">
            <PageHeader title="Products" />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Name"</th>
                        <th>"Brand"</th>
                        <th>"Category"</th>
                        <th class="data-table__num">"Price"</th>
                        <th class="data-table__num">"On hand"</th>
                        <th>"Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .products
                        .into_iter()
                        .map(|product| {
                            let low = product.is_low_stock();
                            let row_class = if low {
                                "data-table__row--warn"
                            } else {
                                ""
                            };
                            view! {
                                <tr class=row_class>
                                    <td>{product.sku}</td>
                                    <td>{product.name}</td>
                                    <td>{product.brand}</td>
                                    <td>{product.category}</td>
                                    <td class="data-table__num">{format_money(product.price)}</td>
                                    <td class="data-table__num">{product.quantity}</td>
                                    <td>
                                        {low
                                            .then(|| {
                                                view! { <span class="badge badge--warn">"Low"</span> }
                                            })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
