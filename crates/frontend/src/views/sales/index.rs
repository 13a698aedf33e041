use contracts::sales::SaleIndexProps;
use leptos::prelude::*;
use serde_json::Value;

use super::super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::PageHeader;
use crate::shared::format::format_money;

pub fn module() -> ViewModule {
    ViewModule::new("views/sales/index/view", |props| {
        view! { <SalesIndexView props=props /> }.into_any()
    })
}

#[component]
pub fn SalesIndexView(props: Value) -> impl IntoView {
    let data = match parse_props::<SaleIndexProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    let total: f64 = data.sales.iter().map(|sale| sale.total).sum();

    view! {
        <div class="page page--sales">
            <PageHeader
                title="Sales register"
                subtitle=format!("Period total {}", format_money(total))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Customer"</th>
                        <th class="data-table__num">"Items"</th>
                        <th class="data-table__num">"Total"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .sales
                        .into_iter()
                        .map(|sale| {
                            view! {
                                <tr>
                                    <td>{sale.number}</td>
                                    <td>{sale.customer}</td>
                                    <td class="data-table__num">{sale.item_count}</td>
                                    <td class="data-table__num">{format_money(sale.total)}</td>
                                    <td>{sale.sold_at.format("%Y-%m-%d %H:%M").to_string()}</td>
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
