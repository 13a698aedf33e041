use contracts::dashboard::DashboardProps;
use leptos::prelude::*;
use serde_json::Value;

use super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::format::{format_count, format_money};

/// Registry-curated: the dashboard is the first page most sessions paint,
/// so it ships on the eager path.
pub fn module() -> ViewModule {
    ViewModule::new("views/dashboard/view", |props| {
        view! { <DashboardView props=props /> }.into_any()
    })
}

#[component]
pub fn DashboardView(props: Value) -> impl IntoView {
    let data = match parse_props::<DashboardProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Dashboard" subtitle="Today at a glance" />
            <div class="stat-grid">
                <StatCard label="Products" value=format_count(data.total_products) />
                <StatCard label="Brands" value=format_count(data.total_brands) />
                <StatCard label="Categories" value=format_count(data.total_categories) />
                <StatCard label="Revenue today" value=format_money(data.revenue_today) />
            </div>
            <h2 class="page__section-title">"Low stock"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Product"</th>
                        <th class="data-table__num">"On hand"</th>
                        <th class="data-table__num">"Reorder at"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .low_stock
                        .into_iter()
                        .map(|product| {
                            view! {
                                <tr>
                                    <td>{product.sku}</td>
                                    <td>{product.name}</td>
                                    <td class="data-table__num">{product.quantity}</td>
                                    <td class="data-table__num">{product.reorder_level}</td>
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
