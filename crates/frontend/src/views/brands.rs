use contracts::catalog::BrandIndexProps;
use leptos::prelude::*;
use serde_json::Value;

use super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::PageHeader;
use crate::shared::format::format_count;

pub fn module() -> ViewModule {
    ViewModule::new("views/brands/view", |props| {
        view! { <BrandsView props=props /> }.into_any()
    })
}

#[component]
pub fn BrandsView(props: Value) -> impl IntoView {
    let data = match parse_props::<BrandIndexProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    view! {
        <div class="page page--brands">
            <PageHeader
                title="Brands"
                subtitle=format!("{} registered", format_count(data.brands.len() as i64))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th class="data-table__num">"Products"</th>
                        <th>"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .brands
                        .into_iter()
                        .map(|brand| {
                            view! {
                                <tr>
                                    <td>{brand.name}</td>
                                    <td class="data-table__num">{brand.product_count}</td>
                                    <td>{brand.created_at.format("%Y-%m-%d").to_string()}</td>
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
