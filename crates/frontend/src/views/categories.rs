use contracts::catalog::CategoryIndexProps;
use leptos::prelude::*;
use serde_json::Value;

use super::{parse_props, PropsError};
use crate::resolver::ViewModule;
use crate::shared::components::PageHeader;

pub fn module() -> ViewModule {
    ViewModule::new("views/categories/view", |props| {
        view! { <CategoriesView props=props /> }.into_any()
    })
}

#[component]
pub fn CategoriesView(props: Value) -> impl IntoView {
    let data = match parse_props::<CategoryIndexProps>(props) {
        Ok(data) => data,
        Err(err) => return view! { <PropsError detail=err.to_string() /> }.into_any(),
    };

    view! {
        <div class="page page--categories">
            <PageHeader title="Categories" />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th class="data-table__num">"Products"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .categories
                        .into_iter()
                        .map(|category| {
                            view! {
                                <tr>
                                    <td>{category.name}</td>
                                    <td class="data-table__muted">
                                        {category.description.unwrap_or_default()}
                                    </td>
                                    <td class="data-table__num">{category.product_count}</td>
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
