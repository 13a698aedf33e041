//! Sidebar menu. Items navigate by page name through the page protocol,
//! falling back to a bare visit when the backend is unreachable so the
//! shell stays usable offline.

use contracts::visit::PageVisit;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::navigation::{protocol, use_navigation};

struct MenuGroup {
    label: &'static str,
    // (page name, item label)
    items: &'static [(&'static str, &'static str)],
}

static MENU: &[MenuGroup] = &[
    MenuGroup {
        label: "Overview",
        items: &[("dashboard", "Dashboard")],
    },
    MenuGroup {
        label: "Catalog",
        items: &[
            ("brands", "Brands"),
            ("categories", "Categories"),
            ("products", "Products"),
        ],
    },
    MenuGroup {
        label: "Sales",
        items: &[("sales/index", "Sales register"), ("sales/create", "New sale")],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = use_navigation();

    let open_page = move |page: &'static str| {
        spawn_local(async move {
            match protocol::fetch_visit(page).await {
                Ok(visit) => nav.navigate(visit),
                Err(err) => {
                    log::warn!("visit fetch failed, navigating bare: {err}");
                    nav.navigate(PageVisit::bare(page));
                }
            }
        });
    };

    view! {
        <nav class="sidebar">
            {MENU
                .iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-label">{group.label}</div>
                            <ul class="sidebar__items">
                                {group
                                    .items
                                    .iter()
                                    .map(|(page, label)| {
                                        let page = *page;
                                        let is_active = move || {
                                            nav.current.get().page.trim_start_matches('/') == page
                                        };
                                        view! {
                                            <li>
                                                <button
                                                    class="sidebar__item"
                                                    class=("sidebar__item--active", is_active)
                                                    on:click=move |_| open_page(page)
                                                >
                                                    {*label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
