use leptos::prelude::*;

/// Reusable header for pages.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Optional action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || {
                    subtitle
                        .get()
                        .map(|s| view! { <div class="page-header__subtitle">{s}</div> })
                }}
            </div>
            <div class="page-header__actions">{children.map(|children| children())}</div>
        </div>
    }
}
