use leptos::prelude::*;

/// Single dashboard indicator: a label over a preformatted value.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
        </div>
    }
}
