use leptos::prelude::*;

use crate::navigation::APP_NAME;
use crate::shared::theme::{use_theme, Theme};

#[component]
pub fn TopHeader() -> impl IntoView {
    let theme_ctx = use_theme();

    view! {
        <header class="top-header">
            <div class="top-header__brand">{APP_NAME}</div>
            <div class="top-header__actions">
                <select
                    class="top-header__theme"
                    on:change=move |ev| {
                        theme_ctx.set_theme(Theme::from_str(&event_target_value(&ev)));
                    }
                >
                    {Theme::all()
                        .into_iter()
                        .map(|theme| {
                            view! {
                                <option
                                    value=theme.as_str()
                                    selected=move || theme_ctx.theme.get() == theme
                                >
                                    {theme.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </header>
    }
}
