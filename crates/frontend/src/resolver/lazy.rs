//! The asynchronous boundary between a resolved loader and a painted view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::loader::{ViewLoadError, ViewLoader, ViewModule};

/// Placeholder shown while a view module is in flight.
#[component]
fn ViewLoading() -> impl IntoView {
    view! {
        <div class="view-loading">
            <div class="view-loading__spinner"></div>
            <span class="view-loading__label">"Loading view"</span>
        </div>
    }
}

/// Suspends rendering on `loader`: the placeholder paints while the load is
/// pending, the module renders with `props` once it settles.
///
/// The caller must hand this component a stable loader per logical page
/// (the navigation layer memoizes per page name); no memoization happens
/// here. A load failure is not caught either: it renders as an `Err` and
/// travels to the nearest enclosing `ErrorBoundary`.
#[component]
pub fn LazyView(loader: ViewLoader, props: Value) -> impl IntoView {
    let loaded: RwSignal<Option<Result<ViewModule, ViewLoadError>>> = RwSignal::new(None);

    let pending = loader.load();
    spawn_local(async move {
        let result = pending.await;
        match &result {
            Ok(module) => log::debug!("view module '{}' settled", module.path()),
            Err(err) => log::warn!("view load failed: {err}"),
        }
        // Loads are never cancelled: if the page was superseded while this
        // one was in flight, the signal is already disposed and the result
        // goes unobserved.
        if loaded.try_set(Some(result)).is_some() {
            log::debug!("view settled after its page was superseded");
        }
    });

    view! {
        <div class="lazy-view">
            {move || match loaded.get() {
                None => view! { <ViewLoading /> }.into_any(),
                Some(result) => result
                    .map(|module| module.render(props.clone()))
                    .into_any(),
            }}
        </div>
    }
}
