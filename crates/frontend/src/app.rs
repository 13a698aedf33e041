use crate::layout::Shell;
use crate::navigation::{self, NavigationContext, TitlePolicy};
use crate::resolver::LazyView;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One-time process-wide wiring: theme, title policy, navigation state.
    // Runs exactly once per mount; everything below consumes it via context.
    let nav = NavigationContext::new(navigation::initial_visit(), TitlePolicy::default());
    provide_context(nav);

    view! {
        <ThemeProvider>
            <Shell center=move || view! { <PageHost /> }.into_any() />
        </ThemeProvider>
    }
}

/// Root of page rendering: resolves the current visit's page name and hands
/// the loader to [`LazyView`]. Resolution and load failures both surface
/// through the error boundary here, the top-level error presentation of the
/// app.
#[component]
fn PageHost() -> impl IntoView {
    let nav = navigation::use_navigation();

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="page-error">
                    <div class="page-error__title">"Something went wrong"</div>
                    <ul class="page-error__list">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                                .collect_view()
                        }}
                    </ul>
                </div>
            }
        }>
            {move || {
                let visit = nav.current.get();
                nav.loader_for(&visit.page)
                    .map(|loader| view! { <LazyView loader=loader props=visit.props /> })
            }}
        </ErrorBoundary>
    }
}
