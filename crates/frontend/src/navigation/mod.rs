//! Host-side navigation wiring: the current visit, the per-page loader
//! memo, the title policy, and the URL mirror.

pub mod protocol;

use std::collections::HashMap;

use contracts::visit::PageVisit;
use leptos::prelude::*;

use crate::resolver::{self, PageNotFoundError, ViewLoader};

pub const APP_NAME: &str = "Stockdesk";

/// "<raw> - Stockdesk", or the bare app name for an empty raw title.
pub fn default_title(raw: &str) -> String {
    if raw.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{raw} - {APP_NAME}")
    }
}

/// The document-title formatting policy, installed once at startup and used
/// for every subsequent render.
#[derive(Clone, Copy)]
pub struct TitlePolicy {
    format: fn(&str) -> String,
}

impl TitlePolicy {
    pub fn new(format: fn(&str) -> String) -> Self {
        Self { format }
    }

    pub fn format(&self, raw: &str) -> String {
        (self.format)(raw)
    }
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self::new(default_title)
    }
}

/// Process-wide navigation state, provided via context at the app root.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    /// The visit currently mounted at the page root.
    pub current: RwSignal<PageVisit>,
    /// One loader per page name, so re-renders of the same page reuse a
    /// stable loader reference. Last-write-wins: duplicate resolutions of
    /// one page yield behaviorally identical modules.
    loaders: StoredValue<HashMap<String, ViewLoader>>,
    title: TitlePolicy,
}

impl NavigationContext {
    pub fn new(initial: PageVisit, title: TitlePolicy) -> Self {
        let ctx = Self {
            current: RwSignal::new(initial.clone()),
            loaders: StoredValue::new(HashMap::new()),
            title,
        };
        ctx.apply_title(&initial);
        ctx
    }

    /// Memoized resolution entry point for the page root.
    pub fn loader_for(&self, page: &str) -> Result<ViewLoader, PageNotFoundError> {
        if let Some(loader) = self.loaders.with_value(|memo| memo.get(page).cloned()) {
            return Ok(loader);
        }
        let loader = resolver::resolve(page)?;
        self.loaders.update_value(|memo| {
            memo.insert(page.to_string(), loader.clone());
        });
        Ok(loader)
    }

    /// Swaps the current visit. An in-flight load for the superseded page is
    /// not cancelled; it settles into state nothing observes any more.
    pub fn navigate(&self, visit: PageVisit) {
        log::info!("navigate: page='{}'", visit.page);
        self.apply_title(&visit);
        mirror_page_into_url(&visit.page);
        self.current.set(visit);
    }

    fn apply_title(&self, visit: &PageVisit) {
        let raw = visit.title.as_deref().unwrap_or(&visit.page);
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&self.title.format(raw));
        }
    }
}

/// Hook for components below the app root.
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not provided")
}

/// Recovers the visit for the initial mount: the server-embedded `data-page`
/// payload on the mount element, else the `?page=` query parameter, else
/// the dashboard.
pub fn initial_visit() -> PageVisit {
    if let Some(visit) = visit_from_mount_element() {
        return visit;
    }
    if let Some(page) = page_from_query() {
        return PageVisit::bare(page);
    }
    PageVisit::bare("dashboard")
}

fn visit_from_mount_element() -> Option<PageVisit> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id("app")?;
    let payload = element.get_attribute("data-page")?;
    match serde_json::from_str(&payload) {
        Ok(visit) => Some(visit),
        Err(err) => {
            log::warn!("ignoring malformed data-page payload: {err}");
            None
        }
    }
}

fn page_from_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").cloned()
}

/// Keeps the address bar in sync with the active page without pushing a
/// history entry per navigation.
fn mirror_page_into_url(page: &str) {
    let query = serde_qs::to_string(&HashMap::from([("page".to_string(), page.to_string())]))
        .unwrap_or_default();
    let new_url = format!("?{query}");

    let current_search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current_search == new_url {
        return;
    }

    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_appends_the_app_name() {
        assert_eq!(default_title("Brands"), "Brands - Stockdesk");
    }

    #[test]
    fn default_title_of_empty_raw_is_the_app_name() {
        assert_eq!(default_title(""), "Stockdesk");
    }

    #[test]
    fn custom_policy_replaces_the_default() {
        fn shouty(raw: &str) -> String {
            raw.to_uppercase()
        }
        let policy = TitlePolicy::new(shouty);
        assert_eq!(policy.format("sales"), "SALES");
    }
}
