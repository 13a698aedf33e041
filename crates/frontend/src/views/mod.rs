//! The view namespace the fallback scanner enumerates.
//!
//! One module per page. Each exposes its `#[component]` view plus a
//! `module()` constructor, the unit every loader for that page produces.
//! Adding a page means adding a module here and one line to the scanner's
//! enumeration (or a registry entry for the eager path).

pub mod brands;
pub mod categories;
pub mod dashboard;
pub mod products;
pub mod sales;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserializes a page's props type out of the opaque props bag.
fn parse_props<T: DeserializeOwned>(props: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(props)
}

/// Inline panel for a props bag that does not match the view's contract.
/// A malformed payload is a server defect, but it should not take the page
/// root down through the error boundary.
#[component]
fn PropsError(#[prop(into)] detail: String) -> impl IntoView {
    view! {
        <div class="props-error">
            <div class="props-error__title">"Malformed page props"</div>
            <div class="props-error__detail">{detail}</div>
        </div>
    }
}
