//! Convention-based fallback over the whole `views/` namespace.
//!
//! Every view module is enumerated once per process and indexed by its
//! conventional path. The snapshot is immutable after construction: a page
//! added to the namespace becomes visible only after it is added to the
//! enumeration below and a new build ships.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::loader::{ViewLoader, ViewModule};
use super::NameResolver;

/// Fixed namespace prefix and implementation suffix of the view layout:
/// page `sales/create` lives at `views/sales/create/view`.
const VIEW_PREFIX: &str = "views/";
const VIEW_SUFFIX: &str = "/view";

/// Static enumeration over the view namespace. This is the build-time
/// "glob": one line per module, maintained alongside `src/views/`.
macro_rules! enumerate_views {
    ($($path:literal => $module:path),+ $(,)?) => {
        &[$(($path, $module as fn() -> ViewModule)),+]
    };
}

static VIEW_MODULES: &[(&str, fn() -> ViewModule)] = enumerate_views![
    "views/dashboard/view" => crate::views::dashboard::module,
    "views/brands/view" => crate::views::brands::module,
    "views/categories/view" => crate::views::categories::module,
    "views/products/view" => crate::views::products::module,
    "views/sales/index/view" => crate::views::sales::index::module,
    "views/sales/create/view" => crate::views::sales::create::module,
];

static SNAPSHOT: Lazy<HashMap<&'static str, fn() -> ViewModule>> =
    Lazy::new(|| VIEW_MODULES.iter().copied().collect());

/// Derives the scanner's lookup key for a page name.
pub fn view_key(name: &str) -> String {
    format!("{VIEW_PREFIX}{name}{VIEW_SUFFIX}")
}

pub struct FallbackScanner;

impl NameResolver for FallbackScanner {
    fn name(&self) -> &'static str {
        "scanner"
    }

    fn lookup(&self, name: &str) -> Option<ViewLoader> {
        // Exact match only: case mismatches and stray separators fall
        // through to the resolver's terminal failure.
        let key = view_key(name);
        SNAPSHOT
            .get(key.as_str())
            .map(|ctor| ViewLoader::deferred(*ctor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn derives_the_conventional_key() {
        assert_eq!(view_key("brands"), "views/brands/view");
        assert_eq!(view_key("sales/create"), "views/sales/create/view");
    }

    #[test]
    fn enumeration_covers_every_page() {
        for page in [
            "dashboard",
            "brands",
            "categories",
            "products",
            "sales/index",
            "sales/create",
        ] {
            assert!(
                FallbackScanner.lookup(page).is_some(),
                "page '{page}' missing from the enumeration"
            );
        }
    }

    #[test]
    fn loader_produces_the_enumerated_module() {
        let loader = FallbackScanner.lookup("sales/index").unwrap();
        let module = block_on(loader.load()).unwrap();
        assert_eq!(module.path(), "views/sales/index/view");
    }

    #[test]
    fn lookup_is_exact() {
        assert!(FallbackScanner.lookup("Brands").is_none());
        assert!(FallbackScanner.lookup("brands/").is_none());
        assert!(FallbackScanner.lookup("/brands").is_none());
    }
}
