//! Curated fast-path registry.
//!
//! Pages listed here ship in the eager bundle and resolve without touching
//! the fallback scanner. Keep the list short: first paint pays for it.

use super::loader::{ViewLoader, ViewModule};
use super::NameResolver;

type Entry = (&'static str, fn() -> ViewModule);

/// Pages on the eager path. Keys carry no leading separator.
static CURATED: &[Entry] = &[("dashboard", crate::views::dashboard::module)];

pub struct ViewRegistry {
    entries: &'static [Entry],
}

impl ViewRegistry {
    pub const fn new() -> Self {
        Self { entries: CURATED }
    }

    #[cfg(test)]
    pub(crate) const fn with_entries(entries: &'static [Entry]) -> Self {
        Self { entries }
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for ViewRegistry {
    fn name(&self) -> &'static str {
        "registry"
    }

    fn lookup(&self, name: &str) -> Option<ViewLoader> {
        // The protocol sometimes sends names with a leading separator;
        // registry keys are stored without one.
        let key = name.trim_start_matches('/');
        self.entries
            .iter()
            .find(|(entry, _)| *entry == key)
            .map(|(_, module)| ViewLoader::eager(module()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::loader::tests::blank_render;
    use super::*;
    use futures::executor::block_on;

    fn probe() -> ViewModule {
        ViewModule::new("views/test/probe/view", blank_render)
    }

    static PROBE_ENTRIES: &[Entry] = &[("probe", probe)];

    #[test]
    fn curated_name_resolves_eagerly() {
        let registry = ViewRegistry::with_entries(PROBE_ENTRIES);
        let loader = registry.lookup("probe").unwrap();
        let module = block_on(loader.load()).unwrap();
        assert_eq!(module.path(), "views/test/probe/view");
    }

    #[test]
    fn leading_separator_is_stripped_for_lookup() {
        let registry = ViewRegistry::with_entries(PROBE_ENTRIES);
        assert!(registry.lookup("/probe").is_some());
    }

    #[test]
    fn unknown_name_is_absent_not_an_error() {
        let registry = ViewRegistry::with_entries(PROBE_ENTRIES);
        assert!(registry.lookup("probe/missing").is_none());
    }

    #[test]
    fn production_table_serves_the_dashboard() {
        let loader = ViewRegistry::new().lookup("dashboard").unwrap();
        let module = block_on(loader.load()).unwrap();
        assert_eq!(module.path(), "views/dashboard/view");
    }
}
