//! The page-visit payload of the server-driven page protocol.
//!
//! Every navigation event is one `PageVisit`: the logical page name, the
//! props bag the resolved view renders with, and an optional raw title.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One navigation event: which page to show and with what props.
///
/// `props` is an opaque bag — the resolved view owns its shape. A payload
/// without a `props` field deserializes to an empty object, not null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageVisit {
    pub page: String,
    #[serde(default = "empty_props")]
    pub props: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn empty_props() -> Value {
    Value::Object(serde_json::Map::new())
}

impl PageVisit {
    pub fn new(page: impl Into<String>, props: Value) -> Self {
        Self {
            page: page.into(),
            props,
            title: None,
        }
    }

    /// A visit carrying no props (the view renders its empty state).
    pub fn bare(page: impl Into<String>) -> Self {
        Self::new(page, empty_props())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_props_defaults_to_empty_object() {
        let visit: PageVisit = serde_json::from_str(r#"{"page":"brands"}"#).unwrap();
        assert_eq!(visit.page, "brands");
        assert_eq!(visit.props, serde_json::json!({}));
        assert_eq!(visit.title, None);
    }

    #[test]
    fn full_payload_round_trips() {
        let visit: PageVisit = serde_json::from_str(
            r#"{"page":"sales/create","props":{"next_number":"S-0042"},"title":"New sale"}"#,
        )
        .unwrap();
        assert_eq!(visit.page, "sales/create");
        assert_eq!(visit.props["next_number"], "S-0042");
        assert_eq!(visit.title.as_deref(), Some("New sale"));
    }
}
