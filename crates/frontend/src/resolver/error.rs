use thiserror::Error;

/// Terminal resolution failure: the page name matched neither the registry
/// nor the scanner's enumeration. Carries the name exactly as supplied.
///
/// Never retried. The page namespace is fixed per build, so a miss means a
/// deployment defect, not a transient condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("page not found: '{page}'")]
pub struct PageNotFoundError {
    pub page: String,
}

impl PageNotFoundError {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}
