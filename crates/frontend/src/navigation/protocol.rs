//! Client of the server-side page protocol: one GET per navigation, one
//! `PageVisit` back.

use contracts::visit::PageVisit;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisitFetchError {
    #[error("request for page '{page}' failed: {reason}")]
    Request { page: String, reason: String },
    #[error("server returned {status} for page '{page}'")]
    Status { page: String, status: u16 },
    #[error("malformed visit payload for page '{page}': {reason}")]
    Decode { page: String, reason: String },
}

/// Base URL for API requests, derived from the current window location.
/// The backend listens on port 3000 in every deployment layout.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Fetches the visit payload for `page`.
pub async fn fetch_visit(page: &str) -> Result<PageVisit, VisitFetchError> {
    let url = api_url(&format!("/nav/{page}"));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| VisitFetchError::Request {
            page: page.to_string(),
            reason: err.to_string(),
        })?;
    if !response.ok() {
        return Err(VisitFetchError::Status {
            page: page.to_string(),
            status: response.status(),
        });
    }
    response
        .json::<PageVisit>()
        .await
        .map_err(|err| VisitFetchError::Decode {
            page: page.to_string(),
            reason: err.to_string(),
        })
}
