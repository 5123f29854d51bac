//! API Client
//!
//! Thin fetch wrapper over the coaching REST API plus the per-domain
//! list sources, organized by domain.

mod answers;
mod auth;
pub mod envelope;
mod form;
mod partners;
mod questions;
mod ratings;
mod recommendations;
mod stats;

use gloo_net::http::{Request, RequestBuilder, Response};
use list_manager::{FormFields, ListError, ListResult};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

// Re-export all public items
pub use answers::*;
pub use auth::*;
pub use partners::*;
pub use questions::*;
pub use ratings::*;
pub use recommendations::*;
pub use stats::*;

/// Cheap to clone; every source owns one
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    // ========================
    // Verbs
    // ========================

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> ListResult<String> {
        let url = with_query(&self.url(path), query);
        log::debug!("[Api] GET {}", url);
        let response = self.authorize(Request::get(&url)).send().await.map_err(transport)?;
        read(&url, response).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ListResult<String> {
        let url = self.url(path);
        log::debug!("[Api] POST {}", url);
        let request = self.authorize(Request::post(&url)).json(body).map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        read(&url, response).await
    }

    /// Multipart POST; attachments are sent as files
    pub async fn post_form(&self, path: &str, fields: &FormFields) -> ListResult<String> {
        let url = self.url(path);
        log::debug!("[Api] POST (multipart) {}", url);
        let body = form::to_form_data(fields)?;
        let request = self.authorize(Request::post(&url)).body(body).map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        read(&url, response).await
    }

    pub async fn delete(&self, path: &str) -> ListResult<String> {
        let url = self.url(path);
        log::debug!("[Api] DELETE {}", url);
        let response = self.authorize(Request::delete(&url)).send().await.map_err(transport)?;
        read(&url, response).await
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

// ========================
// Helpers
// ========================

fn transport(err: gloo_net::Error) -> ListError {
    ListError::Transport(err.to_string())
}

/// Body text of a 2xx response. Other statuses become the envelope's
/// message when it has one, else a transport error naming the status.
async fn read(url: &str, response: Response) -> ListResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if response.ok() {
        return Ok(body);
    }
    log::warn!("[Api] {} answered HTTP {}", url, status);
    Err(match envelope::error_message(&body) {
        Some(message) => ListError::Application(message),
        None => ListError::Transport(format!("HTTP {}", status)),
    })
}

pub fn with_query(url: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, NON_ALPHANUMERIC),
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            )
        })
        .collect();
    format!("{}?{}", url, pairs.join("&"))
}

/// Logged-in user id, required by endpoints that record the actor
pub fn require_user(user_id: Option<u64>) -> ListResult<u64> {
    user_id.ok_or_else(|| ListError::Validation("User not logged in. Please login first.".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let api = ApiClient::new("https://api.test/v1/", None);
        assert_eq!(api.url("/questions"), "https://api.test/v1/questions");
        assert_eq!(api.url("delete-rating/4"), "https://api.test/v1/delete-rating/4");
    }

    #[test]
    fn test_empty_token_is_dropped() {
        assert_eq!(ApiClient::new("x", Some(String::new())), ApiClient::new("x", None));
    }

    #[test]
    fn test_query_is_encoded() {
        assert_eq!(with_query("https://a/b", &[]), "https://a/b");
        assert_eq!(
            with_query("https://a/recomendation-all", &[("user_id", "7".to_string()), ("q", "a b&c".to_string())]),
            "https://a/recomendation-all?user_id=7&q=a%20b%26c"
        );
    }

    #[test]
    fn test_require_user() {
        assert_eq!(require_user(Some(3)), Ok(3));
        assert!(matches!(require_user(None), Err(ListError::Validation(_))));
    }
}
