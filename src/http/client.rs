//! Recipe API trait and implementations.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::FetchError;
use crate::types::{Difficulty, Recipe, RecipesResponse};

use super::payload;

/// Default base URL for the public DummyJSON API.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for recipe API clients, enabling mockability in tests.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the full recipe collection.
    async fn fetch_all(&self) -> Result<RecipesResponse, FetchError>;

    /// Fetch a single recipe by id.
    async fn fetch_by_id(&self, id: u32) -> Result<Recipe, FetchError>;
}

/// Configuration for DummyJsonClient.
#[derive(Clone)]
pub struct DummyJsonClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for DummyJsonClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyJsonClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Environment variables:
    /// - `CAZUELA_API_BASE_URL`: API base URL (default: "https://dummyjson.com")
    /// - `CAZUELA_HTTP_TIMEOUT_SECS`: request timeout in seconds (default: 10)
    /// - `CAZUELA_USER_AGENT`: User-Agent header for outgoing requests
    pub fn new() -> Self {
        let base_url = std::env::var("CAZUELA_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("CAZUELA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        let user_agent = std::env::var("CAZUELA_USER_AGENT")
            .unwrap_or_else(|_| concat!("cazuela/", env!("CARGO_PKG_VERSION")).to_string());

        Self {
            base_url,
            timeout,
            user_agent,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the DummyJsonClient.
    pub fn build(self) -> Result<DummyJsonClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;

        Ok(DummyJsonClient {
            inner,
            base_url: self.base_url,
        })
    }
}

/// Production client for the DummyJSON recipes API.
pub struct DummyJsonClient {
    inner: reqwest::Client,
    base_url: String,
}

impl DummyJsonClient {
    /// Create a new client with default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        DummyJsonClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> DummyJsonClientBuilder {
        DummyJsonClientBuilder::new()
    }

    /// Fetch recipes filtered server-side by difficulty.
    ///
    /// The public API does not reliably honor this query parameter, which is
    /// why the store filters client-side; this wrapper covers the endpoint
    /// surface for callers that want to try it anyway.
    pub async fn fetch_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<RecipesResponse, FetchError> {
        let body = self.get_text(&Self::difficulty_path(difficulty)).await?;
        payload::parse_body(&body)
    }

    fn difficulty_path(difficulty: Difficulty) -> String {
        format!("recipes?difficulty={difficulty}")
    }

    /// Issue a GET and return the raw response body, converting transport and
    /// status failures into user-displayable errors.
    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );

        tracing::debug!(%url, "network: fetching");
        let response = self
            .inner
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    FetchError::Network("no response from the server".to_string())
                } else if e.is_builder() {
                    FetchError::InvalidUrl(url.clone())
                } else {
                    FetchError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(%url, status = %status, "network: request failed");
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: error_message(&body, status),
            });
        }

        tracing::debug!(%url, status = %status, "network: fetched successfully");
        Ok(body)
    }
}

#[async_trait]
impl RecipeApi for DummyJsonClient {
    async fn fetch_all(&self) -> Result<RecipesResponse, FetchError> {
        let body = self.get_text("recipes").await?;
        payload::parse_body(&body)
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Recipe, FetchError> {
        let body = self.get_text(&format!("recipes/{id}")).await?;
        payload::parse_body(&body)
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The API reports errors as `{"message": "..."}`; fall back to the status
/// line when the body carries anything else.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }

    match payload::parse_body::<ApiError>(body) {
        Ok(err) => err.message,
        Err(_) => format!("HTTP {status}"),
    }
}

/// Mock recipe API for testing.
///
/// Serves a canned collection (or a canned error) and counts the requests it
/// receives, so tests can assert that an operation did or did not touch the
/// transport.
pub struct MockClient {
    recipes: Vec<Recipe>,
    error: Option<FetchError>,
    /// Requests served successfully before `error` kicks in.
    fail_after: usize,
    calls: AtomicUsize,
}

impl MockClient {
    /// Create a mock with an empty collection.
    pub fn new() -> Self {
        Self::with_recipes(Vec::new())
    }

    /// Create a mock serving the given recipes.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            error: None,
            fail_after: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that fails every request with the given error.
    pub fn with_error(error: FetchError) -> Self {
        Self::new().failing_with(error)
    }

    /// Fail every request from now on with the given error.
    pub fn failing_with(mut self, error: FetchError) -> Self {
        self.error = Some(error);
        self
    }

    /// Serve the first `calls` requests normally, then start failing.
    /// Only meaningful together with [`Self::failing_with`].
    pub fn failing_after(mut self, calls: usize) -> Self {
        self.fail_after = calls;
        self
    }

    /// Number of requests issued against this mock.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), FetchError> {
        let served = self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(err) if served >= self.fail_after => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeApi for MockClient {
    async fn fetch_all(&self) -> Result<RecipesResponse, FetchError> {
        self.record_call()?;
        Ok(RecipesResponse {
            recipes: self.recipes.clone(),
            total: self.recipes.len() as u32,
            skip: 0,
            limit: self.recipes.len() as u32,
        })
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Recipe, FetchError> {
        self.record_call()?;
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                message: format!("Recipe with id '{id}' not found"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_query_path() {
        assert_eq!(
            DummyJsonClient::difficulty_path(Difficulty::Easy),
            "recipes?difficulty=Easy"
        );
        assert_eq!(
            DummyJsonClient::difficulty_path(Difficulty::Hard),
            "recipes?difficulty=Hard"
        );
    }

    #[test]
    fn test_list_body_parses_through_salvage() {
        let body = "{\"recipes\":[],\"total\":0,\"skip\":0,\"limit\":0}\n<!-- proxy -->";
        let parsed: RecipesResponse = payload::parse_body(body).unwrap();
        assert_eq!(parsed.total, 0);
        assert!(parsed.recipes.is_empty());
    }

    #[test]
    fn test_error_message_prefers_body_message() {
        let msg = error_message(
            "{\"message\":\"Recipe with id '999' not found\"}",
            reqwest::StatusCode::NOT_FOUND,
        );
        assert_eq!(msg, "Recipe with id '999' not found");
    }

    #[test]
    fn test_error_message_falls_back_to_status_line() {
        let msg = error_message("<html>oops</html>", reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(msg, "HTTP 502 Bad Gateway");
    }
}
