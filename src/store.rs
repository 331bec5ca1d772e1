//! Recipe collection state container.
//!
//! Single source of truth for the catalog listing: the fetched collection,
//! the active difficulty filter, the current page, and the recipe selected
//! for the detail view. Filtering and pagination are derived synchronously
//! from the cached collection; only [`RecipeStore::load_all`] and
//! [`RecipeStore::load_by_id`] touch the network.

use std::sync::Arc;

use crate::error::StoreError;
use crate::http::RecipeApi;
use crate::types::{DifficultyFilter, Recipe};

/// Default number of recipes per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Lifecycle of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last operation completed.
    Ready,
    /// The last operation failed; the message is rendered to the user as-is.
    Failed(String),
}

/// State container for the recipe catalog.
///
/// Owned by the composition root and handed to consumers by reference; the
/// transport collaborator is injected at construction. Mutating operations
/// take `&mut self`, so loads cannot interleave within one store. When a
/// caller does issue overlapping loads through separate handles, the last
/// one to complete wins.
pub struct RecipeStore {
    api: Arc<dyn RecipeApi>,
    all: Vec<Recipe>,
    filtered: Vec<Recipe>,
    filter: DifficultyFilter,
    page: usize,
    page_size: usize,
    selected: Option<Recipe>,
    status: LoadStatus,
}

impl RecipeStore {
    /// Create a store with the default page size.
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Create a store with a custom page size, fixed for the store's
    /// lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn with_page_size(api: Arc<dyn RecipeApi>, page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            api,
            all: Vec::new(),
            filtered: Vec::new(),
            filter: DifficultyFilter::All,
            page: 1,
            page_size,
            selected: None,
            status: LoadStatus::Idle,
        }
    }

    /// Fetch the full collection and re-derive the filtered view under the
    /// current filter.
    ///
    /// On failure the previous collection stays visible; stale data beats a
    /// blank screen.
    pub async fn load_all(&mut self) {
        self.status = LoadStatus::Loading;
        tracing::debug!("loading recipe collection");

        match self.api.fetch_all().await {
            Ok(response) => {
                self.all = response.recipes;
                self.filtered = apply_filter(&self.all, self.filter);
                self.page = 1;
                self.status = LoadStatus::Ready;
                tracing::debug!(
                    total = self.all.len(),
                    visible = self.filtered.len(),
                    "collection loaded"
                );
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Fetch a single recipe into `selected`.
    ///
    /// Ids that cannot name a recipe, non-positive or beyond the API's
    /// 32-bit id space, are rejected before any request is issued. On
    /// transport failure `selected` is left as it was.
    pub async fn load_by_id(&mut self, id: i64) {
        let id = match u32::try_from(id) {
            Ok(id) if id > 0 => id,
            _ => {
                self.fail(StoreError::InvalidInput(id));
                return;
            }
        };

        self.status = LoadStatus::Loading;
        tracing::debug!(id, "loading recipe");

        match self.api.fetch_by_id(id).await {
            Ok(recipe) => {
                self.selected = Some(recipe);
                self.status = LoadStatus::Ready;
            }
            Err(err) => self.fail(err.into()),
        }
    }

    /// Change the difficulty filter.
    ///
    /// When the collection is already cached this is purely synchronous: the
    /// filtered view is recomputed and the page resets to 1. When nothing has
    /// loaded yet it triggers [`Self::load_all`], which applies the filter
    /// just set once the response lands.
    pub async fn set_filter(&mut self, filter: DifficultyFilter) {
        self.filter = filter;

        if self.all.is_empty() {
            self.load_all().await;
            return;
        }

        self.filtered = apply_filter(&self.all, filter);
        self.page = 1;
    }

    /// Set the current page (1-based).
    ///
    /// No upper bound is enforced; a page past the end of the filtered view
    /// simply yields an empty [`Self::view`]. The UI's pagination control
    /// constrains valid pages.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Dismiss a failure without touching data. Ready if anything has
    /// loaded, Idle otherwise.
    pub fn clear_error(&mut self) {
        self.status = if self.all.is_empty() && self.selected.is_none() {
            LoadStatus::Idle
        } else {
            LoadStatus::Ready
        };
    }

    /// Drop the selected recipe.
    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    /// The current page of the filtered collection.
    ///
    /// Never panics; out-of-range pages clamp to an empty slice.
    pub fn view(&self) -> &[Recipe] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// The full cached collection, in API order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.all
    }

    /// The collection under the active filter, in API order.
    pub fn filtered(&self) -> &[Recipe] {
        &self.filtered
    }

    pub fn filter(&self) -> DifficultyFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    fn fail(&mut self, error: StoreError) {
        tracing::warn!(%error, "store operation failed");
        self.status = LoadStatus::Failed(error.to_string());
    }
}

fn apply_filter(all: &[Recipe], filter: DifficultyFilter) -> Vec<Recipe> {
    all.iter()
        .filter(|r| filter.matches(r.difficulty))
        .cloned()
        .collect()
}
