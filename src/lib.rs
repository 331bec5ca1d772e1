pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use error::{FetchError, StoreError};
pub use http::{DummyJsonClient, DummyJsonClientBuilder, MockClient, RecipeApi};
pub use store::{LoadStatus, RecipeStore, DEFAULT_PAGE_SIZE};
pub use types::{Difficulty, DifficultyFilter, Recipe, RecipesResponse};
