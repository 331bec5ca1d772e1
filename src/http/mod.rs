//! HTTP transport for the DummyJSON recipes API.
//!
//! All outgoing requests go through the [`RecipeApi`] trait so the store can
//! be exercised in tests without a network.

mod client;
mod payload;

pub use client::{
    DummyJsonClient, DummyJsonClientBuilder, MockClient, RecipeApi, DEFAULT_BASE_URL,
};
