// JSON fetch capability.
// The org client only ever talks to the network through this trait.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Performs a GET on a fully formed URL and returns the decoded JSON body.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

#[async_trait]
impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).fetch_json(url).await
    }
}

#[async_trait]
impl<T: JsonFetcher + ?Sized> JsonFetcher for Arc<T> {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).fetch_json(url).await
    }
}

#[async_trait]
impl<T: JsonFetcher + ?Sized> JsonFetcher for Box<T> {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).fetch_json(url).await
    }
}
