// GitHub API module.
// Provides the org client, the fetch seam it depends on, and the HTTP implementation.

pub mod client;
pub mod fetch;
#[cfg(test)]
pub(crate) mod mock;
pub mod org;

pub use client::{HttpFetcher, RateLimit};
pub use fetch::JsonFetcher;
pub use org::{GithubOrgClient, has_license};
