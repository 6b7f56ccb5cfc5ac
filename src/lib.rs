// ghorg library root.
// Lists a GitHub organization's public repositories, optionally by license.

pub mod config;
pub mod error;
pub mod github;
pub mod memo;
pub mod nested;

pub use config::FetcherConfig;
pub use error::{Error, FetchError, Result};
pub use github::{GithubOrgClient, HttpFetcher, JsonFetcher, has_license};
pub use memo::Memoized;
pub use nested::access_nested_map;
