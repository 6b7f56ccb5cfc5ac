// Organization repository client.
// Resolves an org's public repositories through an injected JSON fetcher.

use serde_json::Value;
use tracing::debug;

use crate::config::GITHUB_API_BASE;
use crate::error::{Error, Result};
use crate::memo::Memoized;
use crate::nested::{access_nested_map, access_str};

use super::fetch::JsonFetcher;

/// Client for one GitHub organization.
///
/// The org payload and the repository list are each fetched at most once
/// per client; later reads return the stored JSON.
pub struct GithubOrgClient<F> {
    org_name: String,
    base_url: String,
    fetcher: F,
    org: Memoized<Value>,
    repos_payload: Memoized<Value>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Client for `org_name` against the public GitHub API.
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self::with_base_url(org_name, GITHUB_API_BASE, fetcher)
    }

    pub fn with_base_url(
        org_name: impl Into<String>,
        base_url: impl Into<String>,
        fetcher: F,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fetcher,
            org: Memoized::new("org"),
            repos_payload: Memoized::new("repos_payload"),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// `{base_url}/orgs/{name}`
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// Organization payload, fetched on first call.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_compute(|| async {
                let url = self.org_url();
                self.fetcher.fetch_json(&url).await.map_err(Error::from)
            })
            .await
    }

    /// The `repos_url` advertised by the org payload.
    pub async fn public_repos_url(&self) -> Result<&str> {
        let org = self.org().await?;
        access_str(org, ["repos_url"])
    }

    /// Raw repository list from [`public_repos_url`](Self::public_repos_url), fetched on first call.
    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_compute(|| async {
                let url = self.public_repos_url().await?;
                Ok::<_, Error>(self.fetcher.fetch_json(url).await?)
            })
            .await
    }

    /// Repository names in payload order.
    ///
    /// With `license`, only repositories whose `license.key` matches exactly
    /// are kept; repositories without license data never match.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().ok_or_else(|| Error::UnexpectedType {
            key: "repos_payload".to_string(),
            expected: "an array",
        })?;

        let names = repos
            .iter()
            .filter(|repo| license.is_none_or(|key| has_license(repo, key)))
            .map(|repo| access_str(repo, ["name"]).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            org = %self.org_name,
            license,
            total = repos.len(),
            matched = names.len(),
            "listed public repos"
        );
        Ok(names)
    }
}

/// Whether `repo.license.key` equals `license_key`.
///
/// Missing or null license data yields `false` rather than an error.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    access_nested_map(repo, ["license", "key"])
        .is_ok_and(|key| key.as_str() == Some(license_key))
}
