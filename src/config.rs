// HTTP fetcher configuration.
// Defaults target the public GitHub API; a token is read from the environment if present.

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_USER_AGENT: &str = "ghorg";

/// Settings used to build an [`HttpFetcher`](crate::github::HttpFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// API root that org URLs are built from.
    pub base_url: String,
    /// Bearer token. Anonymous requests when absent.
    pub token: Option<String>,
    pub user_agent: String,
    /// Value of the `X-GitHub-Api-Version` header.
    pub api_version: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: GITHUB_API_VERSION.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Defaults plus `GITHUB_TOKEN`, when set and non-empty.
    pub fn from_env() -> Self {
        Self::default().with_token(std::env::var("GITHUB_TOKEN").ok())
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetcherConfig::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert_eq!(config.token, None);
        assert_eq!(config.api_version, "2022-11-28");
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = FetcherConfig::default().with_token(Some("  ".to_string()));
        assert_eq!(config.token, None);

        let config = FetcherConfig::default().with_token(Some("ghp_abc".to_string()));
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = FetcherConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
