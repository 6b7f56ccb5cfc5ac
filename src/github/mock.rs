// Canned fetcher for tests.
// Serves JSON by exact URL and records every request.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

use super::fetch::JsonFetcher;

#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(url.to_string(), body);
        self
    }

    /// Every URL requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

pub mod fixtures {
    use serde_json::json;

    use super::MockFetcher;

    pub const ORG_URL: &str = "https://api.github.com/orgs/google";
    pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

    pub const EXPECTED_REPOS: &[&str] = &[
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
        "traceur-compiler",
        "firmata.py",
    ];

    pub const APACHE2_REPOS: &[&str] = &["dagger", "kratu", "traceur-compiler", "firmata.py"];

    fn repo(id: u64, name: &str, license: Option<(&str, &str)>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("google/{}", name),
            "private": false,
            "owner": {"login": "google", "id": 1342004, "type": "Organization"},
            "html_url": format!("https://github.com/google/{}", name),
            "fork": false,
            "license": license.map(|(key, spdx)| json!({
                "key": key,
                "name": spdx,
                "spdx_id": spdx,
                "url": format!("https://api.github.com/licenses/{}", key),
            })),
        })
    }

    /// Fetcher serving the google org and its first page of repositories.
    pub fn google() -> MockFetcher {
        let org = json!({
            "login": "google",
            "id": 1342004,
            "url": ORG_URL,
            "repos_url": REPOS_URL,
            "public_repos": 9,
            "type": "Organization",
        });
        let repos = json!([
            repo(7697149, "episodes.dart", Some(("bsd-3-clause", "BSD-3-Clause"))),
            repo(7776515, "cpp-netlib", Some(("bsl-1.0", "BSL-1.0"))),
            repo(7968417, "dagger", Some(("apache-2.0", "Apache-2.0"))),
            repo(8165161, "ios-webkit-debug-proxy", Some(("other", "NOASSERTION"))),
            repo(8459994, "google.github.io", None),
            repo(8566972, "kratu", Some(("apache-2.0", "Apache-2.0"))),
            repo(8858648, "build-debian-cloud", Some(("other", "NOASSERTION"))),
            repo(9060347, "traceur-compiler", Some(("apache-2.0", "Apache-2.0"))),
            repo(9065917, "firmata.py", Some(("apache-2.0", "Apache-2.0"))),
        ]);

        MockFetcher::new().with(ORG_URL, org).with(REPOS_URL, repos)
    }
}
