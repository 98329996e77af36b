//! GitHub API adapter with call metrics.

use async_trait::async_trait;
use prlabel_config::Config;
use prlabel_ghapi_github::GithubApiService;
use prlabel_ghapi_interface::{review::GhReviewApi, types::GhPullRequest, ApiService, Result};

use crate::metrics::GITHUB_API_CALLS;

/// GitHub API adapter counting every outgoing call.
#[derive(Clone)]
pub struct MetricsApiService {
    inner: GithubApiService,
}

impl MetricsApiService {
    /// Creates new metrics API adapter.
    pub fn new(config: Config) -> Self {
        Self {
            inner: GithubApiService::new(config),
        }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        GITHUB_API_CALLS.inc();
        self.inner
            .issue_labels_add(owner, name, issue_number, labels)
            .await
    }

    async fn issue_labels_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()> {
        GITHUB_API_CALLS.inc();
        self.inner
            .issue_labels_remove(owner, name, issue_number, label)
            .await
    }

    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        GITHUB_API_CALLS.inc();
        self.inner.pulls_get(owner, name, issue_number).await
    }

    async fn pulls_get_diff(&self, owner: &str, name: &str, issue_number: u64) -> Result<String> {
        GITHUB_API_CALLS.inc();
        self.inner.pulls_get_diff(owner, name, issue_number).await
    }

    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        GITHUB_API_CALLS.inc();
        self.inner.pull_reviews_list(owner, name, issue_number).await
    }

    async fn installations_create_token(
        &self,
        auth_token: &str,
        installation_id: u64,
    ) -> Result<String> {
        GITHUB_API_CALLS.inc();
        self.inner
            .installations_create_token(auth_token, installation_id)
            .await
    }
}
