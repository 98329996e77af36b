use async_trait::async_trait;

use crate::{review::GhReviewApi, types::GhPullRequest, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Add labels to a target issue, in one call.
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;
    /// Remove one label from a target issue.
    async fn issue_labels_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()>;
    /// Get a pull request from its number.
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest>;
    /// Get the unified diff of a pull request.
    async fn pulls_get_diff(&self, owner: &str, name: &str, issue_number: u64) -> Result<String>;
    /// List reviews from a pull request, in submission order.
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>>;
    /// Create installation token.
    async fn installations_create_token(
        &self,
        auth_token: &str,
        installation_id: u64,
    ) -> Result<String>;
}
