//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use prlabel_ghapi_interface::{
    review::GhReviewApi,
    types::{GhBranch, GhPullRequest, GhUser},
    ApiService, Result,
};

/// Null API service.
///
/// Reads return an open, non-draft pull request with no review and an
/// empty diff. Writes are logged and dropped.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn issue_labels_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        Ok(GhPullRequest {
            number: issue_number,
            user: GhUser::new(owner),
            head: GhBranch {
                reference: "feature".into(),
                ..Default::default()
            },
            base: GhBranch {
                reference: "develop".into(),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pulls_get_diff(&self, owner: &str, name: &str, issue_number: u64) -> Result<String> {
        Ok(String::new())
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self))]
    async fn installations_create_token(
        &self,
        auth_token: &str,
        installation_id: u64,
    ) -> Result<String> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_are_empty() {
        let service = NullApiService::new();

        let pr = service.pulls_get("me", "test", 12).await.unwrap();
        assert_eq!(pr.number, 12);
        assert!(!pr.draft);
        assert_eq!(pr.base.reference, "develop");

        assert!(service.pulls_get_diff("me", "test", 12).await.unwrap().is_empty());
        assert!(service.pull_reviews_list("me", "test", 12).await.unwrap().is_empty());
    }
}
