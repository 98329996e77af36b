//! GitHub adapter

use async_trait::async_trait;
use prlabel_config::Config;
use prlabel_ghapi_interface::{review::GhReviewApi, types::GhPullRequest, ApiService, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    auth::{build_github_url, get_anonymous_client_builder, get_authenticated_client_builder},
    errors::GitHubError,
};

const REVIEWS_PER_PAGE: u8 = 100;
const DIFF_MEDIA_TYPE: &str = "application/vnd.github.diff";

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    async fn get_client(&self) -> Result<Client, GitHubError> {
        get_authenticated_client_builder(&self.config, self)
            .await?
            .build()
            .map_err(GitHubError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            labels: &'a [String],
        }

        self.get_client()
            .await?
            .post(&self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/labels"
            )))
            .json(&Request { labels })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

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
        let label = urlencoding::encode(label);

        self.get_client()
            .await?
            .delete(&self.build_url(format!(
                "/repos/{owner}/{name}/issues/{issue_number}/labels/{label}"
            )))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_get(&self, owner: &str, name: &str, issue_number: u64) -> Result<GhPullRequest> {
        let client = self.get_client().await?;
        let response = client
            .get(&self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}")))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(response.json().await.map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self))]
    async fn pulls_get_diff(&self, owner: &str, name: &str, issue_number: u64) -> Result<String> {
        let client = self.get_client().await?;
        let response = client
            .get(&self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}")))
            .header(
                http::header::ACCEPT,
                http::header::HeaderValue::from_static(DIFF_MEDIA_TYPE),
            )
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(response.text().await.map_err(GitHubError::from)?)
    }

    #[tracing::instrument(skip(self))]
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>> {
        let client = self.get_client().await?;
        let url = self.build_url(format!("/repos/{owner}/{name}/pulls/{issue_number}/reviews"));

        let mut reviews = Vec::new();
        let mut page: u32 = 1;
        loop {
            let response = client
                .get(&url)
                .query(&[("per_page", REVIEWS_PER_PAGE as u32), ("page", page)])
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(GitHubError::from)?;

            let page_reviews: Vec<GhReviewApi> =
                response.json().await.map_err(GitHubError::from)?;
            let page_len = page_reviews.len();
            reviews.extend(page_reviews);

            // A short page is the last one.
            if page_len < REVIEWS_PER_PAGE as usize {
                break;
            }
            page += 1;
        }

        tracing::debug!(count = reviews.len(), pages = page, "Fetched pull request reviews");
        Ok(reviews)
    }

    #[tracing::instrument(skip_all, fields(installation_id = installation_id))]
    async fn installations_create_token(
        &self,
        auth_token: &str,
        installation_id: u64,
    ) -> Result<String> {
        #[derive(Deserialize)]
        struct Response {
            token: String,
        }

        let response = get_anonymous_client_builder(&self.config)
            .build()
            .map_err(GitHubError::from)?
            .post(&self.build_url(format!(
                "/app/installations/{installation_id}/access_tokens"
            )))
            .bearer_auth(auth_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(GitHubError::from)?;

        Ok(response
            .json::<Response>()
            .await
            .map_err(GitHubError::from)?
            .token)
    }
}
