use prlabel_ghapi_interface::ApiError;

/// GitHub adapter error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid authorization header value")]
    InvalidHeaderValue { source: http::header::InvalidHeaderValue },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<http::header::InvalidHeaderValue> for GitHubError {
    fn from(e: http::header::InvalidHeaderValue) -> Self {
        GitHubError::InvalidHeaderValue { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        ApiError::ImplementationError { source: e.into() }
    }
}
