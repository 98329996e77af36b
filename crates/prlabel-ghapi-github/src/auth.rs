//! Auth.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use http::{header, HeaderMap};
use lazy_static::lazy_static;
use prlabel_config::Config;
use prlabel_crypto::JwtUtils;
use prlabel_ghapi_interface::ApiService;
use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::GitHubError;

const INSTALLATION_TOKEN_LIFETIME_IN_SECONDS: u64 = 3600;
const INSTALLATION_TOKEN_RENEW_THRESHOLD: f32 = 0.5;
const APP_TOKEN_LIFETIME_IN_SECONDS: u64 = 60;

struct LastInstallationToken {
    token: String,
    expiration: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    iat: u64,
    exp: u64,
    iss: u64,
}

lazy_static! {
    static ref LAST_TOKEN: RwLock<LastInstallationToken> = RwLock::new(LastInstallationToken {
        token: String::new(),
        expiration: 0
    });
}

/// Get an authenticated GitHub client builder.
pub async fn get_authenticated_client_builder(
    config: &Config,
    api_service: &dyn ApiService,
) -> Result<ClientBuilder, GitHubError> {
    let token = get_authentication_credentials(config, api_service).await?;

    let mut headers = default_headers();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {token}"))?,
    );

    Ok(base_client_builder(config).default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    base_client_builder(config).default_headers(default_headers())
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.api.github.root_url, path.into())
}

fn base_client_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("{}/{}", config.name, config.version))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );
    headers
}

async fn get_authentication_credentials(
    config: &Config,
    api_service: &dyn ApiService,
) -> Result<String, GitHubError> {
    if config.api.github.token.is_empty() {
        get_or_create_installation_access_token(config, api_service).await
    } else {
        Ok(config.api.github.token.clone())
    }
}

async fn get_or_create_installation_access_token(
    config: &Config,
    api_service: &dyn ApiService,
) -> Result<String, GitHubError> {
    let (last_token, last_expiration) = {
        let auth = LAST_TOKEN.read().await;
        (auth.token.clone(), auth.expiration)
    };

    let now_timestamp = now_timestamp();
    if token_needs_renewal(now_timestamp, last_expiration) {
        let token = create_installation_access_token(config, api_service).await?;
        let mut last_auth = LAST_TOKEN.write().await;
        last_auth.token = token.clone();
        last_auth.expiration = now_timestamp + INSTALLATION_TOKEN_LIFETIME_IN_SECONDS;

        Ok(token)
    } else {
        Ok(last_token)
    }
}

fn token_needs_renewal(now_timestamp: u64, expiration: u64) -> bool {
    let margin =
        (INSTALLATION_TOKEN_LIFETIME_IN_SECONDS as f32 * INSTALLATION_TOKEN_RENEW_THRESHOLD) as u64;
    now_timestamp > expiration.saturating_sub(margin)
}

fn now_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn create_app_token(config: &Config) -> Result<String, GitHubError> {
    // https://docs.github.com/en/apps/creating-github-apps/authenticating-with-a-github-app/generating-a-json-web-token-jwt-for-a-github-app
    let now_ts = now_timestamp();
    let claims = JwtClaims {
        iat: now_ts,
        exp: now_ts + APP_TOKEN_LIFETIME_IN_SECONDS,
        iss: config.api.github.app_id,
    };

    JwtUtils::create_jwt(&config.api.github.app_private_key, &claims)
        .map_err(|e| GitHubError::ImplementationError { source: e.into() })
}

#[tracing::instrument(skip_all, fields(installation_id = config.api.github.app_installation_id))]
async fn create_installation_access_token(
    config: &Config,
    api_service: &dyn ApiService,
) -> Result<String, GitHubError> {
    let auth_token = create_app_token(config)?;
    api_service
        .installations_create_token(&auth_token, config.api.github.app_installation_id)
        .await
        .map_err(|e| GitHubError::ImplementationError { source: e.into() })
}
