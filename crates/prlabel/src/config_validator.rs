//! Validation utilities.

use std::fmt::Write;

use prlabel_config::{ApiDriver, Config};
use prlabel_crypto::JwtUtils;
use prlabel_models::RepositoryPath;
use thiserror::Error;

enum ApiConfigError {
    MissingToken,
    MissingAppId,
    MissingInstallationId,
    MissingPrivateKey,
    InvalidPrivateKey,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    fn _push(error: &mut String, kind: &str, name: &str) {
        // Writing into a String cannot fail.
        let _ = write!(error, "\n  - {}: {}", kind, name);
    }

    fn _missing(error: &mut String, name: &str) {
        _push(error, "Missing env. var.", name);
    }

    fn _invalid_key(error: &mut String, name: &str) {
        _push(error, "Invalid private key", name);
    }

    fn _invalid_value(error: &mut String, name: &str) {
        _push(error, "Invalid value", name);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }
    if config.name.is_empty() {
        _missing(&mut error, "BOT_NAME");
    }

    // Check API credentials: token or private key
    if config.api.driver == ApiDriver::GitHub {
        match validate_api_credentials(config) {
            Err(ApiConfigError::MissingToken) => {
                _missing(&mut error, "BOT_API_GITHUB_TOKEN");
            }
            Err(ApiConfigError::MissingAppId) => {
                _missing(&mut error, "BOT_API_GITHUB_APP_ID");
            }
            Err(ApiConfigError::InvalidPrivateKey) => {
                _invalid_key(&mut error, "BOT_API_GITHUB_APP_PRIVATE_KEY");
            }
            Err(ApiConfigError::MissingInstallationId) => {
                _missing(&mut error, "BOT_API_GITHUB_APP_INSTALLATION_ID");
            }
            _ => (),
        }
    }

    // Check label policy
    if config.policy.needed_approvals == 0 {
        _invalid_value(&mut error, "BOT_POLICY_NEEDED_APPROVALS");
    }
    if config.policy.changeset_prefix.is_empty() {
        _missing(&mut error, "BOT_POLICY_CHANGESET_PREFIX");
    }
    if config
        .policy
        .repositories
        .iter()
        .any(|r| RepositoryPath::new(r).is_err())
    {
        _invalid_value(&mut error, "BOT_POLICY_REPOSITORIES");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

fn validate_api_credentials(config: &Config) -> Result<(), ApiConfigError> {
    // Check token first
    if config.api.github.token.is_empty() {
        match validate_github_app_config(config) {
            // Private key missing, ask for token instead.
            Err(ApiConfigError::MissingPrivateKey) => Err(ApiConfigError::MissingToken),
            res => res,
        }
    } else {
        Ok(())
    }
}

fn validate_github_app_config(config: &Config) -> Result<(), ApiConfigError> {
    if config.api.github.app_private_key.is_empty() {
        Err(ApiConfigError::MissingPrivateKey)
    } else if JwtUtils::parse_encoding_key(&config.api.github.app_private_key).is_err() {
        Err(ApiConfigError::InvalidPrivateKey)
    } else if config.api.github.app_id == 0 {
        Err(ApiConfigError::MissingAppId)
    } else if config.api.github.app_installation_id == 0 {
        Err(ApiConfigError::MissingInstallationId)
    } else {
        Ok(())
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
