//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout.
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
    /// GitHub App ID.
    pub app_id: u64,
    /// GitHub App installation ID.
    pub app_installation_id: u64,
    /// GitHub App private key.
    pub app_private_key: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging. Enabled by any non-empty `BOT_LOGGING_USE_BUNYAN`.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Disable webhook signature verification. Enabled by any non-empty value.
    pub disable_webhook_signature: bool,
}

/// Label policy options.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Managed repositories (`owner/name`). Empty means every repository.
    pub repositories: Vec<String>,
    /// Changeset file prefix, followed by the pull request number.
    pub changeset_prefix: String,
    /// Title keyword flagging a hotfix.
    pub hotfix_keyword: String,
    /// Approvals needed before a pull request counts as approved.
    pub needed_approvals: usize,
    /// Staging branch name.
    pub staging_branch: String,
    /// Release branch name.
    pub release_branch: String,
    /// Develop branch name.
    pub develop_branch: String,
    /// Repository uses a staging/master/develop flow. Enabled by any non-empty value.
    pub three_branch_flow: bool,
}

impl PolicyConfig {
    /// Check if a repository is handled by the label policy.
    pub fn manages_repository(&self, full_name: &str) -> bool {
        self.repositories.is_empty()
            || self
                .repositories
                .iter()
                .any(|r| r.eq_ignore_ascii_case(full_name))
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            repositories: vec![],
            changeset_prefix: "pr-".into(),
            hotfix_keyword: "hotfix".into(),
            needed_approvals: 2,
            staging_branch: "staging".into(),
            release_branch: "master".into(),
            develop_branch: "develop".into(),
            three_branch_flow: false,
        }
    }
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot username.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// Label policy options.
    pub policy: PolicyConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        let policy_defaults = PolicyConfig::default();

        Config {
            name: env_to_str("BOT_NAME", "prlabel"),
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("BOT_API_DRIVER", "github"))
                    .unwrap_or_default(),
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("BOT_API_GITHUB_TOKEN", ""),
                    app_id: env_to_u64("BOT_API_GITHUB_APP_ID", 0),
                    app_installation_id: env_to_u64("BOT_API_GITHUB_APP_INSTALLATION_ID", 0),
                    app_private_key: env_to_str("BOT_API_GITHUB_APP_PRIVATE_KEY", ""),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                webhook_secret: env_to_str("BOT_SERVER_WEBHOOK_SECRET", ""),
                disable_webhook_signature: env_to_bool(
                    "BOT_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                    false,
                ),
            },
            policy: PolicyConfig {
                repositories: parse_list(&env_to_str("BOT_POLICY_REPOSITORIES", "")),
                changeset_prefix: env_to_str(
                    "BOT_POLICY_CHANGESET_PREFIX",
                    &policy_defaults.changeset_prefix,
                ),
                hotfix_keyword: env_to_str(
                    "BOT_POLICY_HOTFIX_KEYWORD",
                    &policy_defaults.hotfix_keyword,
                ),
                needed_approvals: env_to_u64(
                    "BOT_POLICY_NEEDED_APPROVALS",
                    policy_defaults.needed_approvals as u64,
                ) as usize,
                staging_branch: env_to_str(
                    "BOT_POLICY_STAGING_BRANCH",
                    &policy_defaults.staging_branch,
                ),
                release_branch: env_to_str(
                    "BOT_POLICY_RELEASE_BRANCH",
                    &policy_defaults.release_branch,
                ),
                develop_branch: env_to_str(
                    "BOT_POLICY_DEVELOP_BRANCH",
                    &policy_defaults.develop_branch,
                ),
                three_branch_flow: env_to_bool("BOT_POLICY_THREE_BRANCH_FLOW", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

/// Presence flag: any non-empty value is `true`, including `"false"` or `"0"`.
/// An empty value is `false`, an unset variable gives `default`.
fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
