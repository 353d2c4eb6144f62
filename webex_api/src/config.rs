//! Session configuration.

use std::time::Duration;

use crate::Error;

/// Production API root. Relative endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1/";

/// Per-request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const ACCESS_TOKEN_ENV: &str = "WEBEX_TEAMS_ACCESS_TOKEN";
pub const BASE_URL_ENV: &str = "WEBEX_TEAMS_BASE_URL";
pub const TIMEOUT_ENV: &str = "WEBEX_TEAMS_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "WEBEX_TEAMS_USER_AGENT";

/// Settings used to build a [`RestSession`](crate::RestSession).
#[derive(Clone)]
pub struct SessionConfig {
    /// Bearer token sent on every request.
    pub access_token: String,
    /// API root. Should end with `/` so relative paths append to it.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, so callers (and tests) can
    /// supply values without touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let access_token = lookup(ACCESS_TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))?;
        let mut config = Self::new(access_token.trim());
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(&base_url);
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            let secs = timeout.parse::<u64>().map_err(|_| {
                Error::Config(format!("{} must be a number of seconds", TIMEOUT_ENV))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV) {
            config = config.with_user_agent(&user_agent);
        }
        Ok(config)
    }

    /// Sets the API root. A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_only_token_is_set() {
        let config = SessionConfig::from_lookup(lookup(&[(ACCESS_TOKEN_ENV, "tok")])).unwrap();
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("webex_api/"));
    }

    #[test]
    fn overrides_from_lookup() {
        let config = SessionConfig::from_lookup(lookup(&[
            (ACCESS_TOKEN_ENV, " tok "),
            (BASE_URL_ENV, "https://api.wxcc-us1.cisco.com"),
            (TIMEOUT_ENV, "5"),
            (USER_AGENT_ENV, "provisioning-bot"),
        ]))
        .unwrap();
        assert_eq!(config.access_token, "tok");
        assert_eq!(config.base_url, "https://api.wxcc-us1.cisco.com/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "provisioning-bot");
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = SessionConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_timeout_is_a_config_error() {
        let err = SessionConfig::from_lookup(lookup(&[
            (ACCESS_TOKEN_ENV, "tok"),
            (TIMEOUT_ENV, "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let printed = format!("{:?}", SessionConfig::new("secret-token"));
        assert!(!printed.contains("secret-token"));
    }
}
