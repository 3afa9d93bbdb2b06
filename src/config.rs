use std::env;
use std::path::Path;
use std::time::Duration;

use crate::api::Error;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://robot-ws.your-server.de";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "ROBOT_BASE_URL";
pub const ENV_USERNAME: &str = "ROBOT_USERNAME";
pub const ENV_PASSWORD: &str = "ROBOT_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "ROBOT_TIMEOUT_SECS";

/// Connection settings for the Robot webservice.
#[derive(Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = sanitize_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from the process environment.
    ///
    /// Fails with [`Error::Config`] when the webservice username or password
    /// is not set.
    pub fn from_env() -> Result<Self, Error> {
        let username = require_var(ENV_USERNAME)?;
        let password = require_var(ENV_PASSWORD)?;
        Ok(Self {
            base_url: get_api_base_url(),
            username,
            password,
            timeout: Duration::from_secs(get_timeout_secs()),
        })
    }
}

// Credentials stay out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_timeout_secs() -> u64 {
    env::var(ENV_TIMEOUT_SECS)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

fn require_var(name: &str) -> Result<String, Error> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} is not configured", name))),
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sanitizes_base_url() {
        let config = Config::new("user", "pass").with_base_url("http://127.0.0.1:9000/ ");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_debug_hides_password() {
        let config = Config::new("user", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }
}
