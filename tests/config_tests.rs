use hrobot::config;
use hrobot::Error;
use std::env;
use std::time::Duration;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://robot-ws.your-server.de/"),
        "https://robot-ws.your-server.de"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://robot-ws.your-server.de"),
        "https://robot-ws.your-server.de"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://robot-ws.your-server.de///"),
        "https://robot-ws.your-server.de"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://127.0.0.1:8080/  "),
        "http://127.0.0.1:8080"
    );
}

#[test]
fn test_sanitize_base_url_empty_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_API_BASE_URL);
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_config_new_uses_defaults() {
    let cfg = config::Config::new("user", "pass");
    assert_eq!(cfg.base_url, config::DEFAULT_API_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_secs(config::DEFAULT_TIMEOUT_SECS));
}

// All environment mutation lives in one test; the test harness runs tests on
// parallel threads that share the process environment.
#[test]
fn test_config_from_env() {
    env::remove_var(config::ENV_BASE_URL);
    env::remove_var(config::ENV_USERNAME);
    env::remove_var(config::ENV_PASSWORD);
    env::remove_var(config::ENV_TIMEOUT_SECS);

    // Missing credentials
    match config::Config::from_env() {
        Err(Error::Config(msg)) => assert!(msg.contains(config::ENV_USERNAME)),
        other => panic!("expected config error, got {:?}", other),
    }

    env::set_var(config::ENV_USERNAME, "#ws+abc");
    match config::Config::from_env() {
        Err(Error::Config(msg)) => assert!(msg.contains(config::ENV_PASSWORD)),
        other => panic!("expected config error, got {:?}", other),
    }

    // Defaults
    env::set_var(config::ENV_PASSWORD, "secret");
    let cfg = config::Config::from_env().unwrap();
    assert_eq!(cfg.username, "#ws+abc");
    assert_eq!(cfg.password, "secret");
    assert_eq!(cfg.base_url, config::DEFAULT_API_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_secs(config::DEFAULT_TIMEOUT_SECS));

    // Overrides
    env::set_var(config::ENV_BASE_URL, "http://localhost:9000/");
    env::set_var(config::ENV_TIMEOUT_SECS, "5");
    let cfg = config::Config::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.timeout, Duration::from_secs(5));

    // Garbage timeout falls back to the default
    env::set_var(config::ENV_TIMEOUT_SECS, "soon");
    assert_eq!(config::get_timeout_secs(), config::DEFAULT_TIMEOUT_SECS);

    // Clean up
    env::remove_var(config::ENV_BASE_URL);
    env::remove_var(config::ENV_USERNAME);
    env::remove_var(config::ENV_PASSWORD);
    env::remove_var(config::ENV_TIMEOUT_SECS);
}
