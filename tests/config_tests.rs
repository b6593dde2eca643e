use recap::core::config::AppConfig;
use recap::errors::RecapError;
use std::env;

// Single test so the RECAP_BIND_ADDR mutations can't race with each other;
// integration tests in one binary share the process environment.
#[test]
fn test_config_validates_the_bind_address() {
    // A malformed bind address is rejected at load time
    env::set_var("RECAP_BIND_ADDR", "not-an-address");
    let err = AppConfig::from_env().expect_err("malformed bind address should be rejected");
    match err {
        RecapError::ConfigError(msg) => {
            assert!(msg.contains("RECAP_BIND_ADDR"));
            assert!(msg.contains("not-an-address"));
        }
        _ => panic!("Unexpected error type"),
    }

    // A well-formed override is kept as given
    env::set_var("RECAP_BIND_ADDR", "127.0.0.1:9000");
    let config = AppConfig::from_env().expect("valid bind address should load");
    assert_eq!(config.bind_addr, "127.0.0.1:9000");

    // On a clean environment the defaults apply
    env::remove_var("RECAP_BIND_ADDR");
    let config = AppConfig::from_env().expect("defaults should load");
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.model_id, "facebook/bart-large-cnn");
}
