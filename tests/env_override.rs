//! The SERVER_ADDRESS environment override.
//!
//! Kept in its own binary: setting process-global environment must not race
//! with the other config tests.

use std::fs;

use coffeeshop_frontend::config::loader::{load_config, SERVER_ADDRESS_ENV};

#[test]
fn test_env_override_takes_precedence_over_file() {
    let path = std::env::temp_dir().join("coffeeshop-frontend-env-override.toml");
    fs::write(
        &path,
        r#"
        [backend]
        base_address = "http://127.0.0.1:8081"
        "#,
    )
    .unwrap();

    std::env::set_var(SERVER_ADDRESS_ENV, "http://10.0.0.9:9999");
    let config = load_config(&path).unwrap();
    std::env::remove_var(SERVER_ADDRESS_ENV);

    assert_eq!(config.backend.base_address, "http://10.0.0.9:9999");
}
