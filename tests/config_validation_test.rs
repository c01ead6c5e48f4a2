use greetly::config::{AppConfig, BackendSection, FrontendSection};

#[test]
fn defaults_match_original_deployment() {
    let config = AppConfig::default();

    assert_eq!(config.backend.port, 4000);
    assert_eq!(config.frontend.port, 3000);
    assert_eq!(config.frontend.backend_url, "http://localhost:4000");

    config.validate().expect("defaults should validate");
}

#[test]
fn backend_base_trims_trailing_slash() {
    let frontend = FrontendSection {
        backend_url: "http://localhost:4000/".to_string(),
        ..Default::default()
    };

    assert_eq!(frontend.backend_base(), "http://localhost:4000");
}

#[test]
fn zero_port_is_rejected() {
    let config = AppConfig {
        backend: BackendSection {
            port: 0,
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(config.validate().is_err(), "backend.port = 0 should fail");
}

#[test]
fn non_http_backend_url_is_rejected() {
    let config = AppConfig {
        frontend: FrontendSection {
            backend_url: "ftp://localhost:4000".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(config.validate().is_err(), "ftp scheme should fail");
}

#[test]
fn malformed_backend_url_is_rejected() {
    let config = AppConfig {
        frontend: FrontendSection {
            backend_url: "not a url".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(config.validate().is_err());
}
