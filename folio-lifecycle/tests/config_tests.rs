use folio_lifecycle::{CacheConfig, ConfigError, LifecycleConfig};
use folio_model::GatewayErrorPolicy;
use pretty_assertions::assert_eq;
use std::io::Write;

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn defaults_fail_closed() {
    let config = LifecycleConfig::default();
    assert_eq!(config.validation.on_gateway_error, GatewayErrorPolicy::FailClosed);
    assert_eq!(config.cache.initial_capacity, 256);
}

#[test]
fn empty_document_yields_defaults() {
    let config = LifecycleConfig::from_toml_str("").unwrap();
    assert_eq!(config, LifecycleConfig::default());
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_full_document() {
    let config = LifecycleConfig::from_toml_str(
        r#"
        [validation]
        on_gateway_error = "surface"

        [cache]
        initial_capacity = 4096
        "#,
    )
    .unwrap();
    assert_eq!(config.validation.on_gateway_error, GatewayErrorPolicy::Surface);
    assert_eq!(config.cache, CacheConfig { initial_capacity: 4096 });
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = LifecycleConfig::from_toml_str("[cache]\n").unwrap();
    assert_eq!(config.cache.initial_capacity, 256);
    assert_eq!(config.validation.on_gateway_error, GatewayErrorPolicy::FailClosed);
}

#[test]
fn unknown_policy_is_rejected() {
    let err = LifecycleConfig::from_toml_str("[validation]\non_gateway_error = \"pass\"\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn serializes_back_to_toml() {
    let config = LifecycleConfig::default();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(LifecycleConfig::from_toml_str(&text).unwrap(), config);
    assert!(text.contains("on_gateway_error = \"fail_closed\""));
}

// ── Files ────────────────────────────────────────────────────────

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LifecycleConfig::load_from(&dir.path().join("folio.toml")).unwrap();
    assert_eq!(config, LifecycleConfig::default());
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validation]\non_gateway_error = \"surface\"").unwrap();
    let config = LifecycleConfig::load_from(file.path()).unwrap();
    assert_eq!(config.validation.on_gateway_error, GatewayErrorPolicy::Surface);
}

#[test]
fn malformed_file_is_an_error_for_strict_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[cache\ninitial_capacity = ").unwrap();
    assert!(matches!(
        LifecycleConfig::load_from(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn malformed_file_falls_back_for_lenient_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[cache]\ninitial_capacity = \"lots\"").unwrap();
    assert_eq!(
        LifecycleConfig::load_or_default(file.path()),
        LifecycleConfig::default()
    );
}

// ── Cache construction ───────────────────────────────────────────

#[test]
fn cache_config_builds_empty_cache() {
    let cache = CacheConfig { initial_capacity: 16 }.build();
    assert!(cache.is_empty());
}
