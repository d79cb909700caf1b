use std::io::Write;

use tagkeeper_core::config::*;
use tagkeeper_core::errors::{ConfigError, TagKeeperError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TagKeeperConfig::from_toml("").unwrap();

    assert_eq!(config.catalog.table_name, "TagsTable");
    assert_eq!(config.catalog.region, "eu-central-1");

    assert_eq!(config.storage.db_path, "tagkeeper.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(
        config.policy.required_keys,
        vec!["Environment", "Department", "ObjectId"]
    );
    assert_eq!(config.policy.compliant_annotation, "Resource is compliant");
    assert_eq!(config.policy.non_compliant_annotation, "Missing required tags");

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[catalog]
region = "us-east-1"

[policy]
required_keys = ["Environment", "CostCenter"]
"#;
    let config = TagKeeperConfig::from_toml(toml).unwrap();
    assert_eq!(config.catalog.region, "us-east-1");
    assert_eq!(config.catalog.table_name, "TagsTable"); // default
    assert_eq!(config.policy.required_keys, vec!["Environment", "CostCenter"]);
    assert_eq!(config.policy.compliant_annotation, "Resource is compliant");
}

#[test]
fn config_serde_roundtrip() {
    let config = TagKeeperConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TagKeeperConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.catalog.table_name, config.catalog.table_name);
    assert_eq!(roundtripped.policy.required_keys, config.policy.required_keys);
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
}

#[test]
fn empty_required_keys_are_rejected() {
    let err = TagKeeperConfig::from_toml("[policy]\nrequired_keys = []\n").unwrap_err();
    match err {
        TagKeeperError::ConfigError(ConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "policy.required_keys");
        }
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[test]
fn blank_table_name_is_rejected() {
    let err = TagKeeperConfig::from_toml("[catalog]\ntable_name = \"  \"\n").unwrap_err();
    assert!(err.to_string().contains("catalog.table_name"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = TagKeeperConfig::from_toml("[catalog\n").unwrap_err();
    assert!(matches!(
        err,
        TagKeeperError::ConfigError(ConfigError::Parse { .. })
    ));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[storage]\ndb_path = \"/var/lib/tagkeeper.db\"").unwrap();
    let config = TagKeeperConfig::from_file(file.path()).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/tagkeeper.db");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TagKeeperConfig::from_file(std::path::Path::new("/nonexistent/tagkeeper.toml"))
        .unwrap_err();
    assert!(matches!(err, TagKeeperError::ConfigError(ConfigError::Io { .. })));
}
