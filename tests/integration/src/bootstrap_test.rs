//! End-to-end bound configuration tests against the checked-in fixtures
//!
//! Loads the `app` namespace into typed configurations and bootstraps each
//! against the provider built from `infra/test.json`.

use std::path::PathBuf;

use infra_configs::{Bootstrap, Elasticsearch, Error, KafkaConsumer, NsqConsumer, Postgres, Sftp, Webservice};
use infra_core::{MapEnv, Provider, ProviderSettings};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

fn fixture_dir(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .join(name)
        .display()
        .to_string()
}

fn provider() -> Provider {
    let settings = ProviderSettings::new("test", "sys", "cmp")
        .with_infra_config_folders([fixture_dir("infra")])
        .with_app_config_folders([fixture_dir("config")])
        .with_cert_folders([fixture_dir("certs")]);
    let env = MapEnv::new()
        .with("INFRA_KAFKA_USERNAME", "useruser")
        .with("INFRA_BILLING_KEY", "bk");
    Provider::new_with_env(settings, &env).unwrap()
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    #[serde(rename = "repo-1")]
    search: Elasticsearch,
    db: Postgres,
    events: KafkaConsumer,
    legacy: KafkaConsumer,
    audit: NsqConsumer,
    billing: Webservice,
    files: Sftp,
    #[serde(rename = "broken-files")]
    broken_files: Sftp,
}

fn load(provider: &Provider) -> AppConfig {
    let mut config = AppConfig::default();
    provider.load_config("app", &mut config).unwrap();
    config
}

#[test]
fn test_declared_state() {
    let config = load(&provider());

    assert!(!config.db.is_bootstrapped());
    assert_eq!(config.db.dsn(), "");
    assert_eq!(config.events.topic_name(), "");
    assert_eq!(config.audit.channel_name(), "");
    assert_eq!(config.billing.validate(), Err(Error::NotBootstrapped));
}

#[test]
fn test_bootstrap_all() {
    let provider = provider();
    let mut config = load(&provider);

    config.search.bootstrap(&provider).unwrap();
    config.db.bootstrap(&provider).unwrap();
    config.events.bootstrap(&provider).unwrap();
    config.legacy.bootstrap(&provider).unwrap();
    config.audit.bootstrap(&provider).unwrap();
    config.billing.bootstrap(&provider).unwrap();
    config.files.bootstrap(&provider).unwrap();

    assert_eq!(config.search.params.timeout, 10);
    assert_eq!(config.search.resource().index_prefix, "test-");

    assert_eq!(config.db.full_dsn(), "postgres://u:@localhost:5432/d?sslmode=disable");
    assert_eq!(config.db.params.max_idle_conns, 2);
    assert_eq!(config.db.params.max_open_conns, 20);

    assert_eq!(config.events.topic_name(), "tpa-my-topic-tsa");
    assert_eq!(config.events.group_name(), "gpa-my.group-gsa");
    assert_eq!(config.events.resource().username, "useruser");
    assert_eq!(config.legacy.topic_name(), "our-topic");

    assert_eq!(config.audit.topic_name(), "test-sys-audit-cmp");
    assert_eq!(config.audit.channel_name(), "test-sys-archiver-cmp");

    assert_eq!(config.billing.url(), "https://billing.test.internal");
    assert_eq!(config.billing.resource().authorisation.key, "bk");

    assert_eq!(config.files.resource().port, 22);
}

#[test]
fn test_invalid_resource_is_reported_at_bootstrap() {
    let provider = provider();
    let mut config = load(&provider);

    let err = config.broken_files.bootstrap(&provider).unwrap_err();

    assert!(matches!(err, Error::Resource { ref arn, .. } if arn == "arn://storage/sftp/invalid-1"));
    assert!(!config.broken_files.is_bootstrapped());
}

#[test]
fn test_bootstrap_is_once_only() {
    let provider = provider();
    let mut config = load(&provider);

    config.db.bootstrap(&provider).unwrap();
    assert_eq!(config.db.bootstrap(&provider), Err(Error::AlreadyBootstrapped));
    assert!(config.db.validate().is_ok());
}
