//! End-to-end provider tests against the checked-in fixtures
//!
//! Exercises the complete flow: settings -> infra catalog render -> layered
//! application config -> certificate pool.

use std::path::PathBuf;

use infra_core::{Error, MapEnv, Provider, ProviderSettings};
use infra_resources::ResourceProvider;
use infra_test_utils::TestLayout;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn fixture_dir(name: &str) -> String {
    fixtures().join(name).display().to_string()
}

fn env() -> MapEnv {
    MapEnv::new()
        .with("INFRA_TEST_VAR", "test_value")
        .with("INFRA_KAFKA_USERNAME", "useruser")
        .with("INFRA_KAFKA_PASSWORD", "p\"ss\\word")
        .with("INFRA_BILLING_KEY", "bk")
}

fn settings(environment: &str) -> ProviderSettings {
    ProviderSettings::new(environment, "sys", "cmp")
        .with_infra_config_folders([fixture_dir("infra")])
        .with_app_config_folders([fixture_dir("config")])
        .with_cert_folders([fixture_dir("certs")])
}

fn provider(environment: &str) -> Provider {
    Provider::new_with_env(settings(environment), &env()).unwrap()
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Repo {
    arn: String,
    params: RepoParams,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RepoParams {
    timeout: i64,
    max_idle_connections: i64,
    password: String,
    password2: String,
    password3: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AppConfig {
    #[serde(rename = "repo-1")]
    repo_1: Repo,
    #[serde(rename = "repo-2")]
    repo_2: Repo,
    #[serde(rename = "repo-6")]
    repo_6: Repo,
}

#[test]
fn test_render_secret() {
    let provider = provider("test");

    assert_eq!(provider.render_secret("test"), "test");
    assert_eq!(provider.render_secret("{{ test }}"), "{{ test }}");
    assert_eq!(provider.render_secret("this is a {{ .Environment }}"), "this is a test");
    assert_eq!(
        provider.render_secret("prefix_{{ .Env.INFRA_TEST_VAR }}_suffix"),
        "prefix_test_value_suffix"
    );
    assert_eq!(provider.render_secret(""), "");
    assert_eq!(provider.render_secret("{{ .Component }}"), "cmp");

    let strict = provider.render_secrets("{{ .InvalidProp }}");
    assert!(strict.is_err());
}

#[test]
fn test_provider_identity() {
    let provider = provider("test");
    let dynamic: &dyn ResourceProvider = &provider;

    assert_eq!(dynamic.environment(), "test");
    assert_eq!(dynamic.system_name(), "sys");
    assert_eq!(dynamic.component_name(), "cmp");
}

#[test]
fn test_infra_secrets_are_rendered() {
    let provider = provider("test");

    let kafka = provider.locator().locate_kafka_cluster("arn://messaging/kafka/clusters/main");
    assert_eq!(kafka.username, "useruser");
    assert_eq!(kafka.password, "p\"ss\\word");

    let billing = provider.locator().locate_webservice("arn://webservices/billing");
    assert_eq!(billing.base_url, "https://billing.test.internal");
    assert_eq!(billing.authorisation.key, "bk");
}

#[test]
fn test_locate_postgres_end_to_end() {
    let provider = provider("test");

    let pg = provider.locator().locate_postgres("arn://storage/postgres/mydb");
    assert!(infra_resources::Definition::validate(&pg).is_ok());
    assert_eq!(pg.port, 5432);
    assert_eq!(pg.dsn(), "postgres://u:@localhost:5432/d");
}

#[test]
fn test_check_all_reports_invalid_entries() {
    let provider = provider("test");

    let failed: Vec<String> = provider
        .locator()
        .check_all()
        .into_iter()
        .filter(|check| !check.is_ok())
        .map(|check| check.arn)
        .collect();

    assert_eq!(failed, vec!["arn://storage/sftp/invalid-1".to_string()]);
}

#[test]
fn test_load_config_global() {
    let provider = provider("test");

    let mut config = AppConfig::default();
    provider.load_config("app", &mut config).unwrap();

    assert_eq!(config.repo_1.arn, "arn://storage/elasticsearch/sample-1");
    assert_eq!(config.repo_1.params.timeout, 10);
}

#[test]
fn test_load_config_incomplete_struct() {
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct Flat {
        #[serde(rename = "repo-1")]
        repo: String,
    }

    let mut config = Flat::default();
    let err = provider("test").load_config("app", &mut config).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_load_config_environment_override() {
    let provider = provider("testenv");

    let mut config = AppConfig::default();
    provider.load_config("app", &mut config).unwrap();

    // partial override
    assert_eq!(config.repo_1.arn, "arn://storage/elasticsearch/sample-1");
    assert_eq!(config.repo_1.params.timeout, 15);
    assert_eq!(config.repo_1.params.max_idle_connections, 5);
    // full override
    assert_eq!(config.repo_2.arn, "arn://storage/elasticsearch/sample-2");
    assert_eq!(config.repo_2.params.timeout, 20);
    // untouched by the environment file
    assert_eq!(config.repo_6.arn, "arn://storage/elasticsearch/sample-1");
}

#[test]
fn test_load_config_environment_only() {
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct EnvApp {
        repo: Repo,
    }

    let mut config = EnvApp::default();
    provider("testenv").load_config("env-app", &mut config).unwrap();

    assert_eq!(config.repo.arn, "arn://storage/elasticsearch/sample-1");
    assert_eq!(config.repo.params.timeout, 15);
}

#[test]
fn test_load_config_with_secrets() {
    let mut config = AppConfig::default();
    provider("test").load_config("app", &mut config).unwrap();

    assert_eq!(config.repo_6.params.password, "never-use-this-pass-test-sys-cmp");
    assert_eq!(config.repo_6.params.password2, "test_value");
    assert_eq!(config.repo_6.params.password3, "");
}

#[test]
fn test_load_config_render_failure() {
    let mut config = AppConfig::default();
    let err = provider("test").load_config("app-invalid", &mut config).unwrap_err();

    assert!(matches!(err, Error::Render { .. }));
    assert_eq!(config.repo_6.arn, "");
}

#[test]
fn test_missing_fixture_environment() {
    let err = Provider::new_with_env(settings("prod"), &env()).unwrap_err();
    assert!(matches!(err, Error::Infra { .. }));
}

#[test]
fn test_certificate_pool_from_first_populated_folder() {
    let layout = TestLayout::new();
    let empty = layout.root().join("empty-certs");
    std::fs::create_dir_all(&empty).unwrap();

    let key = rcgen::KeyPair::generate().unwrap();
    let mut params = rcgen::CertificateParams::new(vec!["infra-test-ca".to_string()]).unwrap();
    params.is_ca = rcgen::IsCa::Ca(rcgen::BasicConstraints::Unconstrained);
    let pem = params.self_signed(&key).unwrap().pem();
    layout.write_cert("ca.pem", &pem);
    layout.write_cert("internal.ca.pem", &pem);
    layout.write_cert("notes.txt", "not a bundle");

    let settings = settings("test").with_cert_folders([
        empty.display().to_string(),
        layout.certs_dir().display().to_string(),
    ]);
    let provider = Provider::new_with_env(settings, &env()).unwrap();

    let certs = provider.certs();
    assert!(!certs.is_empty());
    assert_eq!(certs.files().len(), 2);
    assert!(provider.certs().client_config().is_ok());
}
