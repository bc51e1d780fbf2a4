//! Identifier lookups against the catalog
//!
//! Every lookup returns a definition. Failures are recorded in the
//! definition's error slot rather than returned, see [`Definition::validate`].

use tracing::{debug, warn};

use crate::arn;
use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::kinds::{
    Algolia, AwsSession, Dynamo, Elasticsearch, KafkaCluster, KinesisConsumer, KinesisProducer,
    NsqConsumer, NsqProducer, Postgres, Redis, S3, Sftp, SqsConsumer, SqsProducer, Webservice,
};
use crate::resource::Definition;

/// Read-only view over a [`Catalog`].
#[derive(Debug, Clone, Default)]
pub struct Locator {
    catalog: Catalog,
}

/// Outcome of validating one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub arn: String,
    pub kind: &'static str,
    pub result: Result<(), ResourceError>,
}

impl Check {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl Locator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Decode a rendered infra document.
    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        serde_json::from_str(document).map(Self::new)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve `arn` to a sanitized copy of the matching `R` definition.
    pub fn locate<R: Definition>(&self, arn: &str) -> R {
        let parsed = match arn::parse(arn, R::PATH) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!(arn, kind = R::KIND, error = %err, "Malformed identifier");
                return R::faulty(err.into());
            }
        };

        match R::entries(&self.catalog).get(&parsed.name) {
            Some(definition) => definition.clone().sanitize(),
            None => {
                debug!(arn, kind = R::KIND, "Resource not in catalog");
                R::faulty(ResourceError::NotFound {
                    kind: R::KIND,
                    name: parsed.name,
                })
            }
        }
    }

    pub fn locate_aws_session(&self, arn: &str) -> AwsSession {
        self.locate(arn)
    }

    pub fn locate_algolia(&self, arn: &str) -> Algolia {
        self.locate(arn)
    }

    pub fn locate_elasticsearch(&self, arn: &str) -> Elasticsearch {
        self.locate(arn)
    }

    pub fn locate_postgres(&self, arn: &str) -> Postgres {
        self.locate(arn)
    }

    pub fn locate_redis(&self, arn: &str) -> Redis {
        self.locate(arn)
    }

    pub fn locate_s3(&self, arn: &str) -> S3 {
        self.locate(arn)
    }

    pub fn locate_sftp(&self, arn: &str) -> Sftp {
        self.locate(arn)
    }

    pub fn locate_dynamo(&self, arn: &str) -> Dynamo {
        self.locate(arn)
    }

    pub fn locate_nsq_consumer(&self, arn: &str) -> NsqConsumer {
        self.locate(arn)
    }

    pub fn locate_nsq_producer(&self, arn: &str) -> NsqProducer {
        self.locate(arn)
    }

    pub fn locate_kafka_cluster(&self, arn: &str) -> KafkaCluster {
        self.locate(arn)
    }

    pub fn locate_sqs_consumer(&self, arn: &str) -> SqsConsumer {
        self.locate(arn)
    }

    pub fn locate_sqs_producer(&self, arn: &str) -> SqsProducer {
        self.locate(arn)
    }

    pub fn locate_kinesis_consumer(&self, arn: &str) -> KinesisConsumer {
        self.locate(arn)
    }

    pub fn locate_kinesis_producer(&self, arn: &str) -> KinesisProducer {
        self.locate(arn)
    }

    pub fn locate_webservice(&self, arn: &str) -> Webservice {
        self.locate(arn)
    }

    /// Canonical identifier of every catalog entry, grouped by kind.
    pub fn identifiers(&self) -> Vec<String> {
        struct Collect(Vec<String>);

        impl Visitor for Collect {
            fn visit<R: Definition>(&mut self, name: &str, _: &R) {
                self.0.push(arn::format(R::PATH, name));
            }
        }

        let mut collect = Collect(Vec::new());
        walk(&self.catalog, &mut collect);
        collect.0
    }

    /// Sanitize and validate every catalog entry.
    pub fn check_all(&self) -> Vec<Check> {
        struct Validate(Vec<Check>);

        impl Visitor for Validate {
            fn visit<R: Definition>(&mut self, name: &str, definition: &R) {
                let arn = arn::format(R::PATH, name);
                let result = definition.clone().sanitize().validate();
                if let Err(err) = &result {
                    warn!(arn = %arn, error = %err, "Invalid resource definition");
                }
                self.0.push(Check {
                    arn,
                    kind: R::KIND,
                    result,
                });
            }
        }

        let mut validate = Validate(Vec::new());
        walk(&self.catalog, &mut validate);
        validate.0
    }
}

trait Visitor {
    fn visit<R: Definition>(&mut self, name: &str, definition: &R);
}

fn visit_kind<R: Definition, V: Visitor>(catalog: &Catalog, visitor: &mut V) {
    for (name, definition) in R::entries(catalog) {
        visitor.visit(name, definition);
    }
}

fn walk<V: Visitor>(catalog: &Catalog, visitor: &mut V) {
    visit_kind::<AwsSession, V>(catalog, visitor);
    visit_kind::<Algolia, V>(catalog, visitor);
    visit_kind::<Elasticsearch, V>(catalog, visitor);
    visit_kind::<Postgres, V>(catalog, visitor);
    visit_kind::<Redis, V>(catalog, visitor);
    visit_kind::<S3, V>(catalog, visitor);
    visit_kind::<Sftp, V>(catalog, visitor);
    visit_kind::<Dynamo, V>(catalog, visitor);
    visit_kind::<NsqConsumer, V>(catalog, visitor);
    visit_kind::<NsqProducer, V>(catalog, visitor);
    visit_kind::<KinesisConsumer, V>(catalog, visitor);
    visit_kind::<KinesisProducer, V>(catalog, visitor);
    visit_kind::<KafkaCluster, V>(catalog, visitor);
    visit_kind::<SqsConsumer, V>(catalog, visitor);
    visit_kind::<SqsProducer, V>(catalog, visitor);
    visit_kind::<Webservice, V>(catalog, visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArnError;
    use pretty_assertions::assert_eq;

    const CATALOG: &str = r#"{
        "storage": {
            "postgres": {
                "mydb": {"host": "localhost", "user": "u", "database": "d"},
                "broken": {"host": "localhost"}
            }
        },
        "messaging": {
            "kafka": {"clusters": {"events": {"brokers": ["kafka:9092"]}}}
        },
        "webservices": {"billing": {"url": "https://billing.internal"}}
    }"#;

    fn locator() -> Locator {
        Locator::from_json(CATALOG).unwrap()
    }

    #[test]
    fn test_locate_applies_defaults() {
        let pg = locator().locate_postgres("arn://storage/postgres/mydb");

        assert_eq!(pg.port, 5432);
        assert!(pg.validate().is_ok());
        assert_eq!(pg.dsn(), "postgres://u:@localhost:5432/d");
    }

    #[test]
    fn test_locate_ignores_role() {
        let pg = locator().locate_postgres("arn://storage/postgres/mydb/readonly");
        assert!(pg.validate().is_ok());
    }

    #[test]
    fn test_locate_not_found() {
        let pg = locator().locate_postgres("arn://storage/postgres/missing");

        assert_eq!(pg, Postgres::faulty(ResourceError::NotFound {
            kind: "postgres",
            name: "missing".into(),
        }));
        assert!(pg.validate().unwrap_err().is_not_found());
    }

    #[test]
    fn test_locate_wrong_category() {
        let pg = locator().locate_postgres("arn://storage/redis/mydb");

        assert!(matches!(
            pg.validate(),
            Err(ResourceError::Identifier(ArnError::Mismatch { position: 1, .. }))
        ));
    }

    #[test]
    fn test_locate_keeps_first_error() {
        let pg = locator().locate_postgres("arn://storage/postgres/broken");
        let first = pg.validate().unwrap_err();

        assert!(first.to_string().contains("postgres database configuration undefined"));
        assert_eq!(pg.clone().sanitize().validate(), Err(first));
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            locator().identifiers(),
            vec![
                "arn://storage/postgres/broken",
                "arn://storage/postgres/mydb",
                "arn://messaging/kafka/clusters/events",
                "arn://webservices/billing",
            ]
        );
    }

    #[test]
    fn test_check_all() {
        let checks = locator().check_all();
        let failed: Vec<_> = checks.iter().filter(|c| !c.is_ok()).map(|c| c.arn.as_str()).collect();

        assert_eq!(checks.len(), 4);
        assert_eq!(failed, vec!["arn://storage/postgres/broken"]);
    }

    #[test]
    fn test_empty_catalog() {
        let locator = Locator::from_json("{}").unwrap();
        assert!(locator.identifiers().is_empty());
        assert!(locator.locate_webservice("arn://webservices/billing").validate().is_err());
    }
}
