//! Bound configurations
//!
//! Application config files declare which catalog resource they use by
//! identifier:
//!
//! ```json
//! { "db": { "arn": "arn://storage/postgres/main-db", "params": { "max_open_conns": 20 } } }
//! ```
//!
//! After decoding, each configuration is bootstrapped once against a
//! [`ResourceProvider`](infra_resources::ResourceProvider). Bootstrapping
//! locates the definition, validates it, runs the configuration's own checks
//! and fills in parameter defaults. Derived values such as DSNs and topic
//! names are empty strings until then.
//!
//! # Example
//!
//! ```ignore
//! use infra_configs::{Bootstrap, Postgres};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct AppConfig {
//!     db: Postgres,
//! }
//!
//! let mut config = AppConfig::default();
//! provider.load_config("app", &mut config)?;
//! config.db.bootstrap(&provider)?;
//! let dsn = config.db.dsn();
//! ```

pub mod bound;
pub mod error;
pub mod kafka;
pub mod nsq;
pub mod postgres;
pub mod queues;
pub mod storage;
pub mod webservice;

#[cfg(test)]
pub(crate) mod testing;

pub use bound::{Bootstrap, Bound};
pub use error::{Error, Result};
pub use kafka::{KafkaCluster, KafkaConsumer, KafkaProducer};
pub use nsq::{MAX_CHANNEL_LEN, NsqConsumer, NsqProducer};
pub use postgres::{Postgres, PostgresListener, PostgresListenerParams, PostgresParams};
pub use queues::{KinesisConsumer, KinesisConsumerParams, KinesisProducer, SqsConsumer, SqsConsumerParams, SqsProducer};
pub use storage::{Algolia, Dynamo, Elasticsearch, ElasticsearchParams, Redis, S3, Sftp};
pub use webservice::{Connection, Webservice, WebserviceParams};
