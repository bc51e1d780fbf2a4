//! Resource kinds stored in the catalog

mod algolia;
mod aws;
mod dynamo;
mod elasticsearch;
mod kafka;
mod kinesis;
mod nsq;
mod postgres;
mod redis;
mod s3;
mod sftp;
mod sqs;
mod webservice;

pub use algolia::Algolia;
pub use aws::{AwsCredentials, AwsEndpoint, AwsSession};
pub use dynamo::Dynamo;
pub use elasticsearch::Elasticsearch;
pub use kafka::KafkaCluster;
pub use kinesis::{KinesisConsumer, KinesisProducer};
pub use nsq::{NsqConsumer, NsqProducer};
pub use postgres::Postgres;
pub use redis::Redis;
pub use s3::S3;
pub use sftp::{PrivateKey, Sftp};
pub use sqs::{SqsConsumer, SqsProducer};
pub use webservice::{Authorisation, Webservice};
