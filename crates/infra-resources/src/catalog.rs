//! The infrastructure catalog document
//!
//! Mirrors the JSON layout of an infra file. Every section is optional and
//! every map is keyed by instance name.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::kinds::{
    Algolia, AwsSession, Dynamo, Elasticsearch, KafkaCluster, KinesisConsumer, KinesisProducer,
    NsqConsumer, NsqProducer, Postgres, Redis, S3, Sftp, SqsConsumer, SqsProducer, Webservice,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub cloud: Cloud,
    pub storage: Storage,
    pub messaging: Messaging,
    pub webservices: BTreeMap<String, Webservice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub aws: BTreeMap<String, AwsSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub algolia: BTreeMap<String, Algolia>,
    pub elasticsearch: BTreeMap<String, Elasticsearch>,
    pub postgres: BTreeMap<String, Postgres>,
    pub redis: BTreeMap<String, Redis>,
    pub s3: BTreeMap<String, S3>,
    pub sftp: BTreeMap<String, Sftp>,
    pub dynamo: BTreeMap<String, Dynamo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Messaging {
    pub nsq: Nsq,
    pub kinesis: Kinesis,
    pub kafka: Kafka,
    pub sqs: Sqs,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Nsq {
    pub consumers: BTreeMap<String, NsqConsumer>,
    pub producers: BTreeMap<String, NsqProducer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Kinesis {
    pub consumers: BTreeMap<String, KinesisConsumer>,
    pub producers: BTreeMap<String, KinesisProducer>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Kafka {
    pub clusters: BTreeMap<String, KafkaCluster>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Sqs {
    pub consumers: BTreeMap<String, SqsConsumer>,
    pub producers: BTreeMap<String, SqsProducer>,
}
