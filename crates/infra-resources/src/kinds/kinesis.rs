use std::collections::BTreeMap;

use serde::Deserialize;

use super::aws::AwsEndpoint;
use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// Kinesis stream read by a consumer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KinesisConsumer {
    #[serde(flatten)]
    pub resource: Resource,
    pub aws: AwsEndpoint,
    pub stream: String,
}

impl Definition for KinesisConsumer {
    const KIND: &'static str = "kinesis consumer";
    const PATH: &'static [&'static str] = &["messaging", "kinesis", "consumers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.kinesis.consumers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.stream.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "kinesis consumer stream can not be empty"));
        }
        Ok(())
    }
}

/// Kinesis stream written by a producer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KinesisProducer {
    #[serde(flatten)]
    pub resource: Resource,
    pub aws: AwsEndpoint,
    pub stream: String,
}

impl Definition for KinesisProducer {
    const KIND: &'static str = "kinesis producer";
    const PATH: &'static [&'static str] = &["messaging", "kinesis", "producers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.kinesis.producers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.stream.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "kinesis producer stream can not be empty"));
        }
        Ok(())
    }
}
