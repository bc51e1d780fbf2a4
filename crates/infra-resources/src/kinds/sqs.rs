use std::collections::BTreeMap;

use serde::Deserialize;

use super::aws::AwsEndpoint;
use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::resource::{Definition, Resource, resource_accessors};

/// SQS queue read by a consumer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SqsConsumer {
    #[serde(flatten)]
    pub resource: Resource,
    pub aws: AwsEndpoint,
    pub queue: String,
}

impl Definition for SqsConsumer {
    const KIND: &'static str = "sqs consumer";
    const PATH: &'static [&'static str] = &["messaging", "sqs", "consumers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.sqs.consumers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.queue.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "sqs consumer queue can not be empty"));
        }
        Ok(())
    }
}

/// SQS queue written by a producer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SqsProducer {
    #[serde(flatten)]
    pub resource: Resource,
    pub aws: AwsEndpoint,
    pub queue: String,
}

impl Definition for SqsProducer {
    const KIND: &'static str = "sqs producer";
    const PATH: &'static [&'static str] = &["messaging", "sqs", "producers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.sqs.producers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.queue.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "sqs producer queue can not be empty"));
        }
        Ok(())
    }
}
