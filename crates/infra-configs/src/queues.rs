//! SQS queues and Kinesis streams

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqsConsumerParams {
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub workers: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_messages_per_worker: i64,
    /// Deliver message bodies without SNS envelope unwrapping.
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub raw_message: bool,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub enable_debug_logs: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqsConsumer {
    pub arn: String,
    pub params: SqsConsumerParams,
    #[serde(skip)]
    bound: Bound<resources::SqsConsumer>,
}

impl SqsConsumer {
    /// Queue name, empty before bootstrap.
    pub fn queue(&self) -> String {
        self.bound.map_or_default(|c| c.queue.clone())
    }
}

impl Bootstrap for SqsConsumer {
    type Resource = resources::SqsConsumer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqsProducer {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::SqsProducer>,
}

impl SqsProducer {
    pub fn queue(&self) -> String {
        self.bound.map_or_default(|p| p.queue.clone())
    }
}

impl Bootstrap for SqsProducer {
    type Resource = resources::SqsProducer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinesisConsumerParams {
    /// Application name used for shard leases.
    pub group: String,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub enable_debug_logs: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinesisConsumer {
    pub arn: String,
    pub params: KinesisConsumerParams,
    #[serde(skip)]
    bound: Bound<resources::KinesisConsumer>,
}

impl KinesisConsumer {
    /// Stream name, empty before bootstrap.
    pub fn stream(&self) -> String {
        self.bound.map_or_default(|c| c.stream.clone())
    }
}

impl Bootstrap for KinesisConsumer {
    type Resource = resources::KinesisConsumer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinesisProducer {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::KinesisProducer>,
}

impl KinesisProducer {
    pub fn stream(&self) -> String {
        self.bound.map_or_default(|p| p.stream.clone())
    }
}

impl Bootstrap for KinesisProducer {
    type Resource = resources::KinesisProducer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}
