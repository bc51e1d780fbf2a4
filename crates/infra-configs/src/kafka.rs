//! Kafka clusters, consumers and producers
//!
//! All three bind a [`resources::KafkaCluster`]; topic and group names are
//! composed with the cluster's prefix, suffix and translation rules.

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

/// Direct access to a catalog Kafka cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaCluster {
    pub arn: String,
    #[serde(skip)]
    bound: Bound<resources::KafkaCluster>,
}

impl KafkaCluster {
    pub fn topic_name_for(&self, topic: &str) -> String {
        self.bound.map_or_default(|c| c.topic_name_for(topic))
    }

    pub fn group_name_for(&self, group: &str) -> String {
        self.bound.map_or_default(|c| c.group_name_for(group))
    }
}

impl Bootstrap for KafkaCluster {
    type Resource = resources::KafkaCluster;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

/// A consumer group reading one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConsumer {
    pub arn: String,
    pub topic: String,
    pub group: String,
    /// Relative (`-100`, `+200`) or timestamp (`@2000-01-02T03:04:05.006Z`)
    /// starting offset. Interpretation is up to the driver.
    pub initial_offset: String,
    #[serde(skip)]
    bound: Bound<resources::KafkaCluster>,
}

impl KafkaConsumer {
    /// The configured topic with the cluster's naming rules applied.
    pub fn topic_name(&self) -> String {
        self.topic_name_for(&self.topic)
    }

    /// The configured group with the cluster's naming rules applied.
    pub fn group_name(&self) -> String {
        self.group_name_for(&self.group)
    }

    pub fn topic_name_for(&self, topic: &str) -> String {
        self.bound.map_or_default(|c| c.topic_name_for(topic))
    }

    pub fn group_name_for(&self, group: &str) -> String {
        self.bound.map_or_default(|c| c.group_name_for(group))
    }
}

impl Bootstrap for KafkaConsumer {
    type Resource = resources::KafkaCluster;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

/// A producer writing one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaProducer {
    pub arn: String,
    pub topic: String,
    #[serde(skip)]
    bound: Bound<resources::KafkaCluster>,
}

impl KafkaProducer {
    pub fn topic_name(&self) -> String {
        self.topic_name_for(&self.topic)
    }

    pub fn topic_name_for(&self, topic: &str) -> String {
        self.bound.map_or_default(|c| c.topic_name_for(topic))
    }
}

impl Bootstrap for KafkaProducer {
    type Resource = resources::KafkaCluster;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}
