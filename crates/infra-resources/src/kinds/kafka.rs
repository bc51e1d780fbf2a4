use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::naming::NameRule;
use crate::resource::{Definition, Resource, resource_accessors};

/// Kafka cluster with optional SASL credentials and topic/group naming rules.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KafkaCluster {
    #[serde(flatten)]
    pub resource: Resource,
    pub brokers: Vec<String>,
    pub username: String,
    pub password: String,
    pub topic_prefix: String,
    pub topic_suffix: String,
    pub group_prefix: String,
    pub group_suffix: String,
    /// Exact topic renames; a hit bypasses prefix and suffix.
    pub topic_translation: BTreeMap<String, String>,
}

impl KafkaCluster {
    pub fn topic_name_for(&self, topic: &str) -> String {
        NameRule::new(&self.topic_prefix, &self.topic_suffix)
            .with_translation(&self.topic_translation)
            .apply(topic)
    }

    pub fn group_name_for(&self, group: &str) -> String {
        NameRule::new(&self.group_prefix, &self.group_suffix).apply(group)
    }
}

impl Definition for KafkaCluster {
    const KIND: &'static str = "kafka cluster";
    const PATH: &'static [&'static str] = &["messaging", "kafka", "clusters"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.kafka.clusters
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.brokers.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "kafka brokers can not be empty"));
        }
        Ok(())
    }
}
