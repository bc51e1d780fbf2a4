use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::ResourceError;
use crate::naming::NameRule;
use crate::resource::{Definition, Resource, resource_accessors};

/// NSQ publisher endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NsqProducer {
    #[serde(flatten)]
    pub resource: Resource,
    pub nsqd: Vec<String>,
    pub topic_prefix: String,
    pub topic_suffix: String,
}

impl NsqProducer {
    pub fn topic_name_for(&self, topic: &str) -> String {
        NameRule::new(&self.topic_prefix, &self.topic_suffix).apply(topic)
    }
}

impl Definition for NsqProducer {
    const KIND: &'static str = "nsq producer";
    const PATH: &'static [&'static str] = &["messaging", "nsq", "producers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.nsq.producers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.nsqd.is_empty() {
            return Err(ResourceError::invalid(Self::KIND, "no nsqd endpoints configured"));
        }
        Ok(())
    }
}

/// NSQ subscriber endpoints, reached directly or through lookupd.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NsqConsumer {
    #[serde(flatten)]
    pub resource: Resource,
    pub nsqd: Vec<String>,
    pub lookupd: Vec<String>,
    pub topic_prefix: String,
    pub topic_suffix: String,
    pub channel_prefix: String,
    pub channel_suffix: String,
}

impl NsqConsumer {
    pub fn topic_name_for(&self, topic: &str) -> String {
        NameRule::new(&self.topic_prefix, &self.topic_suffix).apply(topic)
    }

    pub fn channel_name_for(&self, channel: &str) -> String {
        NameRule::new(&self.channel_prefix, &self.channel_suffix).apply(channel)
    }
}

impl Definition for NsqConsumer {
    const KIND: &'static str = "nsq consumer";
    const PATH: &'static [&'static str] = &["messaging", "nsq", "consumers"];

    resource_accessors!();

    fn entries(catalog: &Catalog) -> &BTreeMap<String, Self> {
        &catalog.messaging.nsq.consumers
    }

    fn check(&self) -> Result<(), ResourceError> {
        if self.nsqd.is_empty() && self.lookupd.is_empty() {
            return Err(ResourceError::invalid(
                Self::KIND,
                "no nsqd or lookupd endpoints configured",
            ));
        }
        Ok(())
    }
}
