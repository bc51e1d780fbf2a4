//! NSQ consumers and producers

use infra_resources::{self as resources, ResourceProvider};
use serde::{Deserialize, Serialize};

use crate::bound::{Bootstrap, Bound};
use crate::error::Result;

/// Longest channel name nsqd accepts.
pub const MAX_CHANNEL_LEN: usize = 64;

/// A subscription to one topic through one channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsqConsumer {
    pub arn: String,
    pub topic: String,
    pub channel: String,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub concurrency: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub requeue_delay: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_requeue_delay: i64,
    #[serde(deserialize_with = "infra_resources::lenient::deserialize")]
    pub max_attempts: i64,
    #[serde(skip)]
    bound: Bound<resources::NsqConsumer>,
}

impl NsqConsumer {
    pub fn topic_name(&self) -> String {
        self.bound.map_or_default(|c| c.topic_name_for(&self.topic))
    }

    pub fn channel_name(&self) -> String {
        self.bound.map_or_default(|c| c.channel_name_for(&self.channel))
    }
}

impl Bootstrap for NsqConsumer {
    type Resource = resources::NsqConsumer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        let (topic, channel) = (&self.topic, &self.channel);
        self.bound.bind_with(provider, &self.arn, |consumer| {
            if topic.is_empty() {
                return Err("no topic configured".to_string());
            }
            if channel.is_empty() {
                return Err("no channel configured".to_string());
            }
            let name = consumer.channel_name_for(channel);
            if name.len() > MAX_CHANNEL_LEN {
                return Err(format!(
                    "channel name must be under {MAX_CHANNEL_LEN} characters total [channel:{name}][size:{}]",
                    name.len()
                ));
            }
            Ok(())
        })?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

/// A publisher on one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NsqProducer {
    pub arn: String,
    pub topic: String,
    #[serde(skip)]
    bound: Bound<resources::NsqProducer>,
}

impl NsqProducer {
    pub fn topic_name(&self) -> String {
        self.bound.map_or_default(|p| p.topic_name_for(&self.topic))
    }
}

impl Bootstrap for NsqProducer {
    type Resource = resources::NsqProducer;

    fn bootstrap(&mut self, provider: &dyn ResourceProvider) -> Result<()> {
        self.bound.bind(provider, &self.arn)?;
        Ok(())
    }

    fn bound(&self) -> &Bound<Self::Resource> {
        &self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::StubProvider;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn provider() -> StubProvider {
        StubProvider::new(json!({
            "messaging": {"nsq": {
                "consumers": {
                    "prefixed": {
                        "lookupd": ["lookupd:4161"],
                        "topic_prefix": "test-sys-",
                        "topic_suffix": "-cmp",
                        "channel_prefix": "test-sys-",
                        "channel_suffix": "-cmp"
                    },
                    "plain": {"nsqd": ["nsqd:4150"]}
                },
                "producers": {
                    "prefixed": {"nsqd": ["nsqd:4150"], "topic_prefix": "test-sys-", "topic_suffix": "-cmp"}
                }
            }}
        }))
    }

    fn consumer(instance: &str, topic: &str, channel: &str) -> NsqConsumer {
        NsqConsumer {
            arn: format!("arn://messaging/nsq/consumers/{instance}"),
            topic: topic.into(),
            channel: channel.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_consumer_names() {
        let mut consumer = consumer("prefixed", "topic-1", "channel-1");
        assert_eq!(consumer.topic_name(), "");

        consumer.bootstrap(&provider()).unwrap();

        assert_eq!(consumer.topic_name(), "test-sys-topic-1-cmp");
        assert_eq!(consumer.channel_name(), "test-sys-channel-1-cmp");
    }

    #[test]
    fn test_consumer_without_affixes() {
        let mut consumer = consumer("plain", "topic-2", "channel-2");
        consumer.bootstrap(&provider()).unwrap();

        assert_eq!(consumer.topic_name(), "topic-2");
        assert_eq!(consumer.channel_name(), "channel-2");
    }

    #[rstest]
    #[case("", "ch", "no topic configured")]
    #[case("t", "", "no channel configured")]
    #[case("t", "cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc", "channel name must be under 64 characters total")]
    fn test_consumer_checks(#[case] topic: &str, #[case] channel: &str, #[case] message: &str) {
        let mut consumer = consumer("prefixed", topic, channel);

        let err = consumer.bootstrap(&provider()).unwrap_err();
        assert!(matches!(err, Error::Invalid { .. }));
        assert!(err.to_string().contains(message), "{err}");
    }

    #[test]
    fn test_channel_at_limit() {
        let mut consumer = consumer("plain", "t", &"c".repeat(MAX_CHANNEL_LEN));
        assert!(consumer.bootstrap(&provider()).is_ok());
    }

    #[test]
    fn test_producer() {
        let mut producer = NsqProducer {
            arn: "arn://messaging/nsq/producers/prefixed".into(),
            topic: "topic-1".into(),
            ..Default::default()
        };
        producer.bootstrap(&provider()).unwrap();

        assert_eq!(producer.topic_name(), "test-sys-topic-1-cmp");
        assert_eq!(producer.bootstrap(&provider()), Err(Error::AlreadyBootstrapped));
    }
}
