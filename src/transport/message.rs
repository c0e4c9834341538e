use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Payload handed to the transport for delivery to a topic.
///
/// `attributes` carries typed out-of-band metadata that subscriptions can
/// filter on; it is omitted from the wire JSON when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub subject: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, AttributeValue>,
}

impl WireMessage {
    pub fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

/// A typed attribute value. Only string attributes are produced today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            kind: "String".to_string(),
            value: value.into(),
        }
    }
}

/// Body of a delivered record as the consumer sees it.
///
/// The transport re-frames published payloads into this envelope before
/// handing them to the consumer, so record bodies carry capitalized
/// `Subject`/`Message` keys regardless of the publish-side payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryBody {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl From<WireMessage> for DeliveryBody {
    fn from(wire: WireMessage) -> Self {
        Self {
            subject: wire.subject,
            message: wire.message,
        }
    }
}

/// Frames sent from the relay to the broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientFrame {
    #[serde(rename = "subscribe")]
    Subscribe { topic: String },

    #[serde(rename = "publish")]
    Publish {
        topic: String,
        payload: String,
        timestamp: i64,
        message_id: String,
    },
}

/// Frame delivered by the broker to a subscribed connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveredFrame {
    pub topic: String,
    pub payload: String,
    pub timestamp: i64,
}
