//! The `publisher` module builds message payloads and hands them to a
//! transport for delivery to the configured topic.
//!
//! Two variants exist: a fixed subject/body pair, and an attributed variant
//! that picks one category label at random and attaches it as a typed string
//! attribute so subscriptions can filter on it. Both enforce the same
//! precondition: without a topic identifier the transport is never contacted.

#[cfg(test)]
mod tests;

use rand::Rng;

use crate::config::Settings;
use crate::sink::EventSink;
use crate::transport::Transport;
use crate::transport::message::{AttributeValue, WireMessage};
use crate::utils::error::RelayError;
use crate::utils::response::Response;

/// Category labels the attributed variant chooses from.
pub const LABELS: [&str; 3] = ["Apple", "Banana", "Mango"];

/// Attribute key carrying the chosen label.
pub const LABEL_ATTRIBUTE: &str = "Fruit";

const FIXED_SUBJECT: &str = "Test Subject";
const FIXED_MESSAGE: &str = "Message from relay publisher";

/// Publishes the fixed subject/body pair to the configured topic.
pub async fn publish_fixed<T: Transport>(
    settings: &Settings,
    transport: &mut T,
    sink: &dyn EventSink,
) -> Response {
    let message = WireMessage::new(FIXED_SUBJECT, FIXED_MESSAGE);
    dispatch(settings, transport, sink, message, None).await
}

/// Publishes a randomly chosen label, carried both as the message body and
/// as a string attribute under [`LABEL_ATTRIBUTE`].
pub async fn publish_labeled<T: Transport>(
    settings: &Settings,
    transport: &mut T,
    sink: &dyn EventSink,
) -> Response {
    let label = LABELS[rand::thread_rng().gen_range(0..LABELS.len())];
    let message = WireMessage::new(FIXED_SUBJECT, label)
        .with_attribute(LABEL_ATTRIBUTE, AttributeValue::string(label));
    dispatch(settings, transport, sink, message, Some(label)).await
}

async fn dispatch<T: Transport>(
    settings: &Settings,
    transport: &mut T,
    sink: &dyn EventSink,
    message: WireMessage,
    label: Option<&str>,
) -> Response {
    let topic = match configured_topic(settings) {
        Ok(topic) => topic,
        Err(err) => {
            sink.error("topic identifier is not set");
            return Response::error(err.to_string());
        }
    };

    match label {
        Some(label) => sink.info(&format!(
            "publishing message to topic {topic} with label {label}"
        )),
        None => sink.info(&format!("publishing message to topic {topic}")),
    }

    match transport.publish(topic, &message).await {
        Ok(receipt) => {
            sink.info(&format!(
                "delivered message {} to the topic",
                receipt.message_id
            ));
            match label {
                Some(label) => Response::ok(format!(
                    "Published message to topic successfully with label {label}"
                )),
                None => Response::ok("Published message to topic successfully"),
            }
        }
        Err(err) => {
            sink.error(&format!("publish failed: {err}"));
            Response::error(err.to_string())
        }
    }
}

/// Topic precondition: the identifier must be present and non-empty before
/// the transport is contacted.
fn configured_topic(settings: &Settings) -> Result<&str, RelayError> {
    let topic = settings.relay.topic.trim();
    if topic.is_empty() {
        return Err(RelayError::Configuration(
            "Topic identifier missing".to_string(),
        ));
    }
    Ok(topic)
}
