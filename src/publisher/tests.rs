use super::{LABEL_ATTRIBUTE, LABELS, publish_fixed, publish_labeled};
use crate::config::{RelaySettings, Settings, TransportSettings};
use crate::sink::MemorySink;
use crate::transport::message::WireMessage;
use crate::transport::{DeliveryReceipt, Transport};
use crate::utils::error::RelayError;

#[derive(Default)]
struct RecordingTransport {
    published: Vec<(String, WireMessage)>,
    fail: bool,
}

impl Transport for RecordingTransport {
    async fn publish(
        &mut self,
        topic: &str,
        message: &WireMessage,
    ) -> Result<DeliveryReceipt, RelayError> {
        if self.fail {
            return Err(RelayError::Transport("broker unavailable".to_string()));
        }
        self.published.push((topic.to_string(), message.clone()));
        Ok(DeliveryReceipt {
            message_id: format!("delivery-{}", self.published.len()),
        })
    }
}

fn settings_with_topic(topic: &str) -> Settings {
    Settings {
        relay: RelaySettings {
            topic: topic.to_string(),
        },
        transport: TransportSettings {
            url: "ws://127.0.0.1:8080".to_string(),
        },
    }
}

#[tokio::test]
async fn missing_topic_fails_without_contacting_transport() {
    let settings = settings_with_topic("");
    let mut transport = RecordingTransport::default();
    let sink = MemorySink::new();

    let response = publish_fixed(&settings, &mut transport, &sink).await;

    assert_eq!(response.status, 500);
    assert_eq!(response.error.as_deref(), Some("Topic identifier missing"));
    assert!(transport.published.is_empty());
    assert!(sink.contains("topic identifier is not set"));
}

#[tokio::test]
async fn fixed_publish_sends_exactly_one_payload() {
    let settings = settings_with_topic("notifications");
    let mut transport = RecordingTransport::default();
    let sink = MemorySink::new();

    let response = publish_fixed(&settings, &mut transport, &sink).await;

    assert_eq!(response.status, 200);
    assert_eq!(transport.published.len(), 1);

    let (topic, message) = &transport.published[0];
    assert_eq!(topic, "notifications");
    assert!(!message.subject.is_empty());
    assert!(message.attributes.is_empty());
    assert_eq!(
        response.body.expect("success body").message,
        "Published message to topic successfully"
    );
}

#[tokio::test]
async fn labeled_publish_echoes_the_chosen_label() {
    let settings = settings_with_topic("notifications");
    let mut transport = RecordingTransport::default();
    let sink = MemorySink::new();

    let response = publish_labeled(&settings, &mut transport, &sink).await;

    assert_eq!(response.status, 200);
    assert_eq!(transport.published.len(), 1);

    let (_, message) = &transport.published[0];
    assert!(!message.subject.is_empty());
    assert!(LABELS.contains(&message.message.as_str()));

    let attribute = message
        .attributes
        .get(LABEL_ATTRIBUTE)
        .expect("label attribute");
    assert_eq!(attribute.kind, "String");
    assert_eq!(attribute.value, message.message);

    // The confirmation mentions exactly the label that went out on the wire.
    let confirmation = response.body.expect("success body").message;
    let mentioned: Vec<&str> = LABELS
        .iter()
        .copied()
        .filter(|label| confirmation.contains(label))
        .collect();
    assert_eq!(mentioned, vec![message.message.as_str()]);
}

#[tokio::test]
async fn labeled_publish_stays_within_the_fixed_label_set() {
    let settings = settings_with_topic("notifications");
    let mut transport = RecordingTransport::default();
    let sink = MemorySink::new();

    for _ in 0..20 {
        publish_labeled(&settings, &mut transport, &sink).await;
    }

    for (_, message) in &transport.published {
        assert!(LABELS.contains(&message.message.as_str()));
    }
}

#[tokio::test]
async fn transport_failure_surfaces_as_error_response() {
    let settings = settings_with_topic("notifications");
    let mut transport = RecordingTransport {
        fail: true,
        ..Default::default()
    };
    let sink = MemorySink::new();

    let response = publish_labeled(&settings, &mut transport, &sink).await;

    assert_eq!(response.status, 500);
    assert!(
        response
            .error
            .expect("error text")
            .contains("broker unavailable")
    );
    assert!(sink.contains("publish failed"));
}
