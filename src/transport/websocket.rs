//! WebSocket transport client.
//!
//! This file implements the client side of the broker protocol:
//! - Connect to the broker and subscribe the connection to a topic
//! - Serialize relay messages into `publish` frames, stamping each with a
//!   delivery id and a millisecond timestamp
//! - Collect delivered frames into a batch of consumer records

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Duration, timeout};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tungstenite::protocol::Message as WsMessage;
use uuid::Uuid;

use crate::consumer::{Batch, Record};
use crate::transport::message::{ClientFrame, DeliveredFrame, DeliveryBody, WireMessage};
use crate::transport::{DeliveryReceipt, Transport};
use crate::utils::error::RelayError;

/// Client connection to a WebSocket broker.
pub struct WebSocketTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketTransport {
    /// Connects to the broker at `url`.
    pub async fn connect(url: &str) -> Result<Self, RelayError> {
        let (stream, _response) = connect_async(url).await?;
        Ok(Self { stream })
    }

    /// Subscribes this connection to `topic`.
    pub async fn subscribe(&mut self, topic: &str) -> Result<(), RelayError> {
        self.send_frame(&ClientFrame::Subscribe {
            topic: topic.to_string(),
        })
        .await
    }

    /// Collects delivered messages into a batch.
    ///
    /// Reads frames until the connection stays quiet for `wait`. Delivery
    /// order within the batch is whatever the broker produced.
    pub async fn drain(&mut self, wait: Duration) -> Result<Batch, RelayError> {
        let mut records = Vec::new();

        while let Ok(Some(next)) = timeout(wait, self.stream.next()).await {
            let msg = next?;
            if !msg.is_text() {
                continue;
            }
            let text = msg.to_text()?;
            match serde_json::from_str::<DeliveredFrame>(text) {
                Ok(frame) => records.push(Record {
                    body: delivery_body(&frame.payload)?,
                }),
                Err(err) => {
                    tracing::warn!("ignoring unexpected frame: {err}");
                }
            }
        }

        Ok(Batch { records })
    }

    async fn send_frame(&mut self, frame: &ClientFrame) -> Result<(), RelayError> {
        let text =
            serde_json::to_string(frame).map_err(|e| RelayError::Transport(e.to_string()))?;
        self.stream.send(WsMessage::text(text)).await?;
        Ok(())
    }
}

/// Re-frames a published payload into the delivery envelope.
///
/// Payloads that are not relay wire messages pass through untouched; their
/// shape is the publisher's business, not ours.
fn delivery_body(payload: &str) -> Result<String, RelayError> {
    match serde_json::from_str::<WireMessage>(payload) {
        Ok(wire) => serde_json::to_string(&DeliveryBody::from(wire))
            .map_err(|e| RelayError::Transport(e.to_string())),
        Err(_) => Ok(payload.to_string()),
    }
}

impl Transport for WebSocketTransport {
    async fn publish(
        &mut self,
        topic: &str,
        message: &WireMessage,
    ) -> Result<DeliveryReceipt, RelayError> {
        let payload =
            serde_json::to_string(message).map_err(|e| RelayError::Transport(e.to_string()))?;
        let message_id = Uuid::new_v4().to_string();

        self.send_frame(&ClientFrame::Publish {
            topic: topic.to_string(),
            payload,
            timestamp: Utc::now().timestamp_millis(),
            message_id: message_id.clone(),
        })
        .await?;

        Ok(DeliveryReceipt { message_id })
    }
}
