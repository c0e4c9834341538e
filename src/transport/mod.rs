//! The `transport` module is responsible for handing messages to a pub/sub
//! delivery mechanism addressed by a topic identifier.
//!
//! It defines the wire payload and frame protocol spoken with the broker,
//! the `Transport` trait the publisher depends on, and a WebSocket client
//! implementation of that trait.

pub mod message;
pub mod websocket;


use crate::utils::error::RelayError;
use message::WireMessage;

/// Receipt returned by a transport once it has accepted a message.
///
/// The delivery id is transport-assigned and used only for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: String,
}

/// An at-least-once pub/sub delivery mechanism addressed by topic.
///
/// The relay never retries a failed publish; retry policy belongs to the
/// transport or to the invoking environment.
pub trait Transport {
    /// Hands one message to the transport for delivery to `topic`.
    async fn publish(
        &mut self,
        topic: &str,
        message: &WireMessage,
    ) -> Result<DeliveryReceipt, RelayError>;
}
