use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the relay itself and for the transport connection.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub relay: RelaySettings,
    pub transport: TransportSettings,
}

/// Configuration settings for the relay.
///
/// The topic identifier addresses the pub/sub destination. It has no usable
/// default; an empty value is treated as missing and rejected at the
/// publisher boundary.
#[derive(Debug, Deserialize, Clone)]
pub struct RelaySettings {
    pub topic: String,
}

/// Configuration settings for the transport.
///
/// Defines the broker URL the WebSocket client connects to.
#[derive(Debug, Deserialize, Clone)]
pub struct TransportSettings {
    pub url: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub relay: Option<PartialRelaySettings>,
    pub transport: Option<PartialTransportSettings>,
}

/// Partial relay settings.
#[derive(Debug, Deserialize)]
pub struct PartialRelaySettings {
    pub topic: Option<String>,
}

/// Partial transport settings.
#[derive(Debug, Deserialize)]
pub struct PartialTransportSettings {
    pub url: Option<String>,
}

/// Provides default values for `Settings`.
///
/// The transport URL points at a local broker; the topic stays empty until
/// the environment supplies one.
impl Default for Settings {
    fn default() -> Self {
        Self {
            relay: RelaySettings {
                topic: String::new(),
            },
            transport: TransportSettings {
                url: "ws://127.0.0.1:8080".to_string(),
            },
        }
    }
}
