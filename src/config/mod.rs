mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{RelaySettings, Settings, TransportSettings};


/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the relay and transport configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        relay: RelaySettings {
            topic: partial
                .relay
                .as_ref()
                .and_then(|r| r.topic.clone())
                .unwrap_or(default.relay.topic),
        },
        transport: TransportSettings {
            url: partial
                .transport
                .as_ref()
                .and_then(|t| t.url.clone())
                .unwrap_or(default.transport.url),
        },
    })
}
