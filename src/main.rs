use std::time::Duration;

use tracing::{error, info};

use relaypub::config::load_config;
use relaypub::sink::{self, TracingSink};
use relaypub::transport::websocket::WebSocketTransport;
use relaypub::{consumer, publisher};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    sink::logging::init("info");

    let settings = load_config().expect("Failed to load configuration");
    if settings.relay.topic.is_empty() {
        error!("Topic identifier missing; set RELAY_TOPIC");
        return;
    }

    let sink = TracingSink;

    let mut transport = match WebSocketTransport::connect(&settings.transport.url).await {
        Ok(transport) => transport,
        Err(err) => {
            error!("Failed to connect to broker: {err}");
            return;
        }
    };

    if let Err(err) = transport.subscribe(&settings.relay.topic).await {
        error!("Failed to subscribe to {}: {err}", settings.relay.topic);
        return;
    }

    let response = publisher::publish_labeled(&settings, &mut transport, &sink).await;
    info!("publisher response: {response:?}");
    if !response.is_success() {
        return;
    }

    match transport.drain(Duration::from_millis(500)).await {
        Ok(batch) => {
            let response = consumer::handle(&batch, &sink);
            info!("consumer response: {response:?}");
        }
        Err(err) => error!("Failed to drain delivered messages: {err}"),
    }
}
