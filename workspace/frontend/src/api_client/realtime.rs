//! Change-notification subscription against the backend's realtime
//! websocket. Payloads are logged and nothing else: no view consumes them
//! yet, which mirrors the deployed behavior.

use futures::{SinkExt, StreamExt};
use gloo_net::websocket::futures::WebSocket;
use gloo_net::websocket::Message;

use crate::settings;

/// Phoenix drops sockets that stay silent past its idle window, so a
/// heartbeat goes out well inside the default 60 s timeout.
const HEARTBEAT_INTERVAL_MS: u32 = 30_000;

fn join_message() -> String {
    serde_json::json!({
        "topic": "realtime:public",
        "event": "phx_join",
        "payload": {},
        "ref": "1",
    })
    .to_string()
}

fn heartbeat_message() -> String {
    serde_json::json!({
        "topic": "phoenix",
        "event": "heartbeat",
        "payload": {},
        "ref": "0",
    })
    .to_string()
}

/// Open the websocket, join the public-schema changes topic, and log every
/// payload until the socket closes. Fire-and-forget; failures are logged
/// and the app runs on without a feed.
pub fn setup_realtime_subscription() {
    let url = settings::get_settings().realtime_url();

    wasm_bindgen_futures::spawn_local(async move {
        let mut socket = match WebSocket::open(&url) {
            Ok(socket) => socket,
            Err(e) => {
                log::warn!("Realtime subscription unavailable: {e}");
                return;
            }
        };

        if let Err(e) = socket.send(Message::Text(join_message())).await {
            log::warn!("Failed to join realtime channel: {e}");
            return;
        }
        log::info!("Realtime subscription established");

        let (mut sink, mut stream) = socket.split();

        wasm_bindgen_futures::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(HEARTBEAT_INTERVAL_MS).await;
                if sink.send(Message::Text(heartbeat_message())).await.is_err() {
                    log::debug!("Realtime heartbeat stopped, socket is gone");
                    break;
                }
            }
        });

        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(payload)) => log::debug!("Database change: {payload}"),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    log::warn!("Realtime subscription closed: {e}");
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_targets_the_public_changes_topic() {
        let join: serde_json::Value = serde_json::from_str(&join_message()).unwrap();
        assert_eq!(join["topic"], "realtime:public");
        assert_eq!(join["event"], "phx_join");
    }

    #[test]
    fn heartbeat_uses_the_phoenix_control_topic() {
        let heartbeat: serde_json::Value = serde_json::from_str(&heartbeat_message()).unwrap();
        assert_eq!(heartbeat["topic"], "phoenix");
        assert_eq!(heartbeat["event"], "heartbeat");
        // Control frames must never collide with the channel join ref.
        assert_ne!(heartbeat["ref"], serde_json::json!("1"));
    }
}
