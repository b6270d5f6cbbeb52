//! Online-presence notification
//!
//! After login the client opens a Socket.IO connection to the backend and
//! emits `user_online` with the user id, once. The returned handle may be
//! awaited (e.g. before a short-lived process exits) or dropped; delivery
//! failures are logged and never surfaced.

use rust_socketio::asynchronous::ClientBuilder;
use serde_json::json;
use tokio::task::JoinHandle;

pub const USER_ONLINE_EVENT: &str = "user_online";

async fn emit_online(server_url: &str, user_id: &str) -> Result<(), rust_socketio::Error> {
    let socket = ClientBuilder::new(server_url)
        .namespace("/")
        .connect()
        .await?;
    socket.emit(USER_ONLINE_EVENT, json!(user_id)).await?;
    socket.disconnect().await
}

/// Spawn the presence event in the background.
pub fn announce(server_url: String, user_id: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        match emit_online(&server_url, &user_id).await {
            Ok(()) => tracing::debug!(user_id = %user_id, "Presence announced"),
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Presence event not delivered")
            }
        }
    })
}
