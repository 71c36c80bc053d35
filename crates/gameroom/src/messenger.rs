use super::*;
use pit_core::*;

/// Outbound delivery seam to the chat platform.
///
/// Fire-and-forget: the core posts a line after every state-changing
/// event and never waits on acknowledgement. Implementations bridge to
/// whatever transport the platform uses.
#[async_trait::async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, channel: ID<Room>, text: String);
}

/// Messenger that drops everything; useful for headless simulations.
#[derive(Debug, Default)]
pub struct SilentMessenger;

#[async_trait::async_trait]
impl Messenger for SilentMessenger {
    async fn send(&self, channel: ID<Room>, text: String) {
        log::trace!("[{}] {}", channel, text);
    }
}

/// Messenger that records every line; the test double for room flows.
#[derive(Debug, Default)]
pub struct RecordingMessenger(tokio::sync::Mutex<Vec<String>>);

impl RecordingMessenger {
    pub async fn lines(&self) -> Vec<String> {
        self.0.lock().await.clone()
    }
    pub async fn contains(&self, needle: &str) -> bool {
        self.0.lock().await.iter().any(|line| line.contains(needle))
    }
}

#[async_trait::async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, _: ID<Room>, text: String) {
        self.0.lock().await.push(text);
    }
}
