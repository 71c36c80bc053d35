use pit_core::ID;
use pit_gameroom::Account;
use pit_gameroom::Messenger;
use pit_gameroom::Room;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Maps console names to stable identities and back.
///
/// Identities derive from names (uuid v5), so a player keeps the same
/// ledger row across restarts without persisting the roster itself.
#[derive(Default)]
pub struct Roster {
    names: RwLock<HashMap<String, String>>,
}

impl Roster {
    pub async fn player(&self, name: &str) -> ID<Account> {
        self.id("player", name).await.into()
    }
    pub async fn channel(&self, name: &str) -> ID<Room> {
        self.id("channel", name).await.into()
    }
    async fn id(&self, kind: &str, name: &str) -> uuid::Uuid {
        let tag = format!("{}:{}", kind, name);
        let id = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, tag.as_bytes());
        let mut names = self.names.write().await;
        names.insert(id.to_string(), name.to_string());
        id
    }
    pub async fn label(&self, id: &str) -> String {
        let names = self.names.read().await;
        names.get(id).cloned().unwrap_or_else(|| id.to_string())
    }
    /// Rewrites `<@uuid>` mentions into `@name`; unknown mentions pass
    /// through untouched.
    pub async fn render(&self, text: &str) -> String {
        let names = self.names.read().await;
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find("<@") {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            match tail.find('>') {
                Some(end) => {
                    let id = &tail[..end];
                    match names.get(id) {
                        Some(name) => {
                            out.push('@');
                            out.push_str(name);
                        }
                        None => {
                            out.push_str("<@");
                            out.push_str(id);
                            out.push('>');
                        }
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Messenger that prints each room's chat lines to the console, with
/// mentions resolved through the roster.
pub struct ConsoleMessenger {
    roster: Arc<Roster>,
}

impl ConsoleMessenger {
    pub fn new(roster: Arc<Roster>) -> Self {
        Self { roster }
    }
}

#[async_trait::async_trait]
impl Messenger for ConsoleMessenger {
    async fn send(&self, channel: ID<Room>, text: String) {
        let label = self.roster.label(&channel.to_string()).await;
        println!("[#{}] {}", label, self.roster.render(&text).await);
    }
}
