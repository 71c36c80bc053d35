use super::*;
use pit_core::ID;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Channel registry mapping chat channels to live rooms.
///
/// Rooms are created on a channel's first `join` and reaped once their
/// table empties; the registry itself holds no game state. Account
/// commands (`daily`, `balance`) resolve here, independent of any
/// table.
pub struct Lobby {
    ledger: Arc<dyn Ledger>,
    messenger: Arc<dyn Messenger>,
    cashier: Cashier,
    rooms: RwLock<HashMap<ID<Room>, UnboundedSender<Message>>>,
}

impl Lobby {
    pub fn new(ledger: Arc<dyn Ledger>, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            cashier: Cashier::new(ledger.clone()),
            ledger,
            messenger,
            rooms: RwLock::new(HashMap::new()),
        }
    }
    pub async fn occupancy(&self) -> usize {
        self.rooms.read().await.len()
    }
}

impl Lobby {
    /// Routes one decoded command from a player in a channel. `join`
    /// opens the channel's room if none is live; other table commands
    /// require one. `daily` and `balance` never touch a room.
    pub async fn deliver(self: &Arc<Self>, channel: ID<Room>, player: ID<Account>, command: Command) {
        log::trace!("[lobby] <@{}> in {}: {:?}", player, channel, command);
        match command {
            Command::Daily => self.daily(channel, player).await,
            Command::Balance => self.balance(channel, player).await,
            Command::Join => {
                let message = Message { player, command };
                if self.open(channel).await.send(message).is_err() {
                    // the room emptied and exited before the reaper ran;
                    // replace it and reseat
                    self.close(channel).await;
                    let _ = self.open(channel).await.send(message);
                }
            }
            command => {
                let message = Message { player, command };
                match self.rooms.read().await.get(&channel) {
                    Some(tx) if tx.send(message).is_ok() => {}
                    _ => {
                        let text = TableError::NoTable.to_string();
                        self.messenger.send(channel, text).await;
                    }
                }
            }
        }
    }
    /// Returns the channel's live room sender, spawning the room task
    /// and its reaper on first use.
    async fn open(self: &Arc<Self>, channel: ID<Room>) -> UnboundedSender<Message> {
        let mut rooms = self.rooms.write().await;
        if let Some(tx) = rooms.get(&channel) {
            return tx.clone();
        }
        let (tx, rx) = unbounded_channel();
        let (done_tx, done_rx) = oneshot::channel();
        let room = Room::new(channel, rx, self.ledger.clone(), self.messenger.clone());
        tokio::spawn(room.run(done_tx));
        rooms.insert(channel, tx.clone());
        let lobby = self.clone();
        tokio::spawn(async move {
            let _ = done_rx.await;
            lobby.close(channel).await;
            log::info!("[lobby] room {} cleaned up", channel);
        });
        log::debug!("[lobby] opened room {}", channel);
        tx
    }
    async fn close(&self, channel: ID<Room>) {
        self.rooms.write().await.remove(&channel);
    }
    async fn daily(&self, channel: ID<Room>, player: ID<Account>) {
        let text = match self.cashier.daily(player).await {
            Ok(balance) => format!("1,000 chips added! New balance: {}", balance),
            Err(_) => "Come back later for your daily chips!".to_string(),
        };
        self.messenger.send(channel, text).await;
    }
    async fn balance(&self, channel: ID<Room>, player: ID<Account>) {
        let balance = self.cashier.balance(player).await;
        let text = format!("Current balance: {} chips", balance);
        self.messenger.send(channel, text).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn lobby() -> (Arc<Lobby>, Arc<MemoryLedger>, Arc<RecordingMessenger>) {
        let ledger = Arc::new(MemoryLedger::default());
        let chat = Arc::new(RecordingMessenger::default());
        let lobby = Arc::new(Lobby::new(ledger.clone(), chat.clone()));
        (lobby, ledger, chat)
    }

    #[tokio::test(start_paused = true)]
    async fn join_opens_a_room_per_channel() {
        let (lobby, _, _) = lobby();
        let channel = ID::default();
        let player = ID::default();
        lobby.deliver(channel, player, Command::Join).await;
        lobby.deliver(ID::default(), ID::default(), Command::Join).await;
        assert_eq!(lobby.occupancy().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_room_is_reaped() {
        let (lobby, _, _) = lobby();
        let channel = ID::default();
        let player = ID::default();
        lobby.deliver(channel, player, Command::Join).await;
        lobby.deliver(channel, player, Command::Leave).await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(lobby.occupancy().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn table_commands_need_a_room() {
        let (lobby, _, chat) = lobby();
        lobby.deliver(ID::default(), ID::default(), Command::Bet(100)).await;
        assert!(chat.contains("No table in this channel").await);
        assert_eq!(lobby.occupancy().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn daily_works_without_a_table() {
        let (lobby, ledger, chat) = lobby();
        let channel = ID::default();
        let player = ID::default();
        lobby.deliver(channel, player, Command::Daily).await;
        assert!(chat.contains("1,000 chips added! New balance: 11000").await);
        assert_eq!(ledger.get(player).await.unwrap().balance, 11_000);
        lobby.deliver(channel, player, Command::Daily).await;
        assert!(chat.contains("Come back later for your daily chips!").await);
        assert_eq!(ledger.get(player).await.unwrap().balance, 11_000);
    }

    #[tokio::test(start_paused = true)]
    async fn balance_reads_without_creating_a_row() {
        let (lobby, ledger, chat) = lobby();
        let player = ID::default();
        lobby.deliver(ID::default(), player, Command::Balance).await;
        assert!(chat.contains("Current balance: 10000 chips").await);
        assert_eq!(ledger.get(player).await, None);
    }
}
