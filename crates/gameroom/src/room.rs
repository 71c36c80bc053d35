use super::*;
use pit_core::*;
use pit_gameplay::*;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// One player command routed to a room's inbox.
#[derive(Debug, Clone, Copy)]
pub struct Message {
    pub player: ID<Account>,
    pub command: Command,
}

/// Live blackjack room coordinator.
/// Imperative shell that owns Table (functional core) and handles
/// timing, chip accounting, and player messaging concerns.
///
/// Each room runs as its own task; its table, shoe, and window are
/// mutated only from that task, so rounds are sequential by
/// construction. The ledger is the only shared resource, reached
/// through one atomic update per mutation.
pub struct Room {
    id: ID<Self>,
    table: Table,
    window: Window,
    inbox: UnboundedReceiver<Message>,
    ledger: Arc<dyn Ledger>,
    messenger: Arc<dyn Messenger>,
}

impl Room {
    pub fn new(
        id: ID<Self>,
        inbox: UnboundedReceiver<Message>,
        ledger: Arc<dyn Ledger>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self::with_table(id, Table::new(), inbox, ledger, messenger)
    }
    /// A room over a prepared table; scripted rounds go through here.
    pub fn with_table(
        id: ID<Self>,
        table: Table,
        inbox: UnboundedReceiver<Message>,
        ledger: Arc<dyn Ledger>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            id,
            table,
            window: Window::with_defaults(),
            inbox,
            ledger,
            messenger,
        }
    }
}

impl Room {
    /// Room task body. Sleeps on the inbox and on the betting-window
    /// deadline; whichever fires first drives the next transition. Exits
    /// once the last seat empties, signalling `done` for registry
    /// cleanup.
    pub async fn run(mut self, done: oneshot::Sender<()>) {
        log::info!("[room {}] open", self.id);
        loop {
            let deadline = self.window.deadline();
            tokio::select! {
                message = self.inbox.recv() => match message {
                    Some(message) => self.handle(message).await,
                    None => break,
                },
                _ = Self::until(deadline), if deadline.is_some() => self.expire().await,
            }
            if self.table.is_empty() && self.table.phase() != Phase::Waiting {
                break;
            }
        }
        log::info!("[room {}] closed after {} rounds", self.id, self.table.round());
        let _ = done.send(());
    }
    async fn until(deadline: Option<Instant>) {
        match deadline {
            Some(instant) => tokio::time::sleep_until(instant).await,
            None => std::future::pending().await,
        }
    }
    /// Dispatch outside a round. Bets can complete the table and start
    /// the round early; turn actions have no actor to bind to here.
    async fn handle(&mut self, Message { player, command }: Message) {
        log::debug!("[room {}] <@{}> {:?}", self.id, player, command);
        match command {
            Command::Join => self.join(player).await,
            Command::Leave => {
                if self.leave(player).await {
                    self.play_round().await;
                }
            }
            Command::Bet(amount) => {
                if self.bet(player, amount).await {
                    self.play_round().await;
                }
            }
            Command::Play(_) => {
                self.reject(TableError::WrongPhase(self.table.phase())).await;
            }
            Command::Daily | Command::Balance => {
                log::debug!("[room {}] account command routed upstream", self.id);
            }
        }
    }
    /// Dispatch for messages that arrive during someone's turn.
    async fn interject(&mut self, Message { player, command }: Message) {
        match command {
            Command::Join => self.join(player).await,
            // leaves are rejected mid-round, so this can never complete
            // the betting table
            Command::Leave => {
                self.leave(player).await;
            }
            Command::Bet(_) => self.reject(TableError::BettingClosed).await,
            Command::Play(_) => self.reject(TableError::NotYourTurn).await,
            Command::Daily | Command::Balance => {}
        }
    }
}

/// Seat churn and the betting window.
impl Room {
    async fn join(&mut self, player: ID<Account>) {
        let account = self.ledger.update(player, Patch::new()).await;
        if account.table.is_some_and(|table| table != self.id) {
            return self.reject(TableError::SeatedElsewhere).await;
        }
        match self.table.join(player) {
            Err(error) => self.reject(error).await,
            Ok(position) => {
                log::debug!("[room {}] <@{}> seated at P{}", self.id, player, position);
                self.ledger.update(player, Patch::new().seat(self.id)).await;
                self.broadcast(Event::Joined { player }).await;
                if self.table.occupied() == 1 && !self.window.armed() {
                    self.table.begin_betting();
                    self.broadcast(Event::BetsOpen).await;
                    self.window.arm();
                }
            }
        }
    }
    /// Returns whether the departure left every remaining seat with a
    /// bet, which closes the window and starts the round early.
    async fn leave(&mut self, player: ID<Account>) -> bool {
        match self.table.leave(player) {
            Err(error) => {
                self.reject(error).await;
                false
            }
            Ok(()) => {
                self.ledger.update(player, Patch::new().unseat()).await;
                self.broadcast(Event::Left { player }).await;
                self.table.phase().is_betting() && self.table.all_bets_in()
            }
        }
    }
    /// Places or replaces a bet, debiting the ledger immediately. A
    /// replaced bet refunds the earlier debit in the same atomic update.
    /// Returns whether every seat now has a bet, which closes the window
    /// and starts the round early.
    async fn bet(&mut self, player: ID<Account>, amount: Chips) -> bool {
        let Some(position) = self.table.position(player) else {
            self.reject(TableError::NotSeated).await;
            return false;
        };
        let account = self.account(player).await;
        let refund = self.table.seats()[position].bet();
        if let Err(error) = self.table.bet(position, amount, account.balance + refund) {
            self.reject(error).await;
            return false;
        }
        let patch = Patch::new().credit(refund).debit(amount).absences(0);
        self.ledger.update(player, patch).await;
        self.broadcast(Event::BetPlaced { player, amount }).await;
        self.table.all_bets_in()
    }
    /// Betting window expiry: charge an absence to every seat without a
    /// bet, evict those at the limit, then deal whoever remains.
    async fn expire(&mut self) {
        self.window.cancel();
        log::debug!("[room {}] betting window expired", self.id);
        for (_, player) in self.table.absentees() {
            let absences = self.account(player).await.absences + 1;
            if absences >= MAX_ABSENCES {
                let patch = Patch::new().unseat().absences(0);
                self.ledger.update(player, patch).await;
                if let Some(position) = self.table.position(player) {
                    self.table.remove(position);
                }
                self.broadcast(Event::Evicted { player }).await;
            } else {
                self.ledger.update(player, Patch::new().absences(absences)).await;
            }
        }
        if !self.table.is_empty() {
            self.play_round().await;
        }
    }
}

/// One round, deal to settlement.
impl Room {
    async fn play_round(&mut self) {
        self.window.cancel();
        self.table.deal();
        let upcard = self.table.dealer().cards()[0];
        self.broadcast(Event::DealerShows { card: upcard }).await;
        for position in 0..self.table.occupied() {
            let player = self.table.accounts()[position];
            let hand = self.table.seats()[position].hand().clone();
            let natural = hand.blackjack();
            self.broadcast(Event::Dealt {
                player,
                hand,
                natural,
            })
            .await;
        }
        if self.table.dealer_natural() {
            self.reveal().await;
            self.broadcast(Event::DealerNatural).await;
        } else {
            // seats can grow mid-round; late joiners hold no cards and
            // are skipped below
            let mut position = 0;
            while position < self.table.occupied() {
                self.turn(position).await;
                position += 1;
            }
            self.dealer_turn().await;
        }
        self.settle().await;
        self.conclude().await;
    }
    /// One player's turn: suspend on their next action with a fresh
    /// decision deadline per prompt; the deadline lapsing is an implicit
    /// stand. Naturals and cardless late joiners never act.
    async fn turn(&mut self, position: Position) {
        let player = self.table.accounts()[position];
        let hand = self.table.seats()[position].hand().clone();
        if !self.table.seats()[position].dealt() || hand.value() == BLACKJACK {
            return;
        }
        self.broadcast(Event::TurnStart { player, hand }).await;
        let mut deadline = self.window.decision();
        loop {
            tokio::select! {
                message = self.inbox.recv() => match message {
                    Some(Message { player: sender, command: Command::Play(action) })
                        if sender == player =>
                    {
                        if self.apply(position, player, action).await {
                            break;
                        }
                        deadline = self.window.decision();
                    }
                    Some(message) => self.interject(message).await,
                    None => break,
                },
                _ = tokio::time::sleep_until(deadline) => {
                    self.broadcast(Event::TimedOut).await;
                    self.table.stand(position);
                    break;
                }
            }
        }
    }
    /// Applies one turn action. Returns whether the turn is over.
    async fn apply(&mut self, position: Position, player: ID<Account>, action: Action) -> bool {
        log::debug!("[room {}] P{} plays {}", self.id, position, action.label());
        match action {
            Action::Hit => {
                let (card, value) = self.table.hit(position);
                self.broadcast(Event::Drew { card, value }).await;
                if self.table.seats()[position].busted() {
                    self.broadcast(Event::Busted).await;
                    return true;
                }
                value == BLACKJACK
            }
            Action::Double => {
                let bet = self.table.seats()[position].bet();
                let account = self.account(player).await;
                if account.balance < bet {
                    self.reject(TableError::InsufficientChips).await;
                    return false;
                }
                let account = self.ledger.update(player, Patch::new().debit(bet)).await;
                let (card, value) = self.table.double_down(position);
                self.broadcast(Event::Doubled {
                    player,
                    balance: account.balance,
                })
                .await;
                self.broadcast(Event::Drew { card, value }).await;
                if self.table.seats()[position].busted() {
                    self.broadcast(Event::Busted).await;
                }
                true
            }
            Action::Stand => {
                self.table.stand(position);
                true
            }
        }
    }
    async fn reveal(&mut self) {
        let hand = self.table.dealer().clone();
        self.broadcast(Event::DealerReveal { hand }).await;
    }
    async fn dealer_turn(&mut self) {
        self.reveal().await;
        while Dealer::hits(self.table.dealer()) {
            let card = self.table.dealer_hit();
            self.broadcast(Event::DealerDrew { card }).await;
        }
        let hand = self.table.dealer().clone();
        let value = hand.value();
        self.broadcast(Event::DealerStands { hand, value }).await;
    }
    /// Credits every payout and posts the per-player result lines. Every
    /// outcome commits exactly one update, losses included.
    async fn settle(&mut self) {
        for settlement in self.table.settle() {
            let player = settlement.account;
            let patch = Patch::new().credit(settlement.payout);
            let account = self.ledger.update(player, patch).await;
            self.broadcast(Event::Settled {
                player,
                outcome: settlement.outcome,
                payout: settlement.payout,
                balance: account.balance,
            })
            .await;
        }
    }
    /// Round boundary: reset the table, reshuffle if the shoe is below
    /// its cut, and open the next betting window.
    async fn conclude(&mut self) {
        if self.table.conclude() {
            self.broadcast(Event::Reshuffled).await;
        }
        self.broadcast(Event::BetsOpen).await;
        self.window.arm();
        log::debug!("[room {}] round {} betting open", self.id, self.table.round());
    }
}

impl Room {
    async fn account(&self, player: ID<Account>) -> Account {
        self.ledger.get(player).await.unwrap_or_default()
    }
    async fn broadcast(&self, event: Event) {
        log::trace!("[room {}] {}", self.id, event);
        self.messenger.send(self.id, event.to_string()).await;
    }
    async fn reject(&self, error: TableError) {
        log::debug!("[room {}] rejected: {}", self.id, error);
        self.messenger.send(self.id, error.to_string()).await;
    }
}

impl Unique for Room {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
