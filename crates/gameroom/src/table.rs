use super::*;
use pit_cards::Card;
use pit_cards::Hand;
use pit_cards::Shoe;
use pit_core::*;
use pit_gameplay::*;

/// One player's computed payout at the end of a round.
/// The room commits each of these to the ledger as a single update.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub position: Position,
    pub account: ID<Account>,
    pub outcome: Outcome,
    pub bet: Chips,
    pub payout: Chips,
}

/// Functional core for one blackjack table.
///
/// Owns the shoe, the seated players, the dealer hand, and the phase;
/// every method is a synchronous state transition. Timing, messaging,
/// and chip accounting live in [`Room`], which drives this type. Seats
/// and accounts are parallel vectors indexed by [`Position`]; seating
/// order is turn order.
#[derive(Debug)]
pub struct Table {
    shoe: Shoe,
    seats: Vec<Seat>,
    accounts: Vec<ID<Account>>,
    dealer: Hand,
    phase: Phase,
    round: u64,
}

impl Table {
    pub fn new() -> Self {
        Self::with_shoe(Shoe::new())
    }
    /// A table dealing from a prepared shoe; scripted rounds in
    /// simulations and tests go through here.
    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            seats: Vec::new(),
            accounts: Vec::new(),
            dealer: Hand::empty(),
            phase: Phase::Waiting,
            round: 0,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round(&self) -> u64 {
        self.round
    }
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn accounts(&self) -> &[ID<Account>] {
        &self.accounts
    }
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }
    pub fn occupied(&self) -> usize {
        self.seats.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
    /// Seat index of a player, if they are at this table.
    pub fn position(&self, id: ID<Account>) -> Option<Position> {
        self.accounts.iter().position(|a| *a == id)
    }
}

/// Seat churn: joins, leaves, evictions.
impl Table {
    /// Seats a player at the next free position. Permitted in any phase;
    /// mid-round joiners hold an empty hand and sit out until the next
    /// deal.
    pub fn join(&mut self, id: ID<Account>) -> Result<Position, TableError> {
        if self.position(id).is_some() {
            return Err(TableError::AlreadySeated);
        }
        if self.seats.len() >= SEATS {
            return Err(TableError::TableFull);
        }
        self.seats.push(Seat::new());
        self.accounts.push(id);
        Ok(self.seats.len() - 1)
    }
    /// Voluntary departure; rejected while a hand is in flight so that
    /// turn order stays stable from deal to settlement.
    pub fn leave(&mut self, id: ID<Account>) -> Result<(), TableError> {
        let position = self.position(id).ok_or(TableError::NotSeated)?;
        if self.phase.in_round() {
            return Err(TableError::HandInProgress);
        }
        self.remove(position);
        Ok(())
    }
    /// Unseats by position; the eviction path at window expiry.
    pub fn remove(&mut self, position: Position) -> ID<Account> {
        self.seats.remove(position);
        self.accounts.remove(position)
    }
    /// Seated players who placed no bet this window, for absence
    /// accounting. Positions are returned in seating order.
    pub fn absentees(&self) -> Vec<(Position, ID<Account>)> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| !seat.has_bet())
            .map(|(position, _)| (position, self.accounts[position]))
            .collect()
    }
}

/// Phase transitions and the betting window.
impl Table {
    /// waiting -> betting, on the first join. The table never returns to
    /// waiting: an emptied table is destroyed by its owner instead.
    pub fn begin_betting(&mut self) {
        self.phase = Phase::Betting;
    }
    /// Accepts a bet during the betting phase. The caller supplies the
    /// player's current balance so the debit can be validated without the
    /// table touching the ledger.
    pub fn bet(
        &mut self,
        position: Position,
        amount: Chips,
        balance: Chips,
    ) -> Result<(), TableError> {
        if !self.phase.is_betting() {
            return Err(TableError::BettingClosed);
        }
        if !(MIN_BET..=MAX_BET).contains(&amount) {
            return Err(TableError::BetOutOfRange(amount));
        }
        if amount > balance {
            return Err(TableError::InsufficientChips);
        }
        self.seats[position].place(amount);
        Ok(())
    }
    /// True once every seated player has a nonzero bet; this cancels the
    /// window and starts the round early.
    pub fn all_bets_in(&self) -> bool {
        !self.seats.is_empty() && self.seats.iter().all(Seat::has_bet)
    }
}

/// The deal and player turns.
impl Table {
    /// betting -> playing. Two passes around the table, dealer last in
    /// each pass, exactly as the cards come off a live shoe.
    pub fn deal(&mut self) {
        self.phase = Phase::Playing;
        for _ in 0..2 {
            for seat in self.seats.iter_mut() {
                seat.take(self.shoe.draw());
            }
            self.dealer.push(self.shoe.draw());
        }
    }
    /// Dealer natural check, made before any player turn.
    pub fn dealer_natural(&self) -> bool {
        self.dealer.blackjack()
    }
    /// One card to the acting player.
    pub fn hit(&mut self, position: Position) -> (Card, u8) {
        let card = self.shoe.draw();
        let value = self.seats[position].take(card);
        (card, value)
    }
    /// Doubles the bet and draws exactly one card. The room debits the
    /// ledger before calling this.
    pub fn double_down(&mut self, position: Position) -> (Card, u8) {
        self.seats[position].double();
        self.hit(position)
    }
    pub fn stand(&mut self, position: Position) {
        self.seats[position].stand();
    }
    /// One card to the dealer under the house policy.
    pub fn dealer_hit(&mut self) -> Card {
        let card = self.shoe.draw();
        self.dealer.push(card);
        card
    }
}

/// Settlement and the round boundary.
impl Table {
    /// playing -> settling. Judges every seat against the dealer's final
    /// hand; commits nothing.
    pub fn settle(&mut self) -> Vec<Settlement> {
        self.phase = Phase::Settling;
        self.seats
            .iter()
            .enumerate()
            .map(|(position, seat)| {
                let outcome = Outcome::judge(seat, &self.dealer);
                Settlement {
                    position,
                    account: self.accounts[position],
                    outcome,
                    bet: seat.bet(),
                    payout: outcome.payout(seat.bet()),
                }
            })
            .collect()
    }
    /// settling -> betting. Clears round state, bumps the round counter,
    /// and reshuffles if the shoe fell below its cut. Returns whether a
    /// reshuffle happened; this round boundary is the only place the cut
    /// is checked.
    pub fn conclude(&mut self) -> bool {
        for seat in self.seats.iter_mut() {
            seat.reset();
        }
        self.dealer.clear();
        self.round += 1;
        self.phase = Phase::Betting;
        match self.shoe.below_cut() {
            true => {
                self.shoe.reshuffle();
                true
            }
            false => false,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
