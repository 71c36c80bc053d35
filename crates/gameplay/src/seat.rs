use pit_cards::Card;
use pit_cards::Hand;
use pit_core::*;

/// Round-scoped state for one seated player.
///
/// Identity lives with the table coordinator, which keeps accounts
/// parallel to seats; the seat itself only knows the bet, the hand, and
/// the resolution flags. Everything resets at the round boundary.
#[derive(Debug, Clone, Default)]
pub struct Seat {
    bet: Chips,
    hand: Hand,
    stood: bool,
    busted: bool,
}

impl Seat {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn bet(&self) -> Chips {
        self.bet
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn stood(&self) -> bool {
        self.stood
    }
    pub fn busted(&self) -> bool {
        self.busted
    }
    /// A bet of 0 means none was placed this window.
    pub fn has_bet(&self) -> bool {
        self.bet > 0
    }
    /// True once this seat received its opening cards this round.
    /// Mid-round joiners sit out with an empty hand until the next deal.
    pub fn dealt(&self) -> bool {
        self.hand.size() >= 2
    }

    pub fn place(&mut self, amount: Chips) {
        self.bet = amount;
    }
    /// Doubles the bet; the table debits the ledger before calling this.
    pub fn double(&mut self) {
        self.bet *= 2;
    }
    /// Takes one card, recording a bust when the hand goes over.
    pub fn take(&mut self, card: Card) -> u8 {
        self.hand.push(card);
        if self.hand.busted() {
            self.busted = true;
        }
        self.hand.value()
    }
    pub fn stand(&mut self) {
        self.stood = true;
    }
    /// Clears bet, hand, and flags at the round boundary.
    pub fn reset(&mut self) {
        self.bet = 0;
        self.hand.clear();
        self.stood = false;
        self.busted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn fresh_seat_has_no_bet() {
        let seat = Seat::new();
        assert!(!seat.has_bet());
        assert!(!seat.dealt());
    }

    #[test]
    fn take_flags_bust() {
        let mut seat = Seat::new();
        seat.take(card("K"));
        seat.take(card("Q"));
        assert!(!seat.busted());
        assert_eq!(seat.take(card("5")), 25);
        assert!(seat.busted());
    }

    #[test]
    fn double_doubles_once() {
        let mut seat = Seat::new();
        seat.place(100);
        seat.double();
        assert_eq!(seat.bet(), 200);
    }

    #[test]
    fn reset_clears_everything() {
        let mut seat = Seat::new();
        seat.place(100);
        seat.take(card("K"));
        seat.take(card("Q"));
        seat.take(card("5"));
        seat.stand();
        seat.reset();
        assert_eq!(seat.bet(), 0);
        assert_eq!(seat.hand().size(), 0);
        assert!(!seat.stood());
        assert!(!seat.busted());
    }
}
