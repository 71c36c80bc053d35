use super::seat::Seat;
use pit_cards::Hand;
use pit_core::*;

/// Settlement result of one seat against the dealer's final hand.
///
/// Variants are listed in rule priority order: a bust loses even when the
/// dealer also busts, and a natural only earns its premium when the dealer
/// does not hold one too (two naturals compare equal and push).
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Outcome {
    Bust,
    Blackjack,
    Win,
    Push,
    Loss,
}

impl Outcome {
    /// Judges a resolved seat against the dealer's final hand.
    pub fn judge(seat: &Seat, dealer: &Hand) -> Self {
        let value = seat.hand().value();
        let house = dealer.value();
        if seat.busted() {
            Self::Bust
        } else if seat.hand().blackjack() && !dealer.blackjack() {
            Self::Blackjack
        } else if house > BLACKJACK || value > house {
            Self::Win
        } else if value == house {
            Self::Push
        } else {
            Self::Loss
        }
    }
    /// Chips credited back to the player against a bet debited up front:
    /// 2.5x for a natural (net +1.5x), 2x for a win (even money), the bet
    /// itself for a push, nothing otherwise.
    pub fn payout(&self, bet: Chips) -> Chips {
        match self {
            Self::Bust | Self::Loss => 0,
            Self::Blackjack => bet * 5 / 2,
            Self::Win => bet * 2,
            Self::Push => bet,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bust => write!(f, "lost (bust)"),
            Self::Blackjack => write!(f, "blackjack"),
            Self::Win => write!(f, "won"),
            Self::Push => write!(f, "pushed"),
            Self::Loss => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pit_cards::Card;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    fn seat(cards: &str, bet: Chips) -> Seat {
        let mut seat = Seat::new();
        seat.place(bet);
        for card in hand(cards).cards() {
            seat.take(*card);
        }
        seat
    }

    #[test]
    fn bust_loses_even_against_dealer_bust() {
        let player = seat("K Q 5", 100);
        assert_eq!(Outcome::judge(&player, &hand("K Q 5")), Outcome::Bust);
        assert_eq!(Outcome::Bust.payout(100), 0);
    }

    #[test]
    fn natural_beats_dealer_nineteen() {
        let player = seat("A K", 100);
        assert_eq!(Outcome::judge(&player, &hand("10 9")), Outcome::Blackjack);
        assert_eq!(Outcome::Blackjack.payout(100), 250);
    }

    #[test]
    fn natural_pushes_against_dealer_natural() {
        let player = seat("A K", 100);
        assert_eq!(Outcome::judge(&player, &hand("A Q")), Outcome::Push);
    }

    #[test]
    fn three_card_21_beats_dealer_twenty() {
        let player = seat("7 7 7", 100);
        assert_eq!(Outcome::judge(&player, &hand("K Q")), Outcome::Win);
        assert_eq!(Outcome::Win.payout(100), 200);
    }

    #[test]
    fn dealer_bust_pays_standing_hand() {
        let player = seat("5 5 Q", 100);
        assert_eq!(Outcome::judge(&player, &hand("6 K 8")), Outcome::Win);
    }

    #[test]
    fn equal_values_push() {
        let player = seat("10 9", 100);
        assert_eq!(Outcome::judge(&player, &hand("10 9")), Outcome::Push);
        assert_eq!(Outcome::Push.payout(100), 100);
    }

    #[test]
    fn dealer_high_hand_wins() {
        let player = seat("10 8", 100);
        assert_eq!(Outcome::judge(&player, &hand("10 9")), Outcome::Loss);
        assert_eq!(Outcome::Loss.payout(100), 0);
    }

    #[test]
    fn odd_bets_round_down_on_naturals() {
        assert_eq!(Outcome::Blackjack.payout(25), 62);
    }

    #[test]
    fn judge_follows_priority_order() {
        // a busted natural-looking pile of cards is impossible, but a
        // busted hand against a busted dealer exercises rule 1 over rule 3
        let mut player = Seat::new();
        player.place(50);
        for card in hand("K 5 Q").cards() {
            player.take(*card);
        }
        assert!(player.busted());
        assert_eq!(Outcome::judge(&player, &hand("K 5 Q")), Outcome::Bust);
    }

    #[test]
    fn zero_bet_settles_to_zero() {
        let player = seat("10 9", 0);
        for outcome in [Outcome::Blackjack, Outcome::Win, Outcome::Push] {
            assert_eq!(outcome.payout(player.bet()), 0);
        }
    }
}
