use super::*;
use pit_cards::Card;
use pit_cards::Hand;
use pit_core::*;
use pit_gameplay::Outcome;

/// Broadcast game events, one per state change.
///
/// The room posts every event to its channel through the [`Messenger`];
/// `Display` renders the chat line. Player identities render as
/// `<@uuid>` mentions for the platform layer to resolve.
#[derive(Clone, Debug)]
pub enum Event {
    /// A player sat down at the table.
    Joined { player: ID<Account> },
    /// A player left the table.
    Left { player: ID<Account> },
    /// A betting window opened.
    BetsOpen,
    /// A player placed their bet for the round.
    BetPlaced { player: ID<Account>, amount: Chips },
    /// A player missed five straight windows and lost their seat.
    Evicted { player: ID<Account> },
    /// Opening deal: the dealer's upcard with the hole card hidden.
    DealerShows { card: Card },
    /// Opening deal: one player's two cards.
    Dealt {
        player: ID<Account>,
        hand: Hand,
        natural: bool,
    },
    /// It's this player's turn to act.
    TurnStart { player: ID<Account>, hand: Hand },
    /// The acting player drew a card.
    Drew { card: Card, value: u8 },
    /// The acting player went over 21.
    Busted,
    /// The acting player doubled down.
    Doubled { player: ID<Account>, balance: Chips },
    /// The acting player ran out the decision clock.
    TimedOut,
    /// Hole card revealed at the start of the dealer's turn.
    DealerReveal { hand: Hand },
    /// Dealer natural blackjack: all turns are skipped.
    DealerNatural,
    /// The dealer drew under the house policy.
    DealerDrew { card: Card },
    /// The dealer finished drawing.
    DealerStands { hand: Hand, value: u8 },
    /// One player's settlement line.
    Settled {
        player: ID<Account>,
        outcome: Outcome,
        payout: Chips,
        balance: Chips,
    },
    /// The shoe fell below its cut threshold and was rebuilt.
    Reshuffled,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Joined { player } => write!(f, "<@{}> joined the table!", player),
            Event::Left { player } => write!(f, "<@{}> left the table", player),
            Event::BetsOpen => write!(
                f,
                "New round starting! Place bets with bet ({}-{} chips)",
                MIN_BET, MAX_BET
            ),
            Event::BetPlaced { player, amount } => {
                write!(f, "<@{}> bet {} chips", player, amount)
            }
            Event::Evicted { player } => write!(f, "<@{}> removed for inactivity", player),
            Event::DealerShows { card } => write!(f, "Dealer: {} [HIDDEN]", card),
            Event::Dealt {
                player,
                hand,
                natural,
            } => match natural {
                true => write!(f, "<@{}>: {} ({}) BLACKJACK!", player, hand, hand.value()),
                false => write!(f, "<@{}>: {} ({})", player, hand, hand.value()),
            },
            Event::TurnStart { player, hand } => write!(
                f,
                "<@{}>'s turn. Hand: {} | Total: {}",
                player,
                hand,
                hand.value()
            ),
            Event::Drew { card, value } => write!(f, "New card: {} | Total: {}", card, value),
            Event::Busted => write!(f, "Bust!"),
            Event::Doubled { player, balance } => {
                write!(f, "<@{}> doubled! | New balance: {}", player, balance)
            }
            Event::TimedOut => write!(f, "Timed out. Standing automatically."),
            Event::DealerReveal { hand } => write!(f, "Dealer's hand: {}", hand),
            Event::DealerNatural => write!(f, "Dealer has BLACKJACK"),
            Event::DealerDrew { card } => write!(f, "Dealer hits: {}", card),
            Event::DealerStands { hand, value } => {
                write!(f, "Dealer's final hand: {} ({})", hand, value)
            }
            Event::Settled {
                player,
                outcome,
                payout,
                balance,
            } => match outcome {
                Outcome::Blackjack => write!(
                    f,
                    "<@{}> won {} (Blackjack!) | New balance: {}",
                    player, payout, balance
                ),
                Outcome::Win => {
                    write!(f, "<@{}> won {} | New balance: {}", player, payout, balance)
                }
                _ => write!(f, "<@{}> {} | New balance: {}", player, outcome, balance),
            },
            Event::Reshuffled => write!(f, "Shoe reshuffled!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_deal_calls_out_blackjack() {
        let event = Event::Dealt {
            player: ID::default(),
            hand: Hand::try_from("A K").unwrap(),
            natural: true,
        };
        assert!(event.to_string().ends_with("A K (21) BLACKJACK!"));
    }

    #[test]
    fn settlement_lines_read_like_results() {
        let player = ID::default();
        let event = Event::Settled {
            player,
            outcome: Outcome::Push,
            payout: 100,
            balance: 10_000,
        };
        assert!(event.to_string().contains("pushed"));
        assert!(event.to_string().contains("New balance: 10000"));
    }

    #[test]
    fn bets_open_names_the_limits() {
        assert!(Event::BetsOpen.to_string().contains("25-1000"));
    }
}
