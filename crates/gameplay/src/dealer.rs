use pit_cards::Hand;
use pit_cards::Shoe;
use pit_core::*;

/// The house drawing policy.
///
/// Deterministic: hit below 17, stand at 17 or better whether soft or
/// hard, never double. The natural-blackjack check happens right after
/// the deal and short-circuits the whole turn sequence, so it lives with
/// the table, not here.
pub struct Dealer;

impl Dealer {
    /// One decision of the policy.
    pub fn hits(hand: &Hand) -> bool {
        hand.value() < DEALER_STAND
    }
    /// Plays the hand out against a shoe, returning the final value.
    /// The table drives draws one at a time instead when it needs to
    /// announce each card; both paths apply the same policy.
    pub fn play(hand: &mut Hand, shoe: &mut Shoe) -> u8 {
        while Self::hits(hand) {
            hand.push(shoe.draw());
        }
        hand.value()
    }
}
