use super::card::Card;
use pit_core::BLACKJACK;

/// An ordered sequence of dealt cards.
///
/// Valuation follows the table rules: aces start at 11 and are reduced to 1
/// one at a time while the total exceeds 21 and unreduced aces remain. The
/// reduction is order-independent and terminates at the unique best value
/// at or under 21 whenever one is achievable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn clear(&mut self) {
        self.0.clear();
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn last(&self) -> Option<Card> {
        self.0.last().copied()
    }
    /// Best total under the ace rule.
    pub fn value(&self) -> u8 {
        self.valuation().0
    }
    /// True while at least one ace still counts as 11.
    pub fn soft(&self) -> bool {
        self.valuation().1
    }
    /// Two cards totaling 21, dealt before any hit.
    pub fn blackjack(&self) -> bool {
        self.size() == 2 && self.value() == BLACKJACK
    }
    pub fn busted(&self) -> bool {
        self.value() > BLACKJACK
    }
    /// Computes (value, soft) in one pass.
    fn valuation(&self) -> (u8, bool) {
        let mut aces = self.0.iter().filter(|c| c.is_ace()).count();
        let mut value = self.0.iter().map(|c| c.value() as u16).sum::<u16>();
        while value > BLACKJACK as u16 && aces > 0 {
            value -= 10;
            aces -= 1;
        }
        (value as u8, aces > 0)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", cards)
    }
}

/// str isomorphism: whitespace-separated rank tokens, e.g. "A K 5"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
