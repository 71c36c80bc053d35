use super::card::Card;
use pit_core::*;
use rand::seq::SliceRandom;

/// A multi-deck dealing shoe with a cut threshold.
///
/// Built from [`SHOE_DECKS`] standard rank-multisets shuffled uniformly at
/// random; the cut threshold is redrawn in `[CUT_MIN, CUT_MAX]` at every
/// shuffle. The table reshuffles whenever the remaining length falls below
/// the threshold, checked at round boundaries only. Seven decks against a
/// cut of at most 200 leaves enough margin that a full table cannot run the
/// shoe dry within a single round.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cut: usize,
}

impl Shoe {
    pub fn new() -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            cut: 0,
        };
        shoe.reshuffle();
        shoe
    }
    /// Deterministic shoe for simulations and scripted rounds.
    /// Cards come off in the order given; the cut threshold is `cut`.
    pub fn stacked(cards: Vec<Card>, cut: usize) -> Self {
        Self {
            cards: cards.into_iter().rev().collect(),
            cut,
        }
    }
    /// Total replacement of internal state: rebuild the full rank multiset,
    /// shuffle uniformly, draw a fresh cut threshold.
    pub fn reshuffle(&mut self) {
        self.cards = (0..SHOE_DECKS)
            .flat_map(|_| (0..Card::COUNT).flat_map(|r| (0..RANK_COPIES).map(move |_| r)))
            .map(Card::from)
            .collect();
        self.cards.shuffle(&mut rand::rng());
        self.cut = rand::random_range(CUT_MIN..=CUT_MAX);
    }
    /// Removes and returns the top card.
    /// The table never lets the shoe run dry mid-round; sizing guarantees it.
    pub fn draw(&mut self) -> Card {
        debug_assert!(!self.cards.is_empty());
        self.cards.pop().expect("shoe reshuffled before running dry")
    }
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
    pub fn cut(&self) -> usize {
        self.cut
    }
    /// True once the shoe is due for a reshuffle at the next round boundary.
    pub fn below_cut(&self) -> bool {
        self.cards.len() < self.cut
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
