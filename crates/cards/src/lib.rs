//! Card representation and dealing primitives for blackjack.
//!
//! Suits never affect blackjack arithmetic, so cards here are bare rank
//! tokens. The types build on each other from the bottom up:
//!
//! - [`Card`] — A single rank encoded in one byte
//! - [`Hand`] — An ordered sequence of dealt cards with ace-aware valuation
//! - [`Shoe`] — The pooled multi-deck supply a table deals from between
//!   reshuffles, with its cut threshold
mod card;
mod hand;
mod shoe;

pub use card::*;
pub use hand::*;
pub use shoe::*;
