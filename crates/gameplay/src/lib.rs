//! Round-scoped blackjack state and the rules that resolve it.
//!
//! Everything here is synchronous and side-effect free; the async table
//! coordinator drives these types and owns all timing, messaging, and
//! chip accounting concerns.
//!
//! ## Core Types
//!
//! - [`Action`] — A player's turn decision (hit, stand, double)
//! - [`Phase`] — Table lifecycle between and during rounds
//! - [`Seat`] — One player's bet, hand, and flags for the current round
//! - [`Dealer`] — The fixed house drawing policy
//! - [`Outcome`] — Settlement result of one seat against the dealer
mod action;
mod dealer;
mod phase;
mod seat;
mod settle;

pub use action::*;
pub use dealer::*;
pub use phase::*;
pub use seat::*;
pub use settle::*;
