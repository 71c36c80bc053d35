//! Async runtime for live blackjack tables.
//!
//! This crate orchestrates multiplayer blackjack sessions, one room per
//! communication channel, coordinating between the table state machine and
//! the chat platform through message-passing channels.
//!
//! ## Architecture
//!
//! - [`Lobby`] — Channel registry with create-on-first-join and
//!   remove-on-empty room lifecycle
//! - [`Room`] — Imperative shell driving one table: timing, chip
//!   accounting, and player messaging
//! - [`Table`] — Functional core: shoe, seats, dealer hand, and phase
//! - [`Window`] — Betting-window deadline with idempotent cancellation
//!
//! ## Collaborator seams
//!
//! - [`Ledger`] — Durable chip balances as an atomic key-value merge
//! - [`Messenger`] — Fire-and-forget delivery back to the platform
//! - [`Cashier`] — Table-independent daily claims and balance queries
//!
//! ## Protocol
//!
//! - [`Command`] — Recognized player command tokens
//! - [`Event`] — Broadcast game events rendered as chat lines
mod cashier;
mod event;
mod ledger;
mod lobby;
mod messenger;
mod protocol;
mod room;
mod table;
mod window;

pub use cashier::*;
pub use event::*;
pub use ledger::*;
pub use lobby::*;
pub use messenger::*;
pub use protocol::*;
pub use room::*;
pub use table::*;
pub use window::*;
