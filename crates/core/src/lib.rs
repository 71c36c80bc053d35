//! Core type aliases, identity types, and table constants for pitboss.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the pitboss workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip balances, bets, and payouts.
pub type Chips = i32;
/// Seat index around the table (0 = first to act).
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
///
/// Channel references, ledger account keys, and table identities all share
/// the same underlying UUID representation; the marker keeps them from being
/// mixed up at compile time.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    /// Useful for converting between marker types.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// Serialized as the bare UUID so rows keyed by ID survive round trips
/// through JSON maps.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Seats per table.
pub const SEATS: usize = 5;
/// Standard 52-card decks shuffled into one shoe.
pub const SHOE_DECKS: usize = 7;
/// Copies of each rank in a single deck.
pub const RANK_COPIES: usize = 4;
/// Lower bound (inclusive) of the cut threshold drawn at shuffle time.
pub const CUT_MIN: usize = 50;
/// Upper bound (inclusive) of the cut threshold drawn at shuffle time.
pub const CUT_MAX: usize = 200;
/// Best hand value; a two-card 21 is a natural.
pub const BLACKJACK: u8 = 21;
/// Dealer stands at or above this value, soft or hard.
pub const DEALER_STAND: u8 = 17;

// ============================================================================
// BETTING
// ============================================================================
/// Smallest bet a table accepts.
pub const MIN_BET: Chips = 25;
/// Largest bet a table accepts.
pub const MAX_BET: Chips = 1_000;
/// Balance a fresh ledger row starts with.
pub const STARTING_CHIPS: Chips = 10_000;
/// Chips credited by a daily claim.
pub const DAILY_CHIPS: Chips = 1_000;
/// Cooldown between daily claims.
pub const DAILY_COOLDOWN: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

// ============================================================================
// TIMING
// ============================================================================
/// How long a betting window stays open before absentees are counted.
pub const BETTING_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);
/// How long a player has to answer on their turn before standing implicitly.
pub const DECISION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
/// Consecutive betting windows a seated player may miss before eviction.
pub const MAX_ABSENCES: u32 = 5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn id_roundtrips_through_uuid() {
        let id = ID::<Marker>::default();
        assert_eq!(id, ID::from(uuid::Uuid::from(id)));
    }

    #[test]
    fn id_cast_preserves_uuid() {
        let id = ID::<Marker>::default();
        assert_eq!(id.inner(), id.cast::<()>().inner());
    }

    #[test]
    fn cut_range_fits_inside_shoe() {
        assert!(CUT_MAX < SHOE_DECKS * 52);
    }
}
