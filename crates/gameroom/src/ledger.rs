use super::*;
use pit_core::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::time::SystemTime;

/// A player's durable row in the chip ledger.
///
/// Mutated only through [`Ledger::update`] merges; the core never writes
/// fields outside a round's accounting step. `table` doubles as the
/// single-seating lock: a player may sit at one room at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub balance: Chips,
    pub claim: Option<SystemTime>,
    pub table: Option<ID<Room>>,
    pub absences: u32,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: STARTING_CHIPS,
            claim: None,
            table: None,
            absences: 0,
        }
    }
}

impl Account {
    /// Applies the supplied fields only; untouched fields keep their value.
    /// The balance moves by the patch's signed delta, so updates from
    /// different tasks compose instead of overwriting each other.
    pub fn merge(&mut self, patch: Patch) {
        self.balance += patch.delta;
        if let Some(claim) = patch.claim {
            self.claim = Some(claim);
        }
        if let Some(table) = patch.table {
            self.table = table;
        }
        if let Some(absences) = patch.absences {
            self.absences = absences;
        }
    }
}

/// Partial account update applied as one atomic merge.
///
/// Combined mutations (say, an eviction clearing the table reference and
/// resetting the absence streak) go through a single patch so the row is
/// never observed half-applied. Chips move as credits and debits rather
/// than absolute balances: the merge applies the net delta under the
/// ledger's lock, so a claim landing between a caller's read and its
/// write is never lost.
#[derive(Debug, Clone, Default)]
pub struct Patch {
    delta: Chips,
    claim: Option<SystemTime>,
    table: Option<Option<ID<Room>>>,
    absences: Option<u32>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn credit(mut self, amount: Chips) -> Self {
        self.delta += amount;
        self
    }
    pub fn debit(mut self, amount: Chips) -> Self {
        self.delta -= amount;
        self
    }
    pub fn claim(mut self, at: SystemTime) -> Self {
        self.claim = Some(at);
        self
    }
    pub fn seat(mut self, table: ID<Room>) -> Self {
        self.table = Some(Some(table));
        self
    }
    pub fn unseat(mut self) -> Self {
        self.table = Some(None);
        self
    }
    pub fn absences(mut self, absences: u32) -> Self {
        self.absences = Some(absences);
        self
    }
}

/// Key-value chip ledger shared by every room.
///
/// The only resource shared across rooms: each call is one atomic
/// read-modify-write, and `update` creates the default row when absent.
/// Rooms never hold a row across an await point; they read, decide, and
/// commit in single calls.
#[async_trait::async_trait]
pub trait Ledger: Send + Sync {
    async fn get(&self, id: ID<Account>) -> Option<Account>;
    /// Merges the patch into the row (creating a default row first when
    /// absent) and returns the post-merge state.
    async fn update(&self, id: ID<Account>, patch: Patch) -> Account;
}

/// In-memory ledger for tests and single-process hosting.
#[derive(Debug, Default)]
pub struct MemoryLedger(tokio::sync::Mutex<HashMap<ID<Account>, Account>>);

#[async_trait::async_trait]
impl Ledger for MemoryLedger {
    async fn get(&self, id: ID<Account>) -> Option<Account> {
        self.0.lock().await.get(&id).cloned()
    }
    async fn update(&self, id: ID<Account>, patch: Patch) -> Account {
        let mut rows = self.0.lock().await;
        let row = rows.entry(id).or_default();
        row.merge(patch);
        row.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_creates_default_row() {
        let ledger = MemoryLedger::default();
        let id = ID::default();
        assert!(ledger.get(id).await.is_none());
        let row = ledger.update(id, Patch::new()).await;
        assert_eq!(row.balance, STARTING_CHIPS);
        assert_eq!(row.absences, 0);
        assert!(row.table.is_none());
    }

    #[tokio::test]
    async fn merge_touches_supplied_fields_only() {
        let ledger = MemoryLedger::default();
        let id = ID::default();
        let table = ID::default();
        ledger.update(id, Patch::new().debit(500).seat(table)).await;
        let row = ledger.update(id, Patch::new().absences(3)).await;
        assert_eq!(row.balance, STARTING_CHIPS - 500);
        assert_eq!(row.table, Some(table));
        assert_eq!(row.absences, 3);
    }

    #[tokio::test]
    async fn credits_survive_interleaved_debits() {
        // a debit decided from a stale read must not erase a credit that
        // lands in between
        let ledger = MemoryLedger::default();
        let id = ID::default();
        let before = ledger.update(id, Patch::new()).await;
        ledger.update(id, Patch::new().credit(DAILY_CHIPS)).await;
        let row = ledger.update(id, Patch::new().debit(100)).await;
        assert_eq!(row.balance, before.balance + DAILY_CHIPS - 100);
    }

    #[tokio::test]
    async fn unseat_clears_table_reference() {
        let ledger = MemoryLedger::default();
        let id = ID::default();
        ledger.update(id, Patch::new().seat(ID::default())).await;
        let row = ledger.update(id, Patch::new().unseat()).await;
        assert!(row.table.is_none());
    }
}
