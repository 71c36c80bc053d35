use super::*;
use pit_core::*;
use std::sync::Arc;
use std::time::Duration;
use std::time::SystemTime;

/// Table-independent account services.
///
/// Daily claims and balance queries work whether or not the player is
/// seated anywhere, so they bypass rooms entirely and talk straight to
/// the ledger.
pub struct Cashier {
    ledger: Arc<dyn Ledger>,
}

impl Cashier {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }
    /// Credits the daily allowance, or returns the remaining cooldown if
    /// one was already claimed inside the last 24 hours.
    pub async fn daily(&self, id: ID<Account>) -> Result<Chips, Duration> {
        self.daily_at(id, SystemTime::now()).await
    }
    /// Clock-injected variant of [`Self::daily`].
    pub async fn daily_at(&self, id: ID<Account>, now: SystemTime) -> Result<Chips, Duration> {
        let account = self.ledger.update(id, Patch::new()).await;
        if let Some(claim) = account.claim {
            let elapsed = now.duration_since(claim).unwrap_or_default();
            if elapsed < DAILY_COOLDOWN {
                return Err(DAILY_COOLDOWN - elapsed);
            }
        }
        let account = self
            .ledger
            .update(id, Patch::new().credit(DAILY_CHIPS).claim(now))
            .await;
        log::info!("[cashier] daily claim for {}", id);
        Ok(account.balance)
    }
    /// Read-only balance query; unknown players report the starting stack
    /// without creating a row.
    pub async fn balance(&self, id: ID<Account>) -> Chips {
        self.ledger
            .get(id)
            .await
            .map(|account| account.balance)
            .unwrap_or(STARTING_CHIPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    fn cashier() -> Cashier {
        Cashier::new(Arc::new(MemoryLedger::default()))
    }

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[tokio::test]
    async fn first_claim_credits_allowance() {
        let cashier = cashier();
        let id = ID::default();
        let balance = cashier.daily_at(id, at(0)).await.unwrap();
        assert_eq!(balance, STARTING_CHIPS + DAILY_CHIPS);
    }

    #[tokio::test]
    async fn second_claim_inside_cooldown_is_rejected() {
        let cashier = cashier();
        let id = ID::default();
        cashier.daily_at(id, at(0)).await.unwrap();
        let err = cashier.daily_at(id, at(60)).await.unwrap_err();
        assert_eq!(err, DAILY_COOLDOWN - Duration::from_secs(60));
        assert_eq!(cashier.balance(id).await, STARTING_CHIPS + DAILY_CHIPS);
    }

    #[tokio::test]
    async fn claim_succeeds_after_cooldown() {
        let cashier = cashier();
        let id = ID::default();
        cashier.daily_at(id, at(0)).await.unwrap();
        let balance = cashier
            .daily_at(id, at(DAILY_COOLDOWN.as_secs()))
            .await
            .unwrap();
        assert_eq!(balance, STARTING_CHIPS + 2 * DAILY_CHIPS);
    }

    #[tokio::test]
    async fn claim_composes_with_table_debits() {
        // a table reads the row, the claim lands, then the table commits
        // its debit; the allowance must still be there
        let cashier = cashier();
        let id = ID::default();
        let before = cashier.ledger.update(id, Patch::new()).await;
        cashier.daily_at(id, at(0)).await.unwrap();
        let row = cashier.ledger.update(id, Patch::new().debit(100)).await;
        assert_eq!(row.balance, before.balance + DAILY_CHIPS - 100);
    }

    #[tokio::test]
    async fn balance_does_not_create_rows() {
        let cashier = cashier();
        let id = ID::default();
        assert_eq!(cashier.balance(id).await, STARTING_CHIPS);
        assert!(cashier.ledger.get(id).await.is_none());
    }
}
