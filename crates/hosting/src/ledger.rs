use pit_core::ID;
use pit_gameroom::Account;
use pit_gameroom::Ledger;
use pit_gameroom::Patch;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// File-backed ledger: one JSON document holding every account, written
/// through on each update. Good for a single host process; anything
/// bigger should sit behind the same [`Ledger`] seam.
pub struct JsonLedger {
    path: PathBuf,
    accounts: Mutex<HashMap<ID<Account>, Account>>,
}

impl JsonLedger {
    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let accounts = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::info!("[ledger] {} accounts at {}", accounts.len(), path.display());
        Ok(Self {
            path,
            accounts: Mutex::new(accounts),
        })
    }
    fn flush(&self, accounts: &HashMap<ID<Account>, Account>) {
        let json = match serde_json::to_string_pretty(accounts) {
            Ok(json) => json,
            Err(e) => return log::error!("[ledger] serialize failed: {}", e),
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::error!("[ledger] write {} failed: {}", self.path.display(), e);
        }
    }
}

#[async_trait::async_trait]
impl Ledger for JsonLedger {
    async fn get(&self, id: ID<Account>) -> Option<Account> {
        self.accounts.lock().await.get(&id).cloned()
    }
    async fn update(&self, id: ID<Account>, patch: Patch) -> Account {
        let mut accounts = self.accounts.lock().await;
        let account = accounts.entry(id).or_default();
        account.merge(patch);
        let account = account.clone();
        self.flush(&accounts);
        account
    }
}
