//! Thread-safe ledger.
//!
//! Every customer sits behind its own mutex, so an account's balance and
//! history always change together. Anything that holds more than one
//! customer lock (transfers, snapshots) takes them in ascending account-id
//! order and keeps them for the whole step: concurrent readers see either
//! none or all of a transfer, and two opposing transfers cannot deadlock.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard, RwLock};

use crate::common::{
    error::{LedgerError, Party},
    money::Money,
};
use crate::domain::{
    account::AccountId,
    customer::{Customer, CustomerId},
    ledger::{AccountInfo, LedgerConfig},
    sequence::{allocate_pair, Sequence},
};

/// Directory entry. The account id is copied out of the customer so lock
/// order can be decided without locking.
#[derive(Debug, Clone)]
struct Entry {
    account_id: AccountId,
    cell: Arc<Mutex<Customer>>,
}

#[derive(Debug)]
struct Directory {
    customers: BTreeMap<CustomerId, Entry>,
    customer_ids: Sequence,
    account_ids: Sequence,
}

#[derive(Debug, Clone)]
pub struct SharedLedger {
    directory: Arc<RwLock<Directory>>,
}

impl Default for SharedLedger {
    fn default() -> Self {
        Self::with_config(LedgerConfig::default())
    }
}

impl SharedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            directory: Arc::new(RwLock::new(Directory {
                customers: BTreeMap::new(),
                customer_ids: Sequence::starting_at(config.first_customer_id),
                account_ids: Sequence::starting_at(config.first_account_id),
            })),
        }
    }

    pub fn create_customer(&self, name: &str) -> Result<CustomerId, LedgerError> {
        let mut dir = self.directory.write();
        let dir = &mut *dir;
        let (id, account_id) = allocate_pair(&mut dir.customer_ids, &mut dir.account_ids)?;
        dir.customers.insert(
            id,
            Entry {
                account_id,
                cell: Arc::new(Mutex::new(Customer::new(id, name, account_id))),
            },
        );
        log::debug!("created customer {id} with account {account_id}");
        Ok(id)
    }

    fn resolve(&self, id: CustomerId, party: Party) -> Result<Entry, LedgerError> {
        self.directory
            .read()
            .customers
            .get(&id)
            .cloned()
            .ok_or(LedgerError::CustomerNotFound { id, party })
    }

    pub fn deposit(&self, id: CustomerId, amount: Money) -> Result<Money, LedgerError> {
        let entry = self.resolve(id, Party::Customer)?;
        let mut customer = entry.cell.lock();
        customer.account_mut().deposit(amount)
    }

    pub fn withdraw(&self, id: CustomerId, amount: Money) -> Result<Money, LedgerError> {
        let entry = self.resolve(id, Party::Customer)?;
        let mut customer = entry.cell.lock();
        customer.account_mut().withdraw(amount)
    }

    /// Returns the sender's balance after the transfer.
    pub fn transfer(
        &self,
        from: CustomerId,
        to: CustomerId,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        let sender = self.resolve(from, Party::Sender)?;
        let receiver = self.resolve(to, Party::Receiver)?;

        if sender.account_id == receiver.account_id {
            return sender.cell.lock().account_mut().transfer_to_self(amount);
        }

        let (mut src, mut dst) = if sender.account_id < receiver.account_id {
            let src = sender.cell.lock();
            let dst = receiver.cell.lock();
            (src, dst)
        } else {
            let dst = receiver.cell.lock();
            let src = sender.cell.lock();
            (src, dst)
        };

        src.account_mut().transfer(dst.account_mut(), amount)
    }

    pub fn view_info(&self, id: CustomerId) -> Result<AccountInfo, LedgerError> {
        let entry = self.resolve(id, Party::Customer)?;
        let customer = entry.cell.lock();
        Ok(AccountInfo::from(&*customer))
    }

    /// Consistent view of every customer, in id order. All customer locks
    /// are held while the snapshot is built.
    pub fn snapshot(&self) -> Vec<AccountInfo> {
        let mut entries: Vec<Entry> = self.directory.read().customers.values().cloned().collect();
        entries.sort_unstable_by_key(|e| e.account_id);

        let guards: Vec<MutexGuard<'_, Customer>> = entries.iter().map(|e| e.cell.lock()).collect();
        let mut infos: Vec<AccountInfo> = guards.iter().map(|c| AccountInfo::from(&**c)).collect();
        drop(guards);

        infos.sort_unstable_by_key(|info| info.customer_id);
        infos
    }
}
