use std::collections::BTreeMap;
use std::fmt;

use crate::common::{
    error::{LedgerError, Party},
    money::Money,
};
use crate::domain::{
    account::{AccountId, HistoryView},
    customer::{Customer, CustomerId},
    sequence::{allocate_pair, Sequence},
    transaction::TransactionRecord,
};

/// First ids handed out by a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerConfig {
    pub first_customer_id: CustomerId,
    pub first_account_id: AccountId,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_customer_id: 1,
            first_account_id: 1001,
        }
    }
}

/// Owned snapshot of one customer's account, as returned to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    pub customer_id: CustomerId,
    pub name: String,
    pub account_id: AccountId,
    pub balance: Money,
    pub history: Vec<TransactionRecord>,
}

impl From<&Customer> for AccountInfo {
    fn from(c: &Customer) -> Self {
        Self {
            customer_id: c.id(),
            name: c.name().to_string(),
            account_id: c.account().id(),
            balance: c.account().balance(),
            history: c.account().records().to_vec(),
        }
    }
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer ID: {}", self.customer_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Account Number: {}", self.account_id)?;
        writeln!(f, "Current Balance: {}", self.balance)?;
        writeln!(f, "Transaction History:")?;
        write!(f, "{}", HistoryView::from(self.history.as_slice()))
    }
}

/// The bank: owns every customer and hands out customer and account ids.
#[derive(Debug)]
pub struct LedgerRegistry {
    customers: BTreeMap<CustomerId, Customer>,
    customer_ids: Sequence,
    account_ids: Sequence,
}

impl Default for LedgerRegistry {
    fn default() -> Self {
        Self::with_config(LedgerConfig::default())
    }
}

impl LedgerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            customers: BTreeMap::new(),
            customer_ids: Sequence::starting_at(config.first_customer_id),
            account_ids: Sequence::starting_at(config.first_account_id),
        }
    }

    /// Fails only once the configured id range is used up.
    pub fn create_customer(&mut self, name: &str) -> Result<CustomerId, LedgerError> {
        let (id, account_id) = allocate_pair(&mut self.customer_ids, &mut self.account_ids)?;
        self.customers
            .insert(id, Customer::new(id, name, account_id));
        Ok(id)
    }

    pub fn find_customer(&self, id: CustomerId) -> Result<&Customer, LedgerError> {
        self.customers
            .get(&id)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    fn find_customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer, LedgerError> {
        self.customers
            .get_mut(&id)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Customers in id (and therefore creation) order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn deposit(&mut self, id: CustomerId, amount: Money) -> Result<Money, LedgerError> {
        self.find_customer_mut(id)?.account_mut().deposit(amount)
    }

    pub fn withdraw(&mut self, id: CustomerId, amount: Money) -> Result<Money, LedgerError> {
        self.find_customer_mut(id)?.account_mut().withdraw(amount)
    }

    /// Returns the sender's balance after the transfer.
    pub fn transfer(
        &mut self,
        from: CustomerId,
        to: CustomerId,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        if !self.customers.contains_key(&from) {
            return Err(LedgerError::CustomerNotFound {
                id: from,
                party: Party::Sender,
            });
        }
        if !self.customers.contains_key(&to) {
            return Err(LedgerError::CustomerNotFound {
                id: to,
                party: Party::Receiver,
            });
        }

        if from == to {
            return self
                .find_customer_mut(from)?
                .account_mut()
                .transfer_to_self(amount);
        }

        // Two disjoint &mut borrows out of one map: lift the sender out for
        // the duration of the call.
        let mut sender = self
            .customers
            .remove(&from)
            .ok_or_else(|| LedgerError::not_found(from))?;
        let result = match self.customers.get_mut(&to) {
            Some(receiver) => sender
                .account_mut()
                .transfer(receiver.account_mut(), amount),
            None => Err(LedgerError::not_found(to)),
        };
        self.customers.insert(from, sender);
        result
    }

    pub fn view_info(&self, id: CustomerId) -> Result<AccountInfo, LedgerError> {
        self.find_customer(id).map(AccountInfo::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TxKind;

    fn money(v: i64) -> Money {
        Money::from_units(v)
    }

    #[test]
    fn ids_are_assigned_in_sequence() {
        let mut ledger = LedgerRegistry::new();

        let a = ledger.create_customer("Alice").unwrap();
        ledger.deposit(a, money(10)).unwrap();
        let b = ledger.create_customer("Bob").unwrap();
        let _ = ledger.withdraw(b, money(1));
        let c = ledger.create_customer("Carol").unwrap();

        assert_eq!((a, b, c), (1, 2, 3));
        let accounts: Vec<AccountId> = ledger.customers().map(|c| c.account().id()).collect();
        assert_eq!(accounts, vec![1001, 1002, 1003]);
    }

    #[test]
    fn config_moves_the_starting_ids() {
        let mut ledger = LedgerRegistry::with_config(LedgerConfig {
            first_customer_id: 50,
            first_account_id: 9000,
        });

        let id = ledger.create_customer("Dana").unwrap();

        assert_eq!(id, 50);
        assert_eq!(ledger.find_customer(50).unwrap().account().id(), 9000);
    }

    #[test]
    fn creation_stops_at_the_end_of_the_id_range() {
        let mut ledger = LedgerRegistry::with_config(LedgerConfig {
            first_customer_id: u32::MAX,
            first_account_id: u32::MAX - 5,
        });

        assert_eq!(ledger.create_customer("Zed"), Ok(u32::MAX));
        assert_eq!(
            ledger.create_customer("Zoe"),
            Err(LedgerError::IdsExhausted("customer"))
        );
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.find_customer(u32::MAX).unwrap().name(), "Zed");
        assert_eq!(
            ledger.find_customer(u32::MAX).unwrap().account().id(),
            u32::MAX - 5
        );
    }

    #[test]
    fn account_range_running_out_blocks_creation_too() {
        let mut ledger = LedgerRegistry::with_config(LedgerConfig {
            first_customer_id: 1,
            first_account_id: u32::MAX,
        });

        assert_eq!(ledger.create_customer("Zed"), Ok(1));
        assert_eq!(
            ledger.create_customer("Zoe"),
            Err(LedgerError::IdsExhausted("account"))
        );
        assert_eq!(ledger.create_customer("Zia"), Err(LedgerError::IdsExhausted("account")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn unknown_customer_is_reported() {
        let mut ledger = LedgerRegistry::new();
        ledger.create_customer("Alice").unwrap();

        assert_eq!(
            ledger.find_customer(99).unwrap_err(),
            LedgerError::CustomerNotFound {
                id: 99,
                party: Party::Customer
            }
        );
        assert_eq!(
            ledger.deposit(99, money(5)),
            Err(LedgerError::not_found(99))
        );
        assert_eq!(
            ledger.withdraw(99, money(5)),
            Err(LedgerError::not_found(99))
        );
        assert!(ledger.view_info(99).is_err());
    }

    #[test]
    fn transfer_reports_which_party_is_missing() {
        let mut ledger = LedgerRegistry::new();
        let a = ledger.create_customer("Alice").unwrap();
        ledger.deposit(a, money(100)).unwrap();

        assert_eq!(
            ledger.transfer(7, a, money(1)),
            Err(LedgerError::CustomerNotFound {
                id: 7,
                party: Party::Sender
            })
        );
        assert_eq!(
            ledger.transfer(a, 8, money(1)),
            Err(LedgerError::CustomerNotFound {
                id: 8,
                party: Party::Receiver
            })
        );

        let info = ledger.view_info(a).unwrap();
        assert_eq!(info.balance, money(100));
        assert_eq!(info.history.len(), 1);
    }

    #[test]
    fn alice_and_bob_scenario() {
        let mut ledger = LedgerRegistry::new();

        let alice = ledger.create_customer("Alice").unwrap();
        assert_eq!(alice, 1);
        assert_eq!(ledger.deposit(alice, money(500)), Ok(money(500)));

        let bob = ledger.create_customer("Bob").unwrap();
        assert_eq!(bob, 2);
        assert_eq!(ledger.transfer(alice, bob, money(200)), Ok(money(300)));

        let a = ledger.view_info(alice).unwrap();
        let b = ledger.view_info(bob).unwrap();
        assert_eq!((a.account_id, b.account_id), (1001, 1002));
        assert_eq!((a.balance, b.balance), (money(300), money(200)));

        let a_kinds: Vec<TxKind> = a.history.iter().map(|r| r.kind()).collect();
        assert_eq!(
            a_kinds,
            vec![
                TxKind::Deposit,
                TxKind::Withdrawal,
                TxKind::TransferOut { target: 1002 }
            ]
        );
        assert_eq!(b.history.len(), 1);
        assert_eq!(b.history[0].kind(), TxKind::Deposit);
        assert_eq!(b.history[0].amount(), money(200));

        assert!(matches!(
            ledger.transfer(alice, bob, money(10_000)),
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(ledger.view_info(alice).unwrap().balance, money(300));
        assert_eq!(ledger.view_info(bob).unwrap().balance, money(200));

        assert_eq!(
            ledger.find_customer(99).unwrap_err(),
            LedgerError::not_found(99)
        );
    }

    #[test]
    fn self_transfer_keeps_the_balance() {
        let mut ledger = LedgerRegistry::new();
        let a = ledger.create_customer("Alice").unwrap();
        ledger.deposit(a, money(40)).unwrap();

        assert_eq!(ledger.transfer(a, a, money(15)), Ok(money(40)));
        assert_eq!(ledger.view_info(a).unwrap().history.len(), 4);
        assert!(ledger.transfer(a, a, money(41)).is_err());
        assert_eq!(ledger.view_info(a).unwrap().history.len(), 4);
    }

    #[test]
    fn failed_transfer_keeps_customer_registered() {
        let mut ledger = LedgerRegistry::new();
        let a = ledger.create_customer("Alice").unwrap();
        let b = ledger.create_customer("Bob").unwrap();

        assert!(ledger.transfer(a, b, money(1)).is_err());
        assert_eq!(ledger.len(), 2);
        assert!(ledger.find_customer(a).is_ok());
    }

    #[test]
    fn view_info_renders_statement() {
        let mut ledger = LedgerRegistry::new();
        let a = ledger.create_customer("Alice").unwrap();

        let out = ledger.view_info(a).unwrap().to_string();

        assert_eq!(
            out,
            "Customer ID: 1\nName: Alice\nAccount Number: 1001\n\
             Current Balance: 0.0000\nTransaction History:\nNo transactions yet.\n"
        );
    }
}
