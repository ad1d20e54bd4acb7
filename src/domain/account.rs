use std::fmt;

use crate::common::{error::LedgerError, money::Money};
use crate::domain::transaction::{TransactionRecord, TxKind};

pub type AccountId = u32;

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    /// Never negative.
    balance: Money,
    /// Chronological, append-only.
    history: Vec<TransactionRecord>,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            balance: Money::ZERO,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn history(&self) -> HistoryView<'_> {
        HistoryView::from(self.history.as_slice())
    }

    /// Credits `amount` and returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, LedgerError> {
        ensure_positive(amount)?;
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.balance = balance;
        self.history
            .push(TransactionRecord::new(TxKind::Deposit, amount));
        Ok(balance)
    }

    /// Debits `amount` if the balance covers it; otherwise nothing changes.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, LedgerError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.history
            .push(TransactionRecord::new(TxKind::Withdrawal, amount));
        Ok(self.balance)
    }

    /// Moves `amount` to `target`. The source keeps both a `Withdrawal` and a
    /// `TransferOut` record for the same movement; the target gets a
    /// `Deposit`. Returns the source's new balance.
    pub fn transfer(&mut self, target: &mut Account, amount: Money) -> Result<Money, LedgerError> {
        ensure_positive(amount)?;
        // target credit must fit before the source is debited
        target
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        let balance = self.withdraw(amount)?;
        target.deposit(amount)?;
        self.record_transfer_out(target.id, amount);
        Ok(balance)
    }

    /// Transfer whose source and target are this same account: withdraw,
    /// deposit back, then the transfer-out entry. Balance ends unchanged.
    pub(crate) fn transfer_to_self(&mut self, amount: Money) -> Result<Money, LedgerError> {
        self.withdraw(amount)?;
        let balance = self.deposit(amount)?;
        self.record_transfer_out(self.id, amount);
        Ok(balance)
    }

    fn record_transfer_out(&mut self, target: AccountId, amount: Money) {
        self.history.push(TransactionRecord::new(
            TxKind::TransferOut { target },
            amount,
        ));
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

/// Display form of an account history. An account without records renders
/// a notice instead of an empty listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryView<'a> {
    Empty,
    Entries(&'a [TransactionRecord]),
}

impl<'a> From<&'a [TransactionRecord]> for HistoryView<'a> {
    fn from(records: &'a [TransactionRecord]) -> Self {
        if records.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Entries(records)
        }
    }
}

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryView::Empty => writeln!(f, "No transactions yet."),
            HistoryView::Entries(records) => {
                for record in records.iter() {
                    writeln!(f, "{record}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(v: i64) -> Money {
        Money::from_units(v)
    }

    fn funded(id: AccountId, amount: i64) -> Account {
        let mut acc = Account::new(id);
        acc.deposit(money(amount)).unwrap();
        acc
    }

    fn kinds(acc: &Account) -> Vec<TxKind> {
        acc.records().iter().map(|r| r.kind()).collect()
    }

    #[test]
    fn deposit_credits_and_records() {
        let mut acc = Account::new(1001);

        let balance = acc.deposit(money(500)).unwrap();

        assert_eq!(balance, money(500));
        assert_eq!(acc.balance(), money(500));
        assert_eq!(kinds(&acc), vec![TxKind::Deposit]);
        assert_eq!(acc.records()[0].amount(), money(500));
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut acc = Account::new(1001);

        assert_eq!(
            acc.deposit(Money::ZERO),
            Err(LedgerError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(
            acc.deposit(money(-5)),
            Err(LedgerError::InvalidAmount(money(-5)))
        );
        assert_eq!(acc.balance(), Money::ZERO);
        assert!(acc.records().is_empty());
    }

    #[test]
    fn deposit_overflow_leaves_account_untouched() {
        let mut acc = Account::new(1001);
        acc.deposit(Money::from_minor(i64::MAX)).unwrap();

        assert_eq!(
            acc.deposit(Money::from_minor(1)),
            Err(LedgerError::BalanceOverflow)
        );
        assert_eq!(acc.balance(), Money::from_minor(i64::MAX));
        assert_eq!(acc.records().len(), 1);
    }

    #[test]
    fn withdraw_debits_when_covered() {
        let mut acc = funded(1001, 100);

        let balance = acc.withdraw(money(40)).unwrap();

        assert_eq!(balance, money(60));
        assert_eq!(kinds(&acc), vec![TxKind::Deposit, TxKind::Withdrawal]);
    }

    #[test]
    fn withdraw_of_entire_balance_reaches_zero() {
        let mut acc = funded(1001, 100);
        assert_eq!(acc.withdraw(money(100)).unwrap(), Money::ZERO);
    }

    #[test]
    fn withdraw_over_balance_fails_without_side_effects() {
        let mut acc = funded(1001, 30);

        let err = acc.withdraw(money(50)).unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                requested: money(50),
                available: money(30),
            }
        );
        assert_eq!(acc.balance(), money(30));
        assert_eq!(acc.records().len(), 1);
    }

    #[test]
    fn transfer_moves_funds_and_double_books_source() {
        let mut alice = funded(1001, 500);
        let mut bob = Account::new(1002);

        let balance = alice.transfer(&mut bob, money(200)).unwrap();

        assert_eq!(balance, money(300));
        assert_eq!(bob.balance(), money(200));
        assert_eq!(
            kinds(&alice),
            vec![
                TxKind::Deposit,
                TxKind::Withdrawal,
                TxKind::TransferOut { target: 1002 }
            ]
        );
        assert_eq!(alice.records()[2].amount(), money(200));
        assert_eq!(kinds(&bob), vec![TxKind::Deposit]);
    }

    #[test]
    fn failed_transfer_touches_neither_account() {
        let mut alice = funded(1001, 300);
        let mut bob = funded(1002, 200);

        let err = alice.transfer(&mut bob, money(10_000)).unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(alice.balance(), money(300));
        assert_eq!(bob.balance(), money(200));
        assert_eq!(alice.records().len(), 1);
        assert_eq!(bob.records().len(), 1);
    }

    #[test]
    fn transfer_that_would_overflow_target_is_rejected_before_withdrawing() {
        let mut alice = funded(1001, 10);
        let mut bob = Account::new(1002);
        bob.deposit(Money::from_minor(i64::MAX)).unwrap();

        assert_eq!(
            alice.transfer(&mut bob, money(1)),
            Err(LedgerError::BalanceOverflow)
        );
        assert_eq!(alice.balance(), money(10));
        assert_eq!(alice.records().len(), 1);
    }

    #[test]
    fn transfer_to_self_keeps_balance_and_appends_three_records() {
        let mut acc = funded(1001, 50);

        assert_eq!(acc.transfer_to_self(money(20)).unwrap(), money(50));
        assert_eq!(
            kinds(&acc),
            vec![
                TxKind::Deposit,
                TxKind::Withdrawal,
                TxKind::Deposit,
                TxKind::TransferOut { target: 1001 }
            ]
        );
    }

    #[test]
    fn empty_history_renders_notice() {
        let acc = Account::new(1001);
        assert_eq!(acc.history(), HistoryView::Empty);
        assert_eq!(acc.history().to_string(), "No transactions yet.\n");
    }

    #[test]
    fn history_renders_one_line_per_record_in_order() {
        let mut acc = funded(1001, 5);
        acc.withdraw(money(2)).unwrap();

        let out = acc.history().to_string();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] Deposit: 5.0000"));
        assert!(lines[1].ends_with("] Withdrawal: 2.0000"));
    }
}
