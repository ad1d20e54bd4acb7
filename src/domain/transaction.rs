use std::fmt;

use chrono::{DateTime, Utc};

use crate::common::money::Money;
use crate::domain::account::AccountId;

/// Layout of `ctime(3)` without the trailing newline.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    Deposit,
    Withdrawal,
    TransferOut { target: AccountId },
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => f.write_str("Deposit"),
            TxKind::Withdrawal => f.write_str("Withdrawal"),
            TxKind::TransferOut { target } => write!(f, "Transfer to Acc #{target}"),
        }
    }
}

/// One balance-affecting event. Fields are private: a record cannot change
/// once it has been appended to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TxKind,
    amount: Money,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(kind: TxKind, amount: Money) -> Self {
        Self::at(kind, amount, Utc::now())
    }

    pub fn at(kind: TxKind, amount: Money, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}
