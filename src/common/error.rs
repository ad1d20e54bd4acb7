use std::fmt;

use crate::common::money::Money;
use crate::domain::customer::CustomerId;

/// Which of the supplied customer ids failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Customer,
    Sender,
    Receiver,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Customer => f.write_str("customer"),
            Party::Sender => f.write_str("sender"),
            Party::Receiver => f.write_str("receiver"),
        }
    }
}

/// Recoverable ledger outcomes. None of them leaves a partial state change
/// behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("{party} {id} not found")]
    CustomerNotFound { id: CustomerId, party: Party },
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("balance overflow")]
    BalanceOverflow,
    #[error("no {0} ids left to allocate")]
    IdsExhausted(&'static str),
}

impl LedgerError {
    pub fn not_found(id: CustomerId) -> Self {
        LedgerError::CustomerNotFound {
            id,
            party: Party::Customer,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <commands.csv>")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("failed to write output: {0}")]
    Output(std::io::Error),
}
