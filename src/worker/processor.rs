use crate::{
    common::{command::Command, error::LedgerError, money::Money},
    domain::{customer::CustomerId, ledger::AccountInfo, ledger::LedgerRegistry},
    worker::handlers::{create, deposit, transfer, view, withdrawal},
};

/// What a command did. Rejections are values, not errors: the batch goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { customer: CustomerId },
    Balance { customer: CustomerId, balance: Money },
    Statement(AccountInfo),
    Rejected(LedgerError),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

#[derive(Debug, Default)]
pub struct Processor {
    applied: usize,
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, ledger: &mut LedgerRegistry, command: Command) -> Outcome {
        let outcome = match command {
            Command::CreateCustomer { name } => create::handle(ledger, &name),
            Command::Deposit { customer, amount } => deposit::handle(ledger, customer, amount),
            Command::Withdraw { customer, amount } => {
                withdrawal::handle(ledger, customer, amount)
            }
            Command::Transfer { from, to, amount } => transfer::handle(ledger, from, to, amount),
            Command::View { customer } => view::handle(ledger, customer),
        };

        if outcome.is_rejected() {
            self.rejected += 1;
        } else {
            self.applied += 1;
        }
        outcome
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
