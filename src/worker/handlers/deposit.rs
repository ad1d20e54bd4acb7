use crate::{
    common::money::Money,
    domain::{customer::CustomerId, ledger::LedgerRegistry},
    worker::processor::Outcome,
};

pub fn handle(ledger: &mut LedgerRegistry, customer: CustomerId, amount: Money) -> Outcome {
    match ledger.deposit(customer, amount) {
        Ok(balance) => {
            log::info!("deposited {amount} for customer {customer}, balance {balance}");
            Outcome::Balance { customer, balance }
        }
        Err(err) => {
            log::warn!("could not deposit for customer {customer}: {err}");
            Outcome::Rejected(err)
        }
    }
}
