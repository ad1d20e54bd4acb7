use crate::{
    common::money::Money,
    domain::{customer::CustomerId, ledger::LedgerRegistry},
    worker::processor::Outcome,
};

pub fn handle(ledger: &mut LedgerRegistry, customer: CustomerId, amount: Money) -> Outcome {
    match ledger.withdraw(customer, amount) {
        Ok(balance) => {
            log::info!("withdrew {amount} for customer {customer}, balance {balance}");
            Outcome::Balance { customer, balance }
        }
        Err(err) => {
            log::warn!("could not withdraw for customer {customer}: {err}");
            Outcome::Rejected(err)
        }
    }
}
