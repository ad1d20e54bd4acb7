use crate::{domain::ledger::LedgerRegistry, worker::processor::Outcome};

pub fn handle(ledger: &mut LedgerRegistry, name: &str) -> Outcome {
    match ledger.create_customer(name) {
        Ok(customer) => {
            log::info!("customer created with id {customer}");
            Outcome::Created { customer }
        }
        Err(err) => {
            log::warn!("could not create customer {name:?}: {err}");
            Outcome::Rejected(err)
        }
    }
}
