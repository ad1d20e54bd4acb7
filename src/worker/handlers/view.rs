use crate::{
    domain::{customer::CustomerId, ledger::LedgerRegistry},
    worker::processor::Outcome,
};

pub fn handle(ledger: &LedgerRegistry, customer: CustomerId) -> Outcome {
    match ledger.view_info(customer) {
        Ok(info) => {
            log::info!("viewed customer {customer}");
            Outcome::Statement(info)
        }
        Err(err) => {
            log::warn!("could not view customer {customer}: {err}");
            Outcome::Rejected(err)
        }
    }
}
