use crate::{
    common::money::Money,
    domain::{customer::CustomerId, ledger::LedgerRegistry},
    worker::processor::Outcome,
};

pub fn handle(
    ledger: &mut LedgerRegistry,
    from: CustomerId,
    to: CustomerId,
    amount: Money,
) -> Outcome {
    match ledger.transfer(from, to, amount) {
        Ok(balance) => {
            log::info!("transferred {amount} from customer {from} to {to}");
            Outcome::Balance {
                customer: from,
                balance,
            }
        }
        Err(err) => {
            log::warn!("transfer from customer {from} to {to} failed: {err}");
            Outcome::Rejected(err)
        }
    }
}
