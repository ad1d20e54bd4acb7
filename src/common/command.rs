use crate::common::money::Money;
use crate::domain::customer::CustomerId;

/// A driver request, produced by the reader and dispatched by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateCustomer { name: String },
    Deposit { customer: CustomerId, amount: Money },
    Withdraw { customer: CustomerId, amount: Money },
    Transfer { from: CustomerId, to: CustomerId, amount: Money },
    View { customer: CustomerId },
}
