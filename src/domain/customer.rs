use crate::domain::account::{Account, AccountId};

pub type CustomerId = u32;

/// A named identity owning exactly one account.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    account: Account,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, account_id: AccountId) -> Self {
        Self {
            id,
            name: name.into(),
            account: Account::new(account_id),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub(crate) fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }
}
