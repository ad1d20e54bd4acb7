use crate::common::error::LedgerError;

/// Monotonic id allocator. Each value is handed out once; after `u32::MAX`
/// the sequence is exhausted rather than wrapping.
#[derive(Debug, Clone)]
pub struct Sequence {
    next: Option<u32>,
}

impl Sequence {
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    pub fn next_id(&mut self) -> Option<u32> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }
}

/// Draws a customer id and an account id together. Neither sequence moves
/// unless both have an id left.
pub(crate) fn allocate_pair(
    customer_ids: &mut Sequence,
    account_ids: &mut Sequence,
) -> Result<(u32, u32), LedgerError> {
    let customer = customer_ids
        .peek()
        .ok_or(LedgerError::IdsExhausted("customer"))?;
    let account = account_ids
        .peek()
        .ok_or(LedgerError::IdsExhausted("account"))?;
    customer_ids.next_id();
    account_ids.next_id();
    Ok((customer, account))
}
