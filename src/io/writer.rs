use std::io::Write;

use crate::domain::customer::Customer;

#[derive(serde::Serialize)]
/// Output row: `customer,name,account,balance,transactions`. The balance is
/// written with 4 decimal places.
struct OutputRow<'a> {
    customer: u32,
    name: &'a str,
    account: u32,
    balance: String,
    transactions: usize,
}

/// Writes one summary row per customer, in the order given.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use account_ledger::domain::ledger::LedgerRegistry;
/// use account_ledger::io::writer::write_accounts;
///
/// let mut ledger = LedgerRegistry::new();
/// ledger.create_customer("Alice").unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.customers()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "customer,name,account,balance,transactions\n1,Alice,1001,0.0000,0\n");
/// ```
pub fn write_accounts<'a, W, I>(writer: W, customers: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Customer>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for customer in customers {
        let account = customer.account();
        wtr.serialize(OutputRow {
            customer: customer.id(),
            name: customer.name(),
            account: account.id(),
            balance: account.balance().to_string(),
            transactions: account.records().len(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
