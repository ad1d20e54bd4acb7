use crate::common::{command::Command, money::Money};
use crate::domain::customer::CustomerId;
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// One line of a command script. Columns a command does not use stay empty.
struct CsvRow {
    command: String,
    customer: Option<CustomerId>,
    target: Option<CustomerId>,
    amount: Option<String>,
    name: Option<String>,
}

impl CsvRow {
    fn customer(&self, kind: &str) -> Result<CustomerId, String> {
        self.customer
            .ok_or_else(|| format!("{kind} missing customer"))
    }

    fn amount(&self, kind: &str) -> Result<Money, String> {
        let raw = self
            .amount
            .as_deref()
            .ok_or_else(|| format!("{kind} missing amount"))?;
        Money::from_str(raw).map_err(|e| format!("{kind} has bad amount {raw:?}: {e}"))
    }
}

/// Reads driver commands from a CSV reader.
///
/// Headers: `command,customer,target,amount,name`. Command names are
/// case-insensitive (`create`, `deposit`, `withdraw`, `transfer`, `view`).
/// Each row yields either a [`Command`] or a message naming what is missing.
///
/// # Examples
///
/// ```
/// use account_ledger::io::reader::read_commands;
/// use account_ledger::common::command::Command;
/// use csv::ReaderBuilder;
///
/// let data = "command,customer,target,amount,name\n\
/// create,,,,Alice\n\
/// deposit,1,,500,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(&commands[0], Ok(Command::CreateCustomer { name }) if name == "Alice"));
/// assert!(matches!(commands[1], Ok(Command::Deposit { customer: 1, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Command, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.command.trim().to_ascii_lowercase();

        match kind.as_str() {
            "create" => {
                let name = row
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| "create missing name".to_string())?;
                Ok(Command::CreateCustomer {
                    name: name.to_string(),
                })
            }
            "deposit" => Ok(Command::Deposit {
                customer: row.customer(&kind)?,
                amount: row.amount(&kind)?,
            }),
            "withdraw" => Ok(Command::Withdraw {
                customer: row.customer(&kind)?,
                amount: row.amount(&kind)?,
            }),
            "transfer" => Ok(Command::Transfer {
                from: row.customer(&kind)?,
                to: row
                    .target
                    .ok_or_else(|| "transfer missing target".to_string())?,
                amount: row.amount(&kind)?,
            }),
            "view" => Ok(Command::View {
                customer: row.customer(&kind)?,
            }),
            other => Err(format!("unknown command: {other}")),
        }
    })
}
