use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountNumber;
use crate::bank::Statement;

/// Listing row for one account: identity plus current balance.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub number: AccountNumber,
    pub branch: String,
    pub client: String,
    pub balance: Decimal,
}

pub fn print_statement<W>(output: &mut W, statement: &Statement) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for line in &statement.lines {
        if let Err(err) = writer.serialize(line) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // entries first, balance as the closing row
    if statement.lines.is_empty() {
        if let Err(err) = writer.write_record(["kind", "amount"]) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    let balance = statement.balance.to_string();
    if let Err(err) = writer.write_record(["balance", balance.as_str()]) {
        anyhow::bail!("Failed to write to CSV: {err}")
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        if let Err(err) = writer.serialize(acc) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
