use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountNumber;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Register,
    Open,
    Deposit,
    Withdraw,
    Statement,
    Accounts,
}

/// One row of a command script. Which columns are required depends on the
/// op; the rest stay empty.
#[derive(Debug, Deserialize)]
pub struct CommandRow {
    pub op: OpKind,
    pub client: Option<String>,
    pub account: Option<AccountNumber>,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub limit: Option<Decimal>,
    pub max_withdrawals: Option<u32>,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{field}` column is required for {op:?}")]
    MissingField { op: OpKind, field: &'static str },
}

pub fn require<T>(value: Option<T>, op: OpKind, field: &'static str) -> Result<T, CommandError> {
    value.ok_or(CommandError::MissingField { op, field })
}

/// Parses a command script in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvCommandParser<R> {
    iter: DeserializeRecordsIntoIter<R, CommandRow>,
}

impl<R> CsvCommandParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvCommandParser<R>
where
    R: Read,
{
    type Item = (u64, CommandRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
