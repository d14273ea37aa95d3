//! Command-script front end over the core. This module could be a separate
//! crate to bootstrap [`crate::bank`] within a binary, but it lives here so
//! the integration tests can drive it directly.

use std::io::{Read, Write};

use anyhow::Result;
use thiserror::Error;

use crate::account::{AccountKind, AccountNumber, CheckingPolicy};
use crate::bank::in_memory_bank::InMemoryBank;
use crate::bank::{Bank, BankError};
use crate::client::{Client, ClientId};
use crate::transaction::Transaction;
use csv_parser::{CommandError, CommandRow, CsvCommandParser, OpKind, require};
use csv_printer::{AccountSummary, print_accounts, print_statement};

pub mod csv_parser;
pub mod csv_printer;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error("Client `{0}` has no accounts")]
    NoAccounts(ClientId),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ServiceError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvCommandParser::new(self.input);

        let mut bank = InMemoryBank::default();

        for (line, row) in parser {
            if let Err(err) = dispatch(&mut bank, row, self.output) {
                tracing::warn!(line, error = %err, "command rejected");
                (self.error_printer)(line, err);
            }
        }

        Ok(())
    }
}

fn dispatch<W: Write>(
    bank: &mut InMemoryBank,
    row: CommandRow,
    output: &mut W,
) -> Result<(), ServiceError> {
    let op = row.op;
    match op {
        OpKind::Register => {
            let id = require(row.client, op, "client")?;
            let name = require(row.name, op, "name")?;
            let address = require(row.address, op, "address")?;
            bank.register_client(Client::new(id, name, address))?;
        }
        OpKind::Open => {
            let id = require(row.client, op, "client")?;
            let mut policy = CheckingPolicy::default();
            if let Some(limit) = row.limit {
                policy.withdrawal_limit = limit;
            }
            if let Some(max) = row.max_withdrawals {
                policy.max_withdrawals = max;
            }
            bank.open_account(&id, AccountKind::Checking(policy))?;
        }
        OpKind::Deposit => {
            let id = require(row.client, op, "client")?;
            let amount = require(row.amount, op, "amount")?;
            let number = resolve_account(bank, &id, row.account)?;
            bank.execute(&id, number, Transaction::Deposit(amount))?;
        }
        OpKind::Withdraw => {
            let id = require(row.client, op, "client")?;
            let amount = require(row.amount, op, "amount")?;
            let number = resolve_account(bank, &id, row.account)?;
            bank.execute(&id, number, Transaction::Withdrawal(amount))?;
        }
        OpKind::Statement => {
            let id = require(row.client, op, "client")?;
            let number = resolve_account(bank, &id, row.account)?;
            let statement = bank.statement(number)?;
            print_statement(output, &statement)?;
        }
        OpKind::Accounts => {
            let summaries: Vec<_> = bank
                .accounts()
                .iter()
                .map(|acc| AccountSummary {
                    number: acc.number(),
                    branch: acc.branch().to_string(),
                    client: bank
                        .client(acc.client_id())
                        .map_or_else(|| acc.client_id().to_string(), |c| c.name().to_string()),
                    balance: acc.balance(),
                })
                .collect();
            print_accounts(output, summaries.into_iter())?;
        }
    }
    Ok(())
}

// The original console flow defaults to the client's only account when no
// number is given, so scripts stay short for the common case.
fn resolve_account(
    bank: &InMemoryBank,
    client_id: &str,
    explicit: Option<AccountNumber>,
) -> Result<AccountNumber, ServiceError> {
    if let Some(number) = explicit {
        return Ok(number);
    }
    let client = bank
        .client(client_id)
        .ok_or_else(|| BankError::ClientNotFound(client_id.to_string()))?;
    client
        .accounts()
        .first()
        .copied()
        .ok_or_else(|| ServiceError::NoAccounts(client_id.to_string()))
}
