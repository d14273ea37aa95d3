use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::account::{AccountError, AccountKind, AccountNumber};
use crate::client::{Client, ClientId};
use crate::ledger::EntryKind;
use crate::transaction::Transaction;

pub mod in_memory_bank;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("No client registered under `{0}`")]
    ClientNotFound(ClientId),
    #[error("No account with number {0}")]
    AccountNotFound(AccountNumber),
    #[error("A client is already registered under `{0}`")]
    DuplicateClient(ClientId),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// One line of an account statement, in ledger order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct StatementLine {
    pub kind: EntryKind,
    pub amount: Decimal,
}

/// Rendering-agnostic statement: committed entries plus the current
/// balance. Formatting is the caller's concern.
#[derive(Debug)]
pub struct Statement {
    pub lines: Vec<StatementLine>,
    pub balance: Decimal,
}

/// Client and account registries behind one seam, so the in-memory
/// implementation could be swapped for something persistent without
/// touching callers.
pub trait Bank {
    fn register_client(&mut self, client: Client) -> Result<(), BankError>;

    /// Opens an account for an existing client and returns its number.
    /// Numbers are sequential; the registry supplies `count + 1` to the
    /// account constructor.
    fn open_account(
        &mut self,
        client_id: &str,
        kind: AccountKind,
    ) -> Result<AccountNumber, BankError>;

    fn execute(
        &mut self,
        client_id: &str,
        account_number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), BankError>;

    fn statement(&self, account_number: AccountNumber) -> Result<Statement, BankError>;
}
