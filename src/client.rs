use crate::account::{Account, AccountError, AccountNumber};
use crate::transaction::Transaction;

/// Tax-id style identifier, unique across the client registry.
pub type ClientId = String;

#[derive(Debug)]
pub struct Client {
    id: ClientId,
    name: String,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(id: ClientId, name: String, address: String) -> Self {
        Self {
            id,
            name,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// The single entry point through which account state changes. Pure
    /// pass-through; all financial rules live in [`Transaction`] and
    /// [`Account`].
    pub fn execute(
        &self,
        account: &mut Account,
        transaction: Transaction,
    ) -> Result<(), AccountError> {
        transaction.apply(account)
    }
}
