use crate::account::{Account, AccountKind, AccountNumber};
use crate::client::Client;
use crate::transaction::Transaction;

use super::{Bank, BankError, Statement, StatementLine};

/// Owns the client and account registries. Both are append-only and
/// queried by linear scan over the unique identifier, which also keeps
/// listing order stable.
#[derive(Debug, Default)]
pub struct InMemoryBank {
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl InMemoryBank {
    pub fn client(&self, client_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == client_id)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Bank for InMemoryBank {
    fn register_client(&mut self, client: Client) -> Result<(), BankError> {
        if self.client(client.id()).is_some() {
            return Err(BankError::DuplicateClient(client.id().to_string()));
        }
        tracing::debug!(client = client.id(), "client registered");
        self.clients.push(client);
        Ok(())
    }

    fn open_account(
        &mut self,
        client_id: &str,
        kind: AccountKind,
    ) -> Result<AccountNumber, BankError> {
        // append-only in-memory registry: the count stays within u32,
        // so the cast cannot truncate
        let number = self.accounts.len() as AccountNumber + 1;
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id() == client_id)
            .ok_or_else(|| BankError::ClientNotFound(client_id.to_string()))?;
        let account = Account::new(client.id().to_string(), number, kind)?;
        client.add_account(number);
        self.accounts.push(account);
        tracing::debug!(client = client_id, account = number, "account opened");
        Ok(number)
    }

    fn execute(
        &mut self,
        client_id: &str,
        account_number: AccountNumber,
        transaction: Transaction,
    ) -> Result<(), BankError> {
        let client = self
            .clients
            .iter()
            .find(|c| c.id() == client_id)
            .ok_or_else(|| BankError::ClientNotFound(client_id.to_string()))?;
        if !client.accounts().contains(&account_number) {
            return Err(BankError::AccountNotFound(account_number));
        }
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.number() == account_number)
            .ok_or(BankError::AccountNotFound(account_number))?;
        client.execute(account, transaction)?;
        tracing::debug!(
            client = client_id,
            account = account_number,
            amount = %transaction.amount(),
            kind = ?transaction.entry_kind(),
            "transaction committed"
        );
        Ok(())
    }

    fn statement(&self, account_number: AccountNumber) -> Result<Statement, BankError> {
        let account = self
            .account(account_number)
            .ok_or(BankError::AccountNotFound(account_number))?;
        Ok(Statement {
            lines: account
                .ledger()
                .entries()
                .iter()
                .map(|entry| StatementLine {
                    kind: entry.kind,
                    amount: entry.amount,
                })
                .collect(),
            balance: account.balance(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::{AccountError, CheckingPolicy};
    use crate::ledger::EntryKind;

    use super::*;

    fn bank_with_alice() -> InMemoryBank {
        let mut bank = InMemoryBank::default();
        bank.register_client(Client::new(
            "52998224725".to_string(),
            "Alice".to_string(),
            "742 Evergreen Terrace".to_string(),
        ))
        .unwrap();
        bank
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut bank = bank_with_alice();
        let err = bank
            .register_client(Client::new(
                "52998224725".to_string(),
                "Alice again".to_string(),
                "elsewhere".to_string(),
            ))
            .unwrap_err();
        assert!(matches!(err, BankError::DuplicateClient(_)));
        assert!(bank.client("52998224725").is_some());
    }

    #[test]
    fn open_account_requires_registered_client() {
        let mut bank = InMemoryBank::default();
        let err = bank
            .open_account("00000000000", AccountKind::Basic)
            .unwrap_err();
        assert!(matches!(err, BankError::ClientNotFound(_)));
    }

    #[test]
    fn account_numbers_are_sequential() {
        let mut bank = bank_with_alice();
        let first = bank.open_account("52998224725", AccountKind::Basic).unwrap();
        let second = bank
            .open_account(
                "52998224725",
                AccountKind::Checking(CheckingPolicy::default()),
            )
            .unwrap();
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(bank.client("52998224725").unwrap().accounts(), &[1, 2]);
    }

    #[test]
    fn execute_checks_ownership() {
        let mut bank = bank_with_alice();
        bank.register_client(Client::new(
            "15350946056".to_string(),
            "Bob".to_string(),
            "31 Spooner Street".to_string(),
        ))
        .unwrap();
        let alice_acc = bank.open_account("52998224725", AccountKind::Basic).unwrap();

        let err = bank
            .execute(
                "15350946056",
                alice_acc,
                Transaction::Deposit(Decimal::from_u32(10).unwrap()),
            )
            .unwrap_err();
        assert!(matches!(err, BankError::AccountNotFound(_)));

        let err = bank
            .execute(
                "99999999999",
                alice_acc,
                Transaction::Deposit(Decimal::from_u32(10).unwrap()),
            )
            .unwrap_err();
        assert!(matches!(err, BankError::ClientNotFound(_)));
    }

    #[test]
    fn statement_for_unknown_account_fails() {
        let bank = bank_with_alice();
        let err = bank.statement(7).unwrap_err();
        assert!(matches!(err, BankError::AccountNotFound(7)));
    }

    // Full scenario: deposit 1000, withdraw 500 + 100 + 100, then hit the
    // withdrawals-per-period cap.
    #[test]
    fn checking_account_end_to_end() {
        let mut bank = bank_with_alice();
        let number = bank
            .open_account(
                "52998224725",
                AccountKind::Checking(CheckingPolicy::default()),
            )
            .unwrap();
        assert_eq!(number, 1);

        bank.execute(
            "52998224725",
            number,
            Transaction::Deposit(Decimal::from_u32(1000).unwrap()),
        )
        .unwrap();
        assert_eq!(
            bank.account(number).unwrap().balance(),
            Decimal::from_u32(1000).unwrap()
        );

        for amount in [500u32, 100, 100] {
            bank.execute(
                "52998224725",
                number,
                Transaction::Withdrawal(Decimal::from_u32(amount).unwrap()),
            )
            .unwrap();
        }

        let err = bank
            .execute(
                "52998224725",
                number,
                Transaction::Withdrawal(Decimal::from_u32(100).unwrap()),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            BankError::Account(AccountError::WithdrawalCountExceeded { max: 3 })
        ));

        let statement = bank.statement(number).unwrap();
        assert_eq!(statement.balance, Decimal::from_u32(300).unwrap());
        assert_eq!(statement.lines.len(), 4);
        assert_eq!(statement.lines[0].kind, EntryKind::Deposit);
        assert_eq!(statement.lines[1].amount, Decimal::from_u32(500).unwrap());
        assert_eq!(statement.lines[3].kind, EntryKind::Withdrawal);
    }
}
