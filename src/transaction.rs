use rust_decimal::Decimal;

use crate::account::{Account, AccountError};
use crate::ledger::EntryKind;

/// An operation to run against one account. Immutable value; only the
/// ledger entry it produces on success is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    pub fn entry_kind(&self) -> EntryKind {
        match self {
            Self::Deposit(_) => EntryKind::Deposit,
            Self::Withdrawal(_) => EntryKind::Withdrawal,
        }
    }

    /// Validates against the account's rules and, only on success, mutates
    /// the balance and records the entry in the account's ledger. A failed
    /// apply leaves the account untouched.
    pub fn apply(&self, account: &mut Account) -> Result<(), AccountError> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount),
            Self::Withdrawal(amount) => account.withdraw(*amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use crate::account::AccountKind;

    use super::*;

    fn account() -> Account {
        Account::new("12345678900".to_string(), 1, AccountKind::Basic).unwrap()
    }

    #[test]
    fn successful_apply_commits_an_entry() {
        let mut acc = account();
        Transaction::Deposit(Decimal::from_u32(50).unwrap())
            .apply(&mut acc)
            .unwrap();
        Transaction::Withdrawal(Decimal::from_u32(20).unwrap())
            .apply(&mut acc)
            .unwrap();

        assert_eq!(acc.balance(), Decimal::from_u32(30).unwrap());
        let kinds: Vec<_> = acc.ledger().entries().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Deposit, EntryKind::Withdrawal]);
    }

    #[test]
    fn failed_apply_leaves_no_trace() {
        let mut acc = account();
        let err = Transaction::Withdrawal(Decimal::from_u32(10).unwrap())
            .apply(&mut acc)
            .unwrap_err();
        assert_eq!(err, AccountError::InsufficientFunds);
        assert_eq!(acc.balance(), Decimal::ZERO);
        assert!(acc.ledger().entries().is_empty());
    }

    #[test]
    fn amount_and_kind_accessors() {
        let tx = Transaction::Withdrawal(Decimal::from_u32(7).unwrap());
        assert_eq!(tx.amount(), Decimal::from_u32(7).unwrap());
        assert_eq!(tx.entry_kind(), EntryKind::Withdrawal);
    }
}
