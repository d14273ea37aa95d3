use rust_decimal::Decimal;
use thiserror::Error;

use crate::client::ClientId;
use crate::ledger::{EntryKind, Ledger, LedgerEntry};

pub type AccountNumber = u32;

/// Branch code attached to every account. Constant in this system.
pub const DEFAULT_BRANCH: &str = "0001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Amount must be positive")]
    InvalidAmount,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Withdrawal amount exceeds the per-withdrawal limit of {limit}")]
    WithdrawalLimitExceeded { limit: Decimal },
    #[error("Maximum of {max} withdrawals for the period already reached")]
    WithdrawalCountExceeded { max: u32 },
    #[error("Withdrawal limit and maximum withdrawal count must both be positive")]
    InvalidPolicy,
}

/// Withdrawal policy of a checking account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingPolicy {
    pub withdrawal_limit: Decimal,
    pub max_withdrawals: u32,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            withdrawal_limit: Decimal::new(500, 0),
            max_withdrawals: 3,
        }
    }
}

impl CheckingPolicy {
    fn validate(&self) -> Result<(), AccountError> {
        if self.withdrawal_limit <= Decimal::ZERO || self.max_withdrawals == 0 {
            return Err(AccountError::InvalidPolicy);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account, funds and amount checks only.
    Basic,
    /// Checking account, adds the per-withdrawal limit and the
    /// withdrawals-per-period cap on top of the basic checks.
    Checking(CheckingPolicy),
}

#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    client_id: ClientId,
    kind: AccountKind,
    balance: Decimal,
    ledger: Ledger,
}

impl Account {
    /// Creates an account with zero balance, the default branch code and an
    /// empty ledger. The caller supplies the account number; a checking
    /// policy is validated here so a misconfigured account cannot exist.
    pub fn new(
        client_id: ClientId,
        number: AccountNumber,
        kind: AccountKind,
    ) -> Result<Self, AccountError> {
        if let AccountKind::Checking(policy) = &kind {
            policy.validate()?;
        }
        Ok(Self {
            number,
            branch: DEFAULT_BRANCH.to_string(),
            client_id,
            kind,
            balance: Decimal::ZERO,
            ledger: Ledger::default(),
        })
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_deposit(amount)?;
        self.commit(LedgerEntry::new(EntryKind::Deposit, amount));
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.check_withdrawal(amount)?;
        self.commit(LedgerEntry::new(EntryKind::Withdrawal, amount));
        Ok(())
    }

    fn check_deposit(&self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        Ok(())
    }

    // Checking accounts evaluate limit before count, and both before the
    // basic funds checks.
    fn check_withdrawal(&self, amount: Decimal) -> Result<(), AccountError> {
        if let AccountKind::Checking(policy) = &self.kind {
            if amount > policy.withdrawal_limit {
                return Err(AccountError::WithdrawalLimitExceeded {
                    limit: policy.withdrawal_limit,
                });
            }
            if self.ledger.withdrawal_count() >= policy.max_withdrawals as usize {
                return Err(AccountError::WithdrawalCountExceeded {
                    max: policy.max_withdrawals,
                });
            }
        }
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }
        Ok(())
    }

    // Balance mutation and ledger append happen together, so the balance
    // always equals the sum of deposits minus withdrawals in the ledger.
    fn commit(&mut self, entry: LedgerEntry) {
        match entry.kind {
            EntryKind::Deposit => self.balance += entry.amount,
            EntryKind::Withdrawal => self.balance -= entry.amount,
        }
        self.ledger.append(entry);
    }
}
