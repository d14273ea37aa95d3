use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// A committed transaction record. Only successful transactions ever
/// materialize as entries, so the ledger is also the audit trail for the
/// account balance.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub kind: EntryKind,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(kind: EntryKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only, insertion-ordered history of one account.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of withdrawal entries currently in the ledger.
    ///
    /// Derived on every call rather than kept as a running counter, so it
    /// can never diverge from the history itself.
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Withdrawal)
            .count()
    }
}
