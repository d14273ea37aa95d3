/// Append-only transaction history, one per account. Also the source of
/// truth for the checking account's derived withdrawal count.
pub mod ledger;

/// The two elementary operations, deposit and withdrawal, each able to
/// validate itself against an account and commit on success.
pub mod transaction;

/// Account state machine: balance mutation under amount, funds and
/// checking-policy constraints.
pub mod account;

/// Clients and the pass-through entry point for running transactions on
/// their accounts.
pub mod client;

/// Client/account registries behind the [`bank::Bank`] seam, plus the
/// "in memory" implementation.
///
/// NOTE: Technically this interface is not necessary, but it is the
/// integration point to replace the in-memory registries with something
/// persistent.
pub mod bank;

/// Ideally, this module should exist in its own crate, as a way to
/// bootstrap the core logic. However, it is used by the integration test
/// so it lives here.
pub mod bin_utils;
