//! `ledgercheck-core` — ledger model building blocks.
//!
//! This crate contains **pure** ledger primitives (no IO): account names,
//! directives, and lookups over directive lists.

pub mod account;
pub mod directive;
pub mod error;
pub mod getters;

pub use account::Account;
pub use directive::{Amount, Close, Directive, Note, Open, Posting, Source, Transaction};
pub use error::{LedgerError, LedgerResult};
pub use getters::{OpenCloseMap, get_account_open_close, get_accounts};
